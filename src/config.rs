use std::env;
use std::path::{Path, PathBuf};

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const MODE: &str = "MODE";
    pub const HTTP_PORT: &str = "HTTP_PORT";
    pub const HTTPS_PORT: &str = "HTTPS_PORT";
    pub const SSL_KEY_PATH: &str = "SSL_KEY_PATH";
    pub const SSL_CERT_PATH: &str = "SSL_CERT_PATH";
    /// Override for the notes directory (handy for deployment and tests).
    pub const NOTES_DIR: &str = "NOTES_DIR";
}

/// Default values
pub mod defaults {
    pub const HTTP_PORT: u16 = 80;
    pub const HTTPS_PORT: u16 = 443;
    pub const NOTES_DIR: &str = "notes";
}

/// Returns the absolute path to the crate directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// the same way regardless of the working directory at runtime.
pub fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the notes directory (NOTES_DIR env override, else ./notes next to the manifest)
pub fn notes_dir() -> PathBuf {
    match env::var(env_vars::NOTES_DIR) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => crate_dir().join(defaults::NOTES_DIR),
    }
}

/// Which listeners to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenMode {
    Http,
    Https,
    Both,
}

impl ListenMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "http" => Some(ListenMode::Http),
            "https" => Some(ListenMode::Https),
            "both" => Some(ListenMode::Both),
            _ => None,
        }
    }

    pub fn serves_http(self) -> bool {
        matches!(self, ListenMode::Http | ListenMode::Both)
    }

    pub fn serves_https(self) -> bool {
        matches!(self, ListenMode::Https | ListenMode::Both)
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mode: ListenMode,
    pub http_port: u16,
    pub https_port: u16,
    pub ssl_key_path: Option<String>,
    pub ssl_cert_path: Option<String>,
    pub notes_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> std::io::Result<Self> {
        let mode_str = env::var(env_vars::MODE).unwrap_or_else(|_| "http".to_string());
        let mode = ListenMode::parse(&mode_str).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("MODE must be one of http, https, both (got {:?})", mode_str),
            )
        })?;

        let http_port = parse_port(env_vars::HTTP_PORT, defaults::HTTP_PORT)?;
        let https_port = parse_port(env_vars::HTTPS_PORT, defaults::HTTPS_PORT)?;

        let ssl_key_path = env::var(env_vars::SSL_KEY_PATH).ok();
        let ssl_cert_path = env::var(env_vars::SSL_CERT_PATH).ok();

        if mode.serves_https() && (ssl_key_path.is_none() || ssl_cert_path.is_none()) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "SSL_KEY_PATH and SSL_CERT_PATH are required when MODE enables https",
            ));
        }

        Ok(Self {
            mode,
            http_port,
            https_port,
            ssl_key_path,
            ssl_cert_path,
            notes_dir: notes_dir(),
        })
    }
}

fn parse_port(var: &str, default: u16) -> std::io::Result<u16> {
    match env::var(var) {
        Ok(v) => v.parse().map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("{} must be a valid port number (got {:?})", var, v),
            )
        }),
        Err(_) => Ok(default),
    }
}

/// Create the notes directory if it doesn't exist.
/// Called at startup before any listener starts accepting requests.
pub fn initialize_notes_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    log::info!("Notes directory: {:?}", dir);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_mode_parse() {
        assert_eq!(ListenMode::parse("http"), Some(ListenMode::Http));
        assert_eq!(ListenMode::parse("https"), Some(ListenMode::Https));
        assert_eq!(ListenMode::parse("both"), Some(ListenMode::Both));
        assert_eq!(ListenMode::parse("HTTP"), None);
        assert_eq!(ListenMode::parse(""), None);
    }

    #[test]
    fn test_listen_mode_listeners() {
        assert!(ListenMode::Http.serves_http());
        assert!(!ListenMode::Http.serves_https());
        assert!(!ListenMode::Https.serves_http());
        assert!(ListenMode::Https.serves_https());
        assert!(ListenMode::Both.serves_http());
        assert!(ListenMode::Both.serves_https());
    }

    #[test]
    fn test_initialize_notes_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("notes");
        initialize_notes_dir(&dir).unwrap();
        assert!(dir.is_dir());
        // Idempotent
        initialize_notes_dir(&dir).unwrap();
    }
}
