use actix_cors::Cors;
use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod controllers;
mod pages;
mod tls;
mod views;

use config::Config;

pub struct AppState {
    pub notes_dir: PathBuf,
    pub started_at: Instant,
}

impl AppState {
    pub fn for_dir(notes_dir: PathBuf) -> Self {
        Self {
            notes_dir,
            started_at: Instant::now(),
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notepad server v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    config::initialize_notes_dir(&config.notes_dir)?;

    let notes_dir = config.notes_dir.clone();
    // Built once, shared by every worker: uptime is measured from here
    let state = web::Data::new(AppState::for_dir(notes_dir.clone()));

    let mut server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::pages::config)
            .configure(controllers::editor::config)
            // Raw note files: the editor view populates its textarea from here
            .service(Files::new("/notes", notes_dir.clone()))
    });

    if config.mode.serves_http() {
        server = server.bind(("0.0.0.0", config.http_port))?;
        log::info!("HTTP server running on port {}", config.http_port);
    }

    if config.mode.serves_https() {
        let cert_path = config
            .ssl_cert_path
            .as_deref()
            .expect("SSL_CERT_PATH checked in Config::from_env");
        let key_path = config
            .ssl_key_path
            .as_deref()
            .expect("SSL_KEY_PATH checked in Config::from_env");

        let tls_config = tls::load_rustls_config(cert_path, key_path)?;
        server = server.bind_rustls_0_23(("0.0.0.0", config.https_port), tls_config)?;
        log::info!("HTTPS server running on port {}", config.https_port);
    }

    server.run().await
}
