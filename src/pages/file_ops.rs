//! File operations for the pages system
//!
//! Handles listing, creating, renaming, deleting, and overwriting the
//! `<name>.txt` files that back each page, plus page-name validation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File extension for page files
pub const PAGE_EXTENSION: &str = "txt";

/// One entry in the page listing.
#[derive(Debug, Clone)]
pub struct PageEntry {
    pub name: String,
    pub modified: Option<String>,
}

/// Check that a page name is safe to use as a single path segment.
///
/// Rejects path traversal attempts and hidden files before any
/// filesystem access happens.
pub fn is_valid_page_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains("..")
        && !name.starts_with('.')
}

/// Derived path for a page: `<notes_dir>/<name>.txt`
pub fn page_path(notes_dir: &Path, name: &str) -> PathBuf {
    notes_dir.join(format!("{}.{}", name, PAGE_EXTENSION))
}

/// List all pages in the notes directory, sorted by name.
///
/// A page is any non-hidden regular file with the `.txt` extension;
/// its identity is the file stem. Other files are ignored.
pub fn list_pages(notes_dir: &Path) -> io::Result<Vec<PageEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(notes_dir)? {
        let entry = entry?;
        let path = entry.path();

        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n,
            None => continue,
        };
        // Skip hidden files (like .gitkeep)
        if name.starts_with('.') {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(PAGE_EXTENSION) {
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(_) => continue,
        };
        if !metadata.is_file() {
            continue;
        }

        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(s) => s.to_string(),
            None => continue,
        };

        let modified = metadata.modified().ok().map(|t| {
            let datetime: chrono::DateTime<chrono::Utc> = t.into();
            datetime.format("%Y-%m-%d %H:%M:%S").to_string()
        });

        entries.push(PageEntry {
            name: stem,
            modified,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(entries)
}

/// Create a page as an empty file.
///
/// No existence check: creating a page whose file already exists
/// truncates it to empty, matching `fs::write` semantics.
pub fn create_page(notes_dir: &Path, name: &str) -> io::Result<()> {
    fs::write(page_path(notes_dir, name), "")
}

/// Overwrite a page's content completely.
pub fn write_page(notes_dir: &Path, name: &str, content: &str) -> io::Result<()> {
    fs::write(page_path(notes_dir, name), content)
}

/// Move a page from `old_name` to `new_name`, preserving content.
/// Relies on the filesystem's atomic rename; no rollback.
pub fn rename_page(notes_dir: &Path, old_name: &str, new_name: &str) -> io::Result<()> {
    fs::rename(page_path(notes_dir, old_name), page_path(notes_dir, new_name))
}

/// Remove a page's file.
pub fn delete_page(notes_dir: &Path, name: &str) -> io::Result<()> {
    fs::remove_file(page_path(notes_dir, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_is_valid_page_name() {
        assert!(is_valid_page_name("foo"));
        assert!(is_valid_page_name("my page 1"));
        assert!(is_valid_page_name("notes-2024"));

        assert!(!is_valid_page_name(""));
        assert!(!is_valid_page_name("../etc/passwd"));
        assert!(!is_valid_page_name("a/b"));
        assert!(!is_valid_page_name("a\\b"));
        assert!(!is_valid_page_name(".hidden"));
        assert!(!is_valid_page_name(".."));
    }

    #[test]
    fn test_page_path() {
        let path = page_path(Path::new("/tmp/notes"), "foo");
        assert_eq!(path, PathBuf::from("/tmp/notes/foo.txt"));
    }

    #[test]
    fn test_create_then_list() {
        let dir = tempdir().unwrap();

        create_page(dir.path(), "foo").unwrap();
        let pages = list_pages(dir.path()).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "foo");
        assert!(pages[0].modified.is_some());
        assert_eq!(fs::read_to_string(dir.path().join("foo.txt")).unwrap(), "");
    }

    #[test]
    fn test_list_skips_hidden_and_foreign_files() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("foo.txt"), "").unwrap();
        fs::write(dir.path().join(".gitkeep"), "").unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let pages = list_pages(dir.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].name, "foo");
    }

    #[test]
    fn test_list_sorted_by_name() {
        let dir = tempdir().unwrap();

        for name in ["zebra", "alpha", "mango"] {
            create_page(dir.path(), name).unwrap();
        }

        let names: Vec<String> = list_pages(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["alpha", "mango", "zebra"]);
    }

    #[test]
    fn test_list_missing_dir_is_error() {
        let dir = tempdir().unwrap();
        assert!(list_pages(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempdir().unwrap();

        create_page(dir.path(), "foo").unwrap();
        write_page(dir.path(), "foo", "hello").unwrap();

        assert_eq!(
            fs::read_to_string(page_path(dir.path(), "foo")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_create_truncates_existing_page() {
        let dir = tempdir().unwrap();

        write_page(dir.path(), "foo", "precious content").unwrap();
        create_page(dir.path(), "foo").unwrap();

        assert_eq!(
            fs::read_to_string(page_path(dir.path(), "foo")).unwrap(),
            ""
        );
    }

    #[test]
    fn test_rename_preserves_content() {
        let dir = tempdir().unwrap();

        write_page(dir.path(), "foo", "hello").unwrap();
        rename_page(dir.path(), "foo", "bar").unwrap();

        let names: Vec<String> = list_pages(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["bar"]);
        assert_eq!(
            fs::read_to_string(page_path(dir.path(), "bar")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_rename_missing_source_is_error() {
        let dir = tempdir().unwrap();
        assert!(rename_page(dir.path(), "ghost", "bar").is_err());
    }

    #[test]
    fn test_delete_page() {
        let dir = tempdir().unwrap();

        create_page(dir.path(), "bar").unwrap();
        delete_page(dir.path(), "bar").unwrap();

        assert!(list_pages(dir.path()).unwrap().is_empty());
        assert!(delete_page(dir.path(), "bar").is_err());
    }
}
