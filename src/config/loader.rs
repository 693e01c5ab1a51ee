//! Configuration loading from and saving to disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::config::schema::Document;

/// Error type for configuration loading and saving.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// On-disk encoding of the document, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
            _ => Format::Json,
        }
    }
}

/// Owns the location of the configuration document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    format: Format,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document.
    pub fn load(&self) -> Result<Document, ConfigError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(self.path.clone()))
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let parsed = match self.format {
            Format::Json => serde_json::from_str(&content).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|message| ConfigError::Parse {
            path: self.path.clone(),
            message,
        })
    }

    /// Like [`load`](Self::load), but an absent file yields an empty document.
    pub fn load_or_default(&self) -> Result<Document, ConfigError> {
        match self.load() {
            Err(ConfigError::NotFound(path)) => {
                tracing::debug!(path = %path.display(), "No config file yet, starting empty");
                Ok(Document::default())
            }
            other => other,
        }
    }

    /// Overwrite the file with `doc`.
    ///
    /// The document is written to a temporary file in the same directory and
    /// renamed over the target, so readers never see a half-written file.
    pub fn save(&self, doc: &Document) -> Result<(), ConfigError> {
        let mut content = match self.format {
            Format::Json => serde_json::to_string_pretty(doc)
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            Format::Toml => {
                toml::to_string_pretty(doc).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
        };
        if !content.ends_with('\n') {
            content.push('\n');
        }

        let write_err = |source: io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        // The temp file is created 0600; keep whatever mode the target had.
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(write_err)?;
        }
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;

        tracing::debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::Endpoint;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));

        assert!(matches!(store.load(), Err(ConfigError::NotFound(_))));
        assert_eq!(store.load_or_default().unwrap(), Document::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ apps: ").unwrap();

        let store = ConfigStore::new(&path);
        assert!(matches!(store.load(), Err(ConfigError::Parse { .. })));
        // load_or_default only forgives a missing file
        assert!(matches!(store.load_or_default(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_save_then_load_json() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("config.json"));

        let mut doc = Document::default();
        doc.apps = vec!["signaling".into()];
        doc.dev.insert("signaling".into(), Endpoint::new(9001, "sig-dev"));
        doc.prod.insert("signaling".into(), Endpoint::new(9000, "sig-prod"));
        doc.root = "/srv".into();
        doc.output_path = Some("/etc/nginx/switch.conf".into());

        store.save(&doc).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.ends_with('\n'));
        assert!(raw.contains("\"outputPath\""));

        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_toml_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("switch.toml");
        fs::write(
            &path,
            r#"
apps = ["mute"]
root = "/root"
outputPath = "/etc/nginx/switch.conf"

[dev.mute]
port = 3001
folder = "A"

[prod.mute]
port = 3000
folder = "B"
"#,
        )
        .unwrap();

        let store = ConfigStore::new(&path);
        let mut doc = store.load().unwrap();
        assert_eq!(doc.dev["mute"], Endpoint::new(3001, "A"));
        assert_eq!(doc.prod["mute"].folder, "B");

        doc.root = "/home".into();
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "x".repeat(4096)).unwrap();

        let store = ConfigStore::new(&path);
        store.save(&Document::default()).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains('x'));
        assert_eq!(store.load().unwrap(), Document::default());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = ConfigStore::new(&path);
        let doc = store.load().unwrap();
        store.save(&doc).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("nope").join("config.json"));

        assert!(matches!(
            store.save(&Document::default()),
            Err(ConfigError::Write { .. })
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("a/config.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("a/config.TOML")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("config")), Format::Json);
    }
}
