//! Server configuration.
//!
//! Settings are read from an optional `tryon.json` in the working directory.
//! Every field has a default, so the file may be absent or list only the
//! values that differ:
//!
//! ```json
//! { "port": 8080, "base_dir": "/var/lib/tryon" }
//! ```

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "tryon.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Interface the HTTP server binds to.
    pub host: String,
    pub port: u16,
    /// Root of the `assets/`, `inputs/` and `output/` tree.
    pub base_dir: PathBuf,
    /// Open the landing page in the default browser once the server is up.
    pub open_browser: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            base_dir: PathBuf::from("."),
            open_browser: true,
        }
    }
}

impl Config {
    /// Loads `tryon.json` from the working directory, falling back to defaults
    /// when the file does not exist.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, Box<dyn Error>> {
        match fs::read(path) {
            Ok(bytes) => Self::from_json(&bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("Unable to read {}: {}", path.display(), e).into()),
        }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, Box<dyn Error>> {
        serde_json::from_slice(bytes).map_err(|e| format!("Invalid configuration: {}", e).into())
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::from_json(br#"{ "port": 8080, "base_dir": "/srv/tryon" }"#).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.base_dir, PathBuf::from("/srv/tryon"));
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.open_browser);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ port: }").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
