//! Configuration loading for sender-purge
//!
//! Provides utilities for locating and loading JSON configuration files
//! from the shared config directory (~/.config/sender-purge/).

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Name of the application's directory under the platform config dir
const APP_DIR: &str = "sender-purge";

/// Get the sender-purge config directory (~/.config/sender-purge/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Get the path to a config file within the config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Parse `filename` from the config directory; `None` when it is absent
///
/// A missing config directory counts as absent. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_json_if_exists<T: DeserializeOwned>(filename: &str) -> Result<Option<T>> {
    match config_path(filename) {
        Some(path) => load_json_file_if_exists(&path),
        None => Ok(None),
    }
}

/// Parse the JSON file at `path`; `None` when there is no such file
pub fn load_json_file_if_exists<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_json(&content, path).map(Some),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read config file: {}", path.display()))
        }
    }
}

/// Parse the JSON file at `path`, which must exist
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_json(&content, path)
}

fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_config_dir() {
        let dir = config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("sender-purge"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path("settings.json");
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("sender-purge/settings.json"));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{ "name": "purge", "count": 3 }"#).unwrap();

        let sample: Sample = load_json_file(&path).unwrap();
        assert_eq!(sample.name, "purge");
        assert_eq!(sample.count, 3);
    }

    #[test]
    fn test_load_json_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_json_file::<Sample>(&dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_if_exists_absent_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Sample> =
            load_json_file_if_exists(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_if_exists_present_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{ "name": "purge", "count": 7 }"#).unwrap();

        let loaded: Option<Sample> = load_json_file_if_exists(&path).unwrap();
        assert_eq!(loaded.map(|s| s.count), Some(7));
    }

    #[test]
    fn test_load_if_exists_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[1, 2").unwrap();

        assert!(load_json_file_if_exists::<Sample>(&path).is_err());
    }

    #[test]
    fn test_load_json_file_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_json_file::<Sample>(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
