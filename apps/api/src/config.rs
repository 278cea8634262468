use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::extraction::Vocabulary;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
    /// JSON file overriding the built-in extraction vocabulary.
    pub vocabulary_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a positive integer")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            vocabulary_path: std::env::var("VOCABULARY_PATH").ok().map(PathBuf::from),
        })
    }

    /// The configured vocabulary override, or the built-in one.
    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary_path {
            Some(path) => Vocabulary::from_json_file(path),
            None => Ok(Vocabulary::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            vocabulary_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_without_path() {
        let config = Config::default();
        assert_eq!(config.load_vocabulary().unwrap(), Vocabulary::default());
    }

    #[test]
    fn test_missing_vocabulary_file_fails() {
        let config = Config {
            vocabulary_path: Some(PathBuf::from("/definitely/missing/vocab.json")),
            ..Config::default()
        };
        assert!(config.load_vocabulary().is_err());
    }
}
