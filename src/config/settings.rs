// Runtime configuration

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_MODEL_PATH: &str = "stance_model.json";

/// Resolved configuration for both the train and serve flows.
///
/// Credentials are passed explicitly into the client constructors at startup;
/// nothing here is written back into the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Congress.gov API key (required by both flows)
    pub congress_api_key: String,
    /// Gemini API key (required only to serve)
    pub gemini_api_key: Option<String>,
    /// HTTP bind address for `serve`
    pub bind_address: String,
    /// Where the trained pipeline artifact lives
    pub model_path: PathBuf,
}

impl Config {
    pub fn new(congress_api_key: String, gemini_api_key: Option<String>) -> Self {
        Self {
            congress_api_key,
            gemini_api_key,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.congress_api_key.trim().is_empty() {
            bail!("Congress API key is empty");
        }
        if self.bind_address.trim().is_empty() {
            bail!("Bind address is empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("key".to_string(), None);
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let config = Config::new("  ".to_string(), None);
        assert!(config.validate().is_err());
    }
}
