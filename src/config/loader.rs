// Configuration loader
// Loads API keys from a TOML file or environment variables

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Load configuration.
///
/// Resolution order: an explicit `--config` path (error if unreadable), then
/// `~/.billstance/config.toml`, then the `CONGRESS_API_KEY` / `GEMINI_API_KEY`
/// environment variables.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit_path {
        return load_from_file(path).with_context(|| {
            format!("Failed to load configuration from {}", path.display())
        });
    }

    if let Some(path) = default_config_path() {
        if path.exists() {
            return load_from_file(&path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            });
        }
    }

    // Fall back to environment variables
    if let Ok(congress_key) = std::env::var("CONGRESS_API_KEY") {
        if !congress_key.is_empty() {
            let gemini_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
            let config = Config::new(congress_key, gemini_key);
            config.validate()?;
            return Ok(config);
        }
    }

    bail!(
        "No configuration found. Create ~/.billstance/config.toml with:\n\n\
        [congress_api]\n\
        api_key = \"...\"\n\n\
        [gemini_api]\n\
        api_key = \"...\"\n\n\
        or set the CONGRESS_API_KEY environment variable."
    );
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".billstance/config.toml"))
}

fn load_from_file(path: &Path) -> Result<Config> {
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        congress_api: KeySection,
        #[serde(default)]
        gemini_api: Option<KeySection>,
        #[serde(default)]
        server: Option<ServerSection>,
    }

    #[derive(serde::Deserialize)]
    struct KeySection {
        api_key: String,
    }

    #[derive(serde::Deserialize, Default)]
    struct ServerSection {
        bind_address: Option<String>,
        model_path: Option<PathBuf>,
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let toml_config: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut config = Config::new(
        toml_config.congress_api.api_key,
        toml_config
            .gemini_api
            .map(|g| g.api_key)
            .filter(|k| !k.is_empty()),
    );

    if let Some(server) = toml_config.server {
        if let Some(bind_address) = server.bind_address {
            config.bind_address = bind_address;
        }
        if let Some(model_path) = server.model_path {
            config.model_path = model_path;
        }
    }

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}
