// src/config.rs
use serde::Deserialize;
use std::sync::OnceLock;

use crate::enums::Convention;

/// Global config — loaded once at startup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Defaults {
    /// Convention used when the CLI flag is omitted
    #[serde(default)]
    pub convention: Convention,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logging {
    /// Force debug-level output even without RUST_LOG
    #[serde(default)]
    pub verbose: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at runtime — falls back to defaults if missing
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("B64CODEC_CONFIG").unwrap_or_else(|_| "b64codec.toml".to_string());

        if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read config file");
            toml::from_str(&content).expect("Invalid TOML in config file")
        } else {
            Config::default()
        }
    })
}
