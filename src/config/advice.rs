use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use lazy_static::lazy_static;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        AdviceConfig {
            endpoint: "http://localhost:11434/api/generate".to_string(),
            model: "qwen2.5:7b-instruct".to_string(),
            timeout_secs: 30,
        }
    }
}

fn get_config_path() -> PathBuf {
    // Use platform-specific app data directory
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support/com.mentoria.app");
            dir.push("mentoria.toml");
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push("com.mentoria.app");
            dir.push("mentoria.toml");
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share/com.mentoria.app");
            dir.push("mentoria.toml");
            return dir;
        }
    }

    // Fallback
    PathBuf::from("mentoria.toml")
}

fn load_advice_config_internal() -> AdviceConfig {
    let config_path = get_config_path();

    // Try to load from config file
    if let Ok(content) = fs::read_to_string(&config_path) {
        match toml::from_str::<AdviceConfig>(&content) {
            Ok(config) => {
                tracing::info!(path = ?config_path, "Loaded advice config");
                return config;
            }
            Err(e) => {
                tracing::warn!(path = ?config_path, error = %e, "Failed to parse mentoria.toml, using defaults");
            }
        }
    }

    // Return defaults if file doesn't exist or parsing fails
    tracing::info!("Using default advice configuration");
    AdviceConfig::default()
}

lazy_static! {
    static ref ADVICE_CONFIG: AdviceConfig = load_advice_config_internal();
}

/// Get the cached advice configuration (loaded once at startup)
pub fn get_advice_config() -> &'static AdviceConfig {
    &ADVICE_CONFIG
}
