use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/widget.json";

const DEFAULT_ENDPOINT: &str = "http://localhost:8001/chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote assistant endpoint receiving the chat POSTs.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("config/does-not-exist.json");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn endpoint_override_is_parsed() {
        let config: AppConfig =
            serde_json::from_str(r#"{"endpoint":"http://10.0.0.5:9000/chat"}"#)
                .expect("parseable");
        assert_eq!(config.endpoint, "http://10.0.0.5:9000/chat");
    }

    #[test]
    fn empty_object_uses_default_endpoint() {
        let config: AppConfig = serde_json::from_str("{}").expect("parseable");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
