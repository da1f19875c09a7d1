use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Backend
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Card export
    pub export_dir: PathBuf,
    pub export_background: String,
    pub pixel_ratio: u32,

    // Logging
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: "http://localhost:4000".to_string(),
            request_timeout_secs: 10,
            export_dir: PathBuf::from("exports"),
            export_background: "#111214".to_string(),
            pixel_ratio: 2,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str| std::env::var(key).ok();
        let defaults = Config::default();

        Config {
            api_base_url: env("TRADEBOOK_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout_secs: env("TRADEBOOK_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            export_dir: env("TRADEBOOK_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_dir),
            export_background: env("TRADEBOOK_EXPORT_BACKGROUND")
                .unwrap_or(defaults.export_background),
            pixel_ratio: env("TRADEBOOK_PIXEL_RATIO")
                .and_then(|v| v.parse().ok())
                .filter(|r| *r > 0)
                .unwrap_or(defaults.pixel_ratio),
            log_level: env("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn trades_url(&self) -> String {
        format!("{}/api/trades", self.api_base_url)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
