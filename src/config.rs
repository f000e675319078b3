use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the story backend serving the `/stories` collection.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Terminal width (columns) at or above which the detail pane is shown
    /// beside the story list instead of below it.
    #[serde(default = "default_breakpoint_cols")]
    pub breakpoint_cols: u16,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level used when RUST_LOG is not set (e.g. "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Per-module overrides appended to the base filter.
    #[serde(default)]
    pub module_levels: HashMap<String, String>,
    /// Directory for the rotating log file. Defaults to "logs".
    #[serde(default)]
    pub log_directory: Option<String>,
    /// Emit render/fetch timing at debug level.
    #[serde(default)]
    pub enable_performance_metrics: bool,
}

fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_breakpoint_cols() -> u16 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            breakpoint_cols: default_breakpoint_cols(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            module_levels: HashMap::new(),
            log_directory: None,
            enable_performance_metrics: false,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        // Look for config.ron in current directory or next to executable
        let mut candidates = Vec::new();

        // 1. Current working directory
        candidates.push(PathBuf::from("config.ron"));

        // 2. Next to executable
        if let Ok(exe) = std::env::current_exe()
            && let Some(dir) = exe.parent()
        {
            candidates.push(dir.join("config.ron"));
        }

        for path in candidates {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match ron::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {}", path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse config at {}: {}", path.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Self::default()
    }
}
