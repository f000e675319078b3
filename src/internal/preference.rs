use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

const PREFERENCE_FILE: &str = "dark_mode.json";

/// Durable light/dark preference: a single boolean serialized as JSON text
/// in the OS config directory.
///
/// Loading never fails: missing or unparseable data falls back to light
/// mode. Persistence is best-effort, so a storage failure is logged and the
/// in-memory state still changes for the current session.
#[derive(Debug, Clone, Default)]
pub struct ThemePreference {
    is_dark: bool,
    file_path: Option<PathBuf>,
}

impl ThemePreference {
    pub fn load_or_default() -> Self {
        match Self::resolve_path() {
            Ok(path) => Self::from_path(path),
            Err(e) => {
                warn!("Theme preference storage unavailable, staying in-memory: {e}");
                Self {
                    is_dark: false,
                    file_path: None,
                }
            }
        }
    }

    /// Read the preference from an explicit file path. Used directly by
    /// tests; `load_or_default` resolves the real location.
    pub fn from_path(path: PathBuf) -> Self {
        let is_dark = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<bool>(&content) {
                Ok(value) => value,
                Err(e) => {
                    warn!(path = %path.display(), "Ignoring unparseable theme preference: {e}");
                    false
                }
            },
            Err(_) => false,
        };

        Self {
            is_dark,
            file_path: Some(path),
        }
    }

    fn resolve_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("tui-inbrief-app");

        match config_dir.exists() {
            false => {
                fs::create_dir_all(&config_dir).with_context(|| {
                    format!("Failed to create config directory {}", config_dir.display())
                })?;
                info!(config_dir = %config_dir.display(), "Created config directory for preferences");
            }
            true => {}
        }

        Ok(config_dir.join(PREFERENCE_FILE))
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Negate the preference, persist it best-effort, and return the new
    /// value.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        if let Err(e) = self.persist() {
            warn!("Failed to persist theme preference: {e}");
        }
        self.is_dark
    }

    fn persist(&self) -> Result<()> {
        match &self.file_path {
            Some(path) => {
                let content = serde_json::to_string(&self.is_dark)
                    .context("Failed to serialize theme preference")?;
                fs::write(path, content).with_context(|| {
                    format!("Failed to write theme preference to {}", path.display())
                })?;
                Ok(())
            }
            // Storage was unavailable at startup; keep the session in-memory.
            None => Ok(()),
        }
    }
}
