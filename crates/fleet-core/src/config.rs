//! Configuration for fleet (stored in ~/.config/fleet/config.toml)
//!
//! The document is small and flat. Missing keys fall back to defaults, and
//! every settings edit rewrites the whole file.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{FleetError, Result};
use crate::id::{MAX_LEN, MIN_LEN};

const CONFIG_DIR: &str = "fleet";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "FLEET_CONFIG_DIR";

/// Keys accepted by [`Config::set`]
pub const KEYS: &[&str] = &["path", "len", "maxDays", "editor"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding fleeting notes, relative to the vault root
    pub path: String,

    /// Identifier length for new notes
    pub len: usize,

    /// Days after which a note expires regardless of tags
    #[serde(rename = "maxDays")]
    pub max_days: u32,

    /// Editor override (optional; falls back to $VISUAL / $EDITOR)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            path: "fleeting".to_string(),
            len: 6,
            max_days: 30,
            editor: None,
        }
    }
}

impl Config {
    /// Default location: `$FLEET_CONFIG_DIR/config.toml`, else the
    /// platform config directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    FleetError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration, merging the stored keys over defaults.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_missing_using_defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), "config_saved");
        Ok(())
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if !(MIN_LEN..=MAX_LEN).contains(&self.len) {
            bail_invalid!("len (expected 4-11)", self.len);
        }
        if self.max_days == 0 {
            bail_invalid!("maxDays (expected a positive number of days)", self.max_days);
        }
        Ok(())
    }

    /// Apply one settings edit. The config is left untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "path" => next.path = value.trim().to_string(),
            "len" => {
                next.len = value
                    .trim()
                    .parse()
                    .map_err(|_| FleetError::invalid_value("len (expected 4-11)", value))?;
            }
            "maxDays" | "max_days" | "max-days" => {
                next.max_days = value.trim().parse().map_err(|_| {
                    FleetError::invalid_value("maxDays (expected a positive number of days)", value)
                })?;
            }
            "editor" => {
                let value = value.trim();
                next.editor = (!value.is_empty()).then(|| value.to_string());
            }
            other => {
                return Err(FleetError::UsageError(format!(
                    "unknown config key: {} (expected one of: {})",
                    other,
                    KEYS.join(", ")
                )))
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// The managed directory for a given vault root
    pub fn notes_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        bail_invalid!("path (expected a non-empty directory)", "\"\"");
    }
    let escapes = Path::new(path)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        bail_invalid!("path (expected a directory inside the vault)", path);
    }
    Ok(())
}
