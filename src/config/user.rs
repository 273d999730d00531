//! User-level configuration
//!
//! Optional TOML file declaring extra environment variables per setting:
//!
//! ```toml
//! [aliases]
//! openai_key = ["AZURE_OPENAI_API_KEY"]
//! deepseek_key = ["DS_KEY"]
//! ```
//!
//! Config file location, in priority order:
//! 1. `--config <PATH>` CLI flag
//! 2. `BBM_CONFIG_PATH` environment variable
//! 3. `$XDG_CONFIG_HOME/bbm/config.toml` or `~/.config/bbm/config.toml`
//!    (`%APPDATA%\bbm\config.toml` on Windows)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use color_print::cformat;
use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};
use serde::{Deserialize, Serialize};

use super::settings::Setting;
use crate::error::KeysError;
use crate::styling::{eprintln, warning_message};

/// Override for user config path, set via --config CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the user config path override (called from CLI --config flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

fn is_config_path_explicit() -> bool {
    CONFIG_PATH.get().is_some()
}

pub fn get_config_path() -> Option<PathBuf> {
    // Priority 1: CLI --config flag
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    // Priority 2: Environment variable (also used by tests)
    if let Some(path) = std::env::var_os("BBM_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    // choose_base_strategy uses XDG on Linux and macOS, %APPDATA% on Windows
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("bbm").join("config.toml"))
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Extra variables per setting name, checked after the built-in candidates
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl UserConfig {
    /// Load the user config from its resolved location.
    ///
    /// A missing file is an empty config. The warning for a missing file is
    /// only shown when the path came from `--config`.
    pub fn load() -> Result<Self, KeysError> {
        let Some(path) = get_config_path() else {
            log::debug!("No config directory available");
            return Ok(Self::default());
        };
        if !path.exists() {
            if is_config_path_explicit() {
                eprintln!(
                    "{}",
                    warning_message(cformat!(
                        "Config file not found: <bold>{}</>",
                        path.display()
                    ))
                );
            }
            log::debug!("No config at {}", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, KeysError> {
        log::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| KeysError::ConfigRead {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Parse config content; `origin` only labels errors.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, KeysError> {
        let config: Self = toml::from_str(content).map_err(|e| KeysError::ConfigParse {
            path: origin.to_path_buf(),
            error: e.to_string(),
        })?;
        config.alias_table()?;
        Ok(config)
    }

    /// Validated aliases keyed by setting.
    pub fn alias_table(&self) -> Result<BTreeMap<Setting, Vec<String>>, KeysError> {
        let mut table = BTreeMap::new();
        for (name, aliases) in &self.aliases {
            let setting = Setting::parse(name)?;
            if let Some(bad) = aliases
                .iter()
                .find(|a| a.is_empty() || a.contains(['=', '\0']))
            {
                return Err(KeysError::InvalidAlias {
                    setting,
                    alias: bad.clone(),
                });
            }
            table
                .entry(setting)
                .or_insert_with(Vec::new)
                .extend(aliases.iter().cloned());
        }
        Ok(table)
    }
}
