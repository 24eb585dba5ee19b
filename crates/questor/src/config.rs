//! Installer settings loaded from `config/config.toml`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InstallError, Result};

/// Template id of the rouble stack.
pub const ROUBLES_TPL: &str = "5449016a4bdc2d6f028b456f";

/// How the refresh record is added to the host's trader config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateTimePolicy {
    /// Push a new record on every call; repeated calls leave duplicates.
    #[default]
    Append,

    /// Replace an existing record for the trader, appending only when none exists.
    Upsert,
}

/// Tunables for the generated trader. Every field may be omitted from the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    pub refresh_seconds: u32,
    pub update_time_policy: UpdateTimePolicy,
    pub barter_price: u32,
    pub currency_tpl: String,
    pub stack_objects_count: u32,
    pub loyalty_level: u8,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 3600,
            update_time_policy: UpdateTimePolicy::Append,
            barter_price: 10_000,
            currency_tpl: ROUBLES_TPL.to_string(),
            stack_objects_count: 1000,
            loyalty_level: 1,
        }
    }
}

impl InstallerConfig {
    /// Location of the config file inside the mod directory.
    pub const FILE: &'static str = "config/config.toml";

    /// Parse config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| InstallError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| InstallError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`InstallerConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(
                target: "questor::config",
                path = %path.display(),
                "No config file, using defaults"
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load `config/config.toml` from a mod directory.
    pub fn from_mod_dir(mod_dir: &Path) -> Result<Self> {
        Self::load_or_default(&mod_dir.join(Self::FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_config_matches_defaults() {
        let shipped: InstallerConfig = toml::from_str(include_str!("../config/config.toml")).unwrap();
        assert_eq!(shipped, InstallerConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: InstallerConfig = toml::from_str(
            r#"
            refresh_seconds = 1800
            update_time_policy = "upsert"
            "#,
        )
        .unwrap();

        assert_eq!(config.refresh_seconds, 1800);
        assert_eq!(config.update_time_policy, UpdateTimePolicy::Upsert);
        assert_eq!(config.barter_price, 10_000);
        assert_eq!(config.currency_tpl, ROUBLES_TPL);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(toml::from_str::<InstallerConfig>("trader_id = \"x\"").is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = InstallerConfig::load_or_default(Path::new("/nonexistent/questor.toml")).unwrap();
        assert_eq!(config, InstallerConfig::default());
    }
}
