//! The bundled trader definition.

use host::TraderBase;

use crate::error::{InstallError, Result};

/// Identifier the host's mod loader knows this mod by.
pub const MOD_NAME: &str = "Questor-Reboot";

/// Avatar image shipped in the mod's `res/` directory.
pub const AVATAR_FILE: &str = "questor.png";

const BASE_JSON: &str = include_str!("../db/base.json");

/// Static trader metadata, parsed once and cloned into the host on install.
#[derive(Clone, Debug, PartialEq)]
pub struct TraderDefinition {
    base: TraderBase,
}

impl TraderDefinition {
    /// Parses the `db/base.json` compiled into the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BASE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let base = serde_json::from_str(json).map_err(InstallError::Definition)?;
        Ok(Self { base })
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn base(&self) -> &TraderBase {
        &self.base
    }

    /// Image route key: the avatar URL without its file extension.
    pub fn avatar_route(&self) -> &str {
        strip_extension(&self.base.avatar)
    }
}

/// Drops a trailing `.ext` from the last path segment, if there is one.
fn strip_extension(path: &str) -> &str {
    match path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') && !stem.is_empty() && !stem.ends_with('/') => stem,
        _ => path,
    }
}
