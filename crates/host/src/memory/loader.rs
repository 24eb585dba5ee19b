//! Fixed [`ModPathResolver`].

use std::collections::HashMap;
use std::path::PathBuf;

use crate::services::ModPathResolver;
use crate::{HostError, Result};

/// ModPathResolver backed by a fixed name → directory table.
#[derive(Clone, Debug, Default)]
pub struct StaticModPaths {
    paths: HashMap<String, PathBuf>,
}

impl StaticModPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mod directory.
    pub fn with_mod(mut self, mod_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(mod_name.into(), path.into());
        self
    }
}

impl ModPathResolver for StaticModPaths {
    fn mod_path(&self, mod_name: &str) -> Result<PathBuf> {
        self.paths
            .get(mod_name)
            .cloned()
            .ok_or_else(|| HostError::UnknownMod(mod_name.to_string()))
    }
}
