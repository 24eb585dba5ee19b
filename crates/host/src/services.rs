//! Host services a mod may call during loading.
//!
//! Each trait is a narrow capability: a mod receives exactly the services its
//! phase needs and nothing else.

use std::path::PathBuf;

use crate::Result;
use crate::models::{DatabaseTables, TraderConfig};

/// Resolves the on-disk directory of a loaded mod.
pub trait ModPathResolver {
    /// Returns the mod's directory relative to the server root, e.g. `user/mods/<name>/`.
    fn mod_path(&self, mod_name: &str) -> Result<PathBuf>;
}

/// Serves static images under URL routes.
pub trait ImageRouter {
    /// Maps `route` (a URL path without extension) to an image file.
    fn add_route(&mut self, route: &str, path: PathBuf);
}

/// Exposes mutable server configuration.
pub trait ConfigServer {
    fn trader_config(&self) -> &TraderConfig;

    fn trader_config_mut(&mut self) -> &mut TraderConfig;
}

/// Exposes the loaded database tables.
pub trait DatabaseServer {
    fn tables(&self) -> &DatabaseTables;

    fn tables_mut(&mut self) -> &mut DatabaseTables;
}
