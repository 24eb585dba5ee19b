//! Load phases a mod can hook into.
//!
//! The host drives every mod through the same sequence:
//! 1. [`PreLoadMod::pre_load`] before the database is loaded, with access to the
//!    mod loader, image router and config server
//! 2. [`PostDbLoadMod::post_db_load`] once the database tables are populated
//!
//! Each phase runs at most once per process during normal startup, and phase 1
//! always completes before phase 2 begins. Errors are returned to the host's
//! mod loader, which owns the failure policy.

use crate::services::{ConfigServer, DatabaseServer, ImageRouter, ModPathResolver};

/// Services available during the pre-load phase.
pub struct PreLoadServices<'a> {
    pub mod_loader: &'a dyn ModPathResolver,
    pub image_router: &'a mut dyn ImageRouter,
    pub config_server: &'a mut dyn ConfigServer,
}

impl<'a> PreLoadServices<'a> {
    pub fn new(
        mod_loader: &'a dyn ModPathResolver,
        image_router: &'a mut dyn ImageRouter,
        config_server: &'a mut dyn ConfigServer,
    ) -> Self {
        Self {
            mod_loader,
            image_router,
            config_server,
        }
    }
}

/// Mod hook invoked before the database is loaded.
pub trait PreLoadMod {
    fn pre_load(&self, services: &mut PreLoadServices<'_>) -> anyhow::Result<()>;
}

/// Mod hook invoked after the database is loaded.
pub trait PostDbLoadMod {
    fn post_db_load(&self, database: &mut dyn DatabaseServer) -> anyhow::Result<()>;
}
