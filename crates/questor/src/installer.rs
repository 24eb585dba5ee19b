//! The trader installer and its two load-phase hooks.
//!
//! Phase 1 ([`PreLoadMod`]) registers the avatar image route and the assort
//! refresh interval. Phase 2 ([`PostDbLoadMod`]) inserts the trader record into
//! the registry and patches every locale. The record and locale entry are
//! computed by pure builders; the hooks only apply them to host state.

use std::path::{Path, PathBuf};

use host::{
    ConfigServer, DatabaseServer, ImageRouter, ItemCatalog, ModPathResolver, PostDbLoadMod,
    PreLoadMod, PreLoadServices, Trader, TraderAssort, UpdateTime,
};
use tracing::{debug, info};

use crate::assort::create_assort_table;
use crate::config::{InstallerConfig, UpdateTimePolicy};
use crate::definition::{AVATAR_FILE, MOD_NAME, TraderDefinition};
use crate::error::Result;
use crate::locale::{patch_locales, trader_locale};

/// Installs the Questor trader into a host server.
#[derive(Clone, Debug)]
pub struct TraderInstaller {
    definition: TraderDefinition,
    config: InstallerConfig,
}

impl TraderInstaller {
    /// Creates an installer for the bundled trader with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(InstallerConfig::default())
    }

    pub fn with_config(config: InstallerConfig) -> Result<Self> {
        Ok(Self::from_parts(TraderDefinition::bundled()?, config))
    }

    pub fn from_parts(definition: TraderDefinition, config: InstallerConfig) -> Self {
        Self { definition, config }
    }

    pub fn definition(&self) -> &TraderDefinition {
        &self.definition
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Registers the avatar route pointing at `<mod dir>/res/questor.png`.
    ///
    /// A relative mod directory is resolved under `./`; an absolute one is
    /// used as-is. Returns the registered image path. Fails only if the host
    /// cannot resolve this mod's directory.
    pub fn register_profile_image(
        &self,
        mod_loader: &dyn ModPathResolver,
        image_router: &mut dyn ImageRouter,
    ) -> Result<PathBuf> {
        let mod_dir = mod_loader.mod_path(MOD_NAME)?;
        let image_path = Path::new(".").join(mod_dir).join("res").join(AVATAR_FILE);
        let route = self.definition.avatar_route();

        image_router.add_route(route, image_path.clone());

        info!(
            target: "questor::installer",
            trader = self.definition.id(),
            route,
            path = %image_path.display(),
            "Profile image registered"
        );

        Ok(image_path)
    }

    /// Registers the trader's assort refresh interval.
    pub fn setup_trader_update_time(&self, config_server: &mut dyn ConfigServer) {
        let record = UpdateTime::new(self.definition.id(), self.config.refresh_seconds);
        let trader_config = config_server.trader_config_mut();

        match self.config.update_time_policy {
            UpdateTimePolicy::Append => trader_config.push_update_time(record),
            UpdateTimePolicy::Upsert => {
                if let Some(previous) = trader_config.upsert_update_time(record) {
                    debug!(
                        target: "questor::installer",
                        trader = self.definition.id(),
                        previous_seconds = previous.seconds,
                        "Replaced existing refresh record"
                    );
                }
            }
        }

        info!(
            target: "questor::installer",
            trader = self.definition.id(),
            seconds = self.config.refresh_seconds,
            policy = ?self.config.update_time_policy,
            "Refresh interval registered"
        );
    }

    /// Builds the assort table from the database's current item catalog.
    pub fn create_assort_table(&self, database: &dyn DatabaseServer) -> TraderAssort {
        create_assort_table(&database.tables().templates.items, &self.config)
    }

    /// Builds the registry record: a fresh copy of the base, the generated
    /// assort and no quest assort.
    pub fn build_trader(&self, catalog: &ItemCatalog) -> Trader {
        Trader {
            base: self.definition.base().clone(),
            assort: Some(create_assort_table(catalog, &self.config)),
            questassort: None,
        }
    }

    /// Inserts the trader into the registry and its display strings into every locale.
    pub fn post_database_load(&self, database: &mut dyn DatabaseServer) {
        let trader_id = self.definition.id();
        let trader = self.build_trader(&database.tables().templates.items);
        let stock = trader.assort.as_ref().map_or(0, TraderAssort::len);

        let tables = database.tables_mut();
        if tables.traders.insert(trader_id.to_string(), trader).is_some() {
            debug!(
                target: "questor::installer",
                trader = trader_id,
                "Replaced existing trader record"
            );
        }

        let entry = trader_locale(self.definition.base());
        let locales = patch_locales(&mut tables.locales, trader_id, &entry);

        info!(
            target: "questor::installer",
            trader = trader_id,
            stock,
            locales,
            "Trader installed"
        );
    }
}

impl PreLoadMod for TraderInstaller {
    fn pre_load(&self, services: &mut PreLoadServices<'_>) -> anyhow::Result<()> {
        self.register_profile_image(services.mod_loader, services.image_router)?;
        self.setup_trader_update_time(services.config_server);
        Ok(())
    }
}

impl PostDbLoadMod for TraderInstaller {
    fn post_db_load(&self, database: &mut dyn DatabaseServer) -> anyhow::Result<()> {
        self.post_database_load(database);
        Ok(())
    }
}
