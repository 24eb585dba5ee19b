//! Questor: a server mod adding a trader who sells every quest item.
//!
//! The trader's identity ships in `db/base.json` and its avatar in
//! `res/questor.png`. On load the mod:
//! - registers the avatar image route and a one-hour assort refresh (pre-load)
//! - inserts the trader with an assort built from all quest-flagged items,
//!   each priced at a fixed rouble barter (post-database-load)
//! - adds the trader's display strings to every locale (post-database-load)
//!
//! [`TraderInstaller`] implements the host's [`host::PreLoadMod`] and
//! [`host::PostDbLoadMod`] hooks. The builders in [`assort`] and [`locale`] are
//! pure and can be used without a host.
pub mod assort;
pub mod config;
pub mod definition;
pub mod error;
pub mod installer;
pub mod locale;

pub use assort::create_assort_table;
pub use config::{InstallerConfig, UpdateTimePolicy};
pub use definition::{MOD_NAME, TraderDefinition};
pub use error::{InstallError, Result};
pub use installer::TraderInstaller;
pub use locale::{patch_locales, trader_locale};
