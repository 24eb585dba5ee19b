//! Host-side contracts for server mods.
//!
//! The game server owns its database, image routes and configuration. Mods never
//! reach into those through globals; instead the host hands them capability
//! objects defined here. The crate is organized by responsibility:
//! - [`models`] mirrors the JSON shape of the host tables mods read and write
//! - [`services`] declares the host services a mod may call
//! - [`lifecycle`] declares the two load phases a mod can hook into
//! - [`memory`] provides in-memory services for tests and local runs
pub mod error;
pub mod lifecycle;
pub mod memory;
pub mod models;
pub mod services;

pub use error::{HostError, Result};
pub use lifecycle::{PostDbLoadMod, PreLoadMod, PreLoadServices};
pub use memory::{InMemoryConfigServer, InMemoryDatabase, InMemoryImageRouter, StaticModPaths};
pub use models::{
    AssortItem, BarterComponent, BarterScheme, DatabaseTables, GlobalLocale, ItemCatalog,
    ItemProps, ItemTemplate, LocaleTables, LoyaltyLevels, QuestAssort, Templates, Trader,
    TraderAssort, TraderBase, TraderConfig, TraderLocale, Upd, UpdateTime,
};
pub use services::{ConfigServer, DatabaseServer, ImageRouter, ModPathResolver};
