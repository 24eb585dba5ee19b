//! Data models mirroring the host's JSON tables.
//!
//! Field names follow the host's wire format through serde renames. Fields the
//! mods never touch are carried in `extra` maps so a table survives a
//! deserialize/serialize pass unchanged.
mod config;
mod items;
mod locale;
mod tables;
mod trader;

pub use config::{TraderConfig, UpdateTime};
pub use items::{ItemCatalog, ItemProps, ItemTemplate};
pub use locale::{GlobalLocale, LocaleTables, TraderLocale};
pub use tables::{DatabaseTables, Templates};
pub use trader::{
    AssortItem, BarterComponent, BarterScheme, LoyaltyLevels, QuestAssort, Trader, TraderAssort,
    TraderBase, Upd,
};

/// Untyped JSON object used for pass-through fields.
pub type Extra = serde_json::Map<String, serde_json::Value>;
