//! Root of the host's in-memory database.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Extra, ItemCatalog, LocaleTables, Trader};

/// The database tables exposed by the database server after load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseTables {
    #[serde(default)]
    pub templates: Templates,

    /// Trader registry keyed by trader id.
    #[serde(default)]
    pub traders: IndexMap<String, Trader>,

    #[serde(default)]
    pub locales: LocaleTables,

    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Templates {
    #[serde(default)]
    pub items: ItemCatalog,

    #[serde(flatten)]
    pub extra: Extra,
}
