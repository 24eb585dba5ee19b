//! Locale tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Extra;

/// All locale tables loaded by the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleTables {
    /// Per-language tables keyed by language code (`en`, `fr`, ...).
    #[serde(default)]
    pub global: IndexMap<String, GlobalLocale>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// One language's display strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalLocale {
    /// Trader display strings keyed by trader id.
    #[serde(default)]
    pub trading: IndexMap<String, TraderLocale>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Display strings shown for a trader.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderLocale {
    #[serde(rename = "FullName")]
    pub full_name: String,

    #[serde(rename = "FirstName")]
    pub first_name: String,

    #[serde(rename = "Nickname")]
    pub nickname: String,

    #[serde(rename = "Location")]
    pub location: String,

    #[serde(rename = "Description")]
    pub description: String,
}
