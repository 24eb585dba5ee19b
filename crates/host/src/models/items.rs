//! Item template catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Extra;

/// Item catalog keyed by template id, in the host's insertion order.
pub type ItemCatalog = IndexMap<String, ItemTemplate>;

/// A single item template from `templates.items`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTemplate {
    #[serde(rename = "_id")]
    pub id: String,

    /// Internal (non-localized) name, unique per template.
    #[serde(rename = "_name")]
    pub name: String,

    #[serde(rename = "_parent", default)]
    pub parent: String,

    #[serde(rename = "_type", default)]
    pub kind: String,

    #[serde(rename = "_props", default)]
    pub props: ItemProps,
}

impl ItemTemplate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: "Item".to_string(),
            ..Self::default()
        }
    }

    /// Marks the template as a quest item.
    pub fn quest_item(mut self, flag: bool) -> Self {
        self.props.quest_item = flag;
        self
    }

    #[inline]
    pub fn is_quest_item(&self) -> bool {
        self.props.quest_item
    }
}

/// Template properties. Only the fields mods inspect are typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemProps {
    #[serde(rename = "QuestItem", default)]
    pub quest_item: bool,

    #[serde(flatten)]
    pub extra: Extra,
}
