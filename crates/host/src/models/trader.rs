//! Trader records: base metadata, assort tables and quest assorts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Extra;

/// Payment options per assort entry. Each inner list is one complete bundle.
pub type BarterScheme = IndexMap<String, Vec<Vec<BarterComponent>>>;

/// Quest-gated assort entries: `started`/`success`/`fail` → assort id → quest id.
pub type QuestAssort = IndexMap<String, IndexMap<String, String>>;

/// A trader entry in the host's trader registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trader {
    pub base: TraderBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assort: Option<TraderAssort>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questassort: Option<QuestAssort>,
}

/// Static trader metadata (`base.json`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderBase {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub surname: String,

    pub nickname: String,

    pub location: String,

    /// Avatar URL path served by the image router, e.g. `/files/trader/avatar/x.png`.
    pub avatar: String,

    #[serde(default)]
    pub currency: String,

    #[serde(rename = "loyaltyLevels", default)]
    pub loyalty_levels: Vec<LoyaltyLevels>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Standing requirements and price coefficients for one loyalty tier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyLevels {
    #[serde(rename = "minLevel")]
    pub min_level: u32,

    #[serde(rename = "minSalesSum")]
    pub min_sales_sum: u64,

    /// Kept as the source number so `0` is written back as `0`, not `0.0`.
    #[serde(rename = "minStanding")]
    pub min_standing: serde_json::Number,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Everything a trader sells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderAssort {
    #[serde(rename = "nextResupply")]
    pub next_resupply: u64,

    pub items: Vec<AssortItem>,

    pub barter_scheme: BarterScheme,

    pub loyal_level_items: IndexMap<String, u8>,
}

impl TraderAssort {
    /// Number of stock entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true when every stock entry has exactly one barter entry and
    /// one loyalty entry, and neither map holds keys without a stock entry.
    pub fn is_consistent(&self) -> bool {
        self.barter_scheme.len() == self.items.len()
            && self.loyal_level_items.len() == self.items.len()
            && self.items.iter().all(|item| {
                self.barter_scheme.contains_key(&item.id)
                    && self.loyal_level_items.contains_key(&item.id)
            })
    }
}

/// A stock entry in an assort table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssortItem {
    #[serde(rename = "_id")]
    pub id: String,

    /// Template id of the item being sold.
    #[serde(rename = "_tpl")]
    pub tpl: String,

    #[serde(rename = "parentId")]
    pub parent_id: String,

    #[serde(rename = "slotId")]
    pub slot_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upd: Option<Upd>,
}

/// Stock state flags of an assort entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Upd {
    #[serde(rename = "UnlimitedCount", default, skip_serializing_if = "Option::is_none")]
    pub unlimited_count: Option<bool>,

    #[serde(rename = "StackObjectsCount", default, skip_serializing_if = "Option::is_none")]
    pub stack_objects_count: Option<u32>,
}

/// One item requirement inside a payment bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarterComponent {
    pub count: u32,

    #[serde(rename = "_tpl")]
    pub tpl: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> AssortItem {
        AssortItem {
            id: id.to_string(),
            tpl: format!("tpl_{id}"),
            parent_id: "hideout".to_string(),
            slot_id: "hideout".to_string(),
            upd: None,
        }
    }

    #[test]
    fn test_consistency_requires_matching_keys() {
        let mut assort = TraderAssort::default();
        assert!(assort.is_consistent());

        assort.items.push(entry("a"));
        assert!(!assort.is_consistent());

        assort.barter_scheme.insert("a".to_string(), Vec::new());
        assort.loyal_level_items.insert("a".to_string(), 1);
        assert!(assort.is_consistent());

        assort.loyal_level_items.insert("stray".to_string(), 1);
        assert!(!assort.is_consistent());
    }

    #[test]
    fn test_absent_questassort_is_not_serialized() {
        let trader = Trader {
            base: TraderBase {
                id: "t".to_string(),
                nickname: "n".to_string(),
                location: "l".to_string(),
                avatar: "/a.png".to_string(),
                ..TraderBase::default()
            },
            assort: Some(TraderAssort::default()),
            questassort: None,
        };

        let value = serde_json::to_value(&trader).unwrap();
        assert!(value.get("questassort").is_none());
        assert_eq!(value["assort"]["nextResupply"], 0);
        assert_eq!(value["base"]["_id"], "t");
    }

    #[test]
    fn test_loyalty_levels_keep_number_form() {
        let source = serde_json::json!([
            { "minLevel": 1, "minSalesSum": 0, "minStanding": 0, "buy_price_coef": 0 },
            { "minLevel": 15, "minSalesSum": 500000, "minStanding": 0.2, "buy_price_coef": 33 }
        ]);

        let levels: Vec<LoyaltyLevels> = serde_json::from_value(source.clone()).unwrap();

        assert_eq!(serde_json::to_value(&levels).unwrap(), source);
        assert_eq!(levels[1].min_standing.as_f64(), Some(0.2));
    }
}
