//! Assort table generation.
//!
//! Every quest item in the catalog becomes one unlimited stock entry with a
//! single fixed-price barter and no loyalty gating beyond the configured tier.

use host::{AssortItem, BarterComponent, ItemCatalog, ItemTemplate, TraderAssort, Upd};
use tracing::{debug, warn};

use crate::config::InstallerConfig;

/// Parent and slot of stock that is not physically placed anywhere.
pub const HIDEOUT: &str = "hideout";

/// Builds the trader's assort from the quest items in `catalog`.
///
/// Entries follow the catalog's iteration order. Stock entry ids are the item
/// `_name`s; if two quest items share a name the first one wins so that
/// `items`, `barter_scheme` and `loyal_level_items` keep identical keys.
/// Later items with an already used name are dropped and not stocked at all.
pub fn create_assort_table(catalog: &ItemCatalog, config: &InstallerConfig) -> TraderAssort {
    let mut assort = TraderAssort {
        next_resupply: 0,
        ..TraderAssort::default()
    };

    for item in catalog.values().filter(|item| item.is_quest_item()) {
        if assort.loyal_level_items.contains_key(&item.name) {
            warn!(
                target: "questor::assort",
                name = %item.name,
                tpl = %item.id,
                "Duplicate quest item name, skipping"
            );
            continue;
        }

        assort.items.push(stock_entry(item, config));
        assort
            .barter_scheme
            .insert(item.name.clone(), vec![vec![price(config)]]);
        assort
            .loyal_level_items
            .insert(item.name.clone(), config.loyalty_level);
    }

    debug!(
        target: "questor::assort",
        catalog = catalog.len(),
        quest_items = assort.len(),
        "Assort table built"
    );

    assort
}

fn stock_entry(item: &ItemTemplate, config: &InstallerConfig) -> AssortItem {
    AssortItem {
        id: item.name.clone(),
        tpl: item.id.clone(),
        parent_id: HIDEOUT.to_string(),
        slot_id: HIDEOUT.to_string(),
        upd: Some(Upd {
            unlimited_count: Some(true),
            stack_objects_count: Some(config.stack_objects_count),
        }),
    }
}

fn price(config: &InstallerConfig) -> BarterComponent {
    BarterComponent {
        count: config.barter_price,
        tpl: config.currency_tpl.clone(),
    }
}
