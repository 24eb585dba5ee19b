//! Trader display strings for every loaded locale.

use host::{LocaleTables, TraderBase, TraderLocale};

/// Placeholder shown for the trader's real name.
pub const REDACTED: &str = "***Redacted***";

pub const DESCRIPTION: &str = "Sells Quest Items";

/// Display strings for the trader. Identical for every language.
pub fn trader_locale(base: &TraderBase) -> TraderLocale {
    TraderLocale {
        full_name: REDACTED.to_string(),
        first_name: REDACTED.to_string(),
        nickname: base.nickname.clone(),
        location: base.location.clone(),
        description: DESCRIPTION.to_string(),
    }
}

/// Writes `entry` under `trader_id` into every locale, replacing any existing entry.
///
/// Returns the number of locales patched.
pub fn patch_locales(locales: &mut LocaleTables, trader_id: &str, entry: &TraderLocale) -> usize {
    for locale in locales.global.values_mut() {
        locale.trading.insert(trader_id.to_string(), entry.clone());
    }
    locales.global.len()
}
