//! Trader configuration owned by the config server.

use serde::{Deserialize, Serialize};

use super::Extra;

/// The host's trader config (`configs/trader.json`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TraderConfig {
    /// Assort refresh intervals, read by the host's resupply scheduler.
    #[serde(rename = "updateTime", default)]
    pub update_time: Vec<UpdateTime>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl TraderConfig {
    /// Appends a refresh record without checking for an existing one.
    pub fn push_update_time(&mut self, record: UpdateTime) {
        self.update_time.push(record);
    }

    /// Replaces the first record for the same trader, or appends when none exists.
    ///
    /// Returns the replaced record.
    pub fn upsert_update_time(&mut self, record: UpdateTime) -> Option<UpdateTime> {
        match self
            .update_time
            .iter_mut()
            .find(|existing| existing.trader_id == record.trader_id)
        {
            Some(existing) => Some(std::mem::replace(existing, record)),
            None => {
                self.update_time.push(record);
                None
            }
        }
    }

    /// Returns every refresh record registered for `trader_id`.
    pub fn update_times_for<'a>(
        &'a self,
        trader_id: &'a str,
    ) -> impl Iterator<Item = &'a UpdateTime> + 'a {
        self.update_time
            .iter()
            .filter(move |record| record.trader_id == trader_id)
    }
}

/// Refresh interval for one trader, in seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTime {
    #[serde(rename = "traderId")]
    pub trader_id: String,

    pub seconds: u32,
}

impl UpdateTime {
    pub fn new(trader_id: impl Into<String>, seconds: u32) -> Self {
        Self {
            trader_id: trader_id.into(),
            seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_accumulates_duplicates() {
        let mut config = TraderConfig::default();
        config.push_update_time(UpdateTime::new("t", 3600));
        config.push_update_time(UpdateTime::new("t", 3600));

        assert_eq!(config.update_times_for("t").count(), 2);
    }

    #[test]
    fn test_upsert_replaces_existing_record() {
        let mut config = TraderConfig::default();
        config.push_update_time(UpdateTime::new("other", 60));

        assert_eq!(config.upsert_update_time(UpdateTime::new("t", 3600)), None);
        let replaced = config.upsert_update_time(UpdateTime::new("t", 1800));

        assert_eq!(replaced, Some(UpdateTime::new("t", 3600)));
        assert_eq!(config.update_time.len(), 2);
        assert_eq!(config.update_times_for("t").next().unwrap().seconds, 1800);
    }

    #[test]
    fn test_host_json_shape() {
        let config: TraderConfig = serde_json::from_value(serde_json::json!({
            "updateTime": [{ "traderId": "54cb50c76803fa8b248b4571", "seconds": 3600 }],
            "purchasesAreFoundInRaid": false
        }))
        .unwrap();

        assert_eq!(config.update_time[0].trader_id, "54cb50c76803fa8b248b4571");
        assert_eq!(config.extra["purchasesAreFoundInRaid"], false);
    }
}
