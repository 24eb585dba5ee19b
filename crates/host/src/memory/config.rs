//! In-memory [`ConfigServer`].

use crate::models::TraderConfig;
use crate::services::ConfigServer;

/// ConfigServer holding a single trader config.
#[derive(Clone, Debug, Default)]
pub struct InMemoryConfigServer {
    trader: TraderConfig,
}

impl InMemoryConfigServer {
    pub fn new(trader: TraderConfig) -> Self {
        Self { trader }
    }
}

impl ConfigServer for InMemoryConfigServer {
    fn trader_config(&self) -> &TraderConfig {
        &self.trader
    }

    fn trader_config_mut(&mut self) -> &mut TraderConfig {
        &mut self.trader
    }
}
