//! In-memory [`DatabaseServer`].

use std::path::Path;

use tracing::debug;

use crate::models::DatabaseTables;
use crate::services::DatabaseServer;
use crate::{HostError, Result};

/// DatabaseServer owning a fully loaded set of tables.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDatabase {
    tables: DatabaseTables,
}

impl InMemoryDatabase {
    pub fn new(tables: DatabaseTables) -> Self {
        Self { tables }
    }

    /// Loads tables from a single JSON document.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| HostError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables: DatabaseTables =
            serde_json::from_str(&content).map_err(|source| HostError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(
            target: "host::database",
            items = tables.templates.items.len(),
            traders = tables.traders.len(),
            locales = tables.locales.global.len(),
            "Database tables loaded"
        );

        Ok(Self::new(tables))
    }

    pub fn into_tables(self) -> DatabaseTables {
        self.tables
    }
}

impl DatabaseServer for InMemoryDatabase {
    fn tables(&self) -> &DatabaseTables {
        &self.tables
    }

    fn tables_mut(&mut self) -> &mut DatabaseTables {
        &mut self.tables
    }
}
