//! In-memory host services for tests and local runs.
mod config;
mod database;
mod loader;
mod router;

pub use config::InMemoryConfigServer;
pub use database::InMemoryDatabase;
pub use loader::StaticModPaths;
pub use router::InMemoryImageRouter;
