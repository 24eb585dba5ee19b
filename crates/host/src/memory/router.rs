//! In-memory [`ImageRouter`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::services::ImageRouter;

/// ImageRouter recording routes in registration order.
#[derive(Clone, Debug, Default)]
pub struct InMemoryImageRouter {
    routes: IndexMap<String, PathBuf>,
}

impl InMemoryImageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image path registered under `route`.
    pub fn route(&self, route: &str) -> Option<&Path> {
        self.routes.get(route).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl ImageRouter for InMemoryImageRouter {
    fn add_route(&mut self, route: &str, path: PathBuf) {
        debug!(target: "host::images", route, path = %path.display(), "Image route registered");
        self.routes.insert(route.to_string(), path);
    }
}
