use crate::domain::Catalog;
use crate::ports::{ServerRegistry, StackStateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<'c, R: ServerRegistry, S: StackStateStore> {
    catalog: &'c Catalog,
    registry: R,
    state: S,
}

impl<'c, R: ServerRegistry, S: StackStateStore> AppContext<'c, R, S> {
    /// Create a new application context.
    pub fn new(catalog: &'c Catalog, registry: R, state: S) -> Self {
        Self { catalog, registry, state }
    }

    /// Get a reference to the immutable catalog.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Get a reference to the server registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Get a reference to the stack state store.
    pub fn state(&self) -> &S {
        &self.state
    }
}
