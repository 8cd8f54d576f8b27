//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::InMemoryUserStore;
use crate::services::{UserManager, UserService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state over an existing store.
    ///
    /// The caller keeps its handle, which tests use to inspect or reset
    /// the collection between requests.
    pub fn with_store(store: Arc<InMemoryUserStore>) -> Self {
        Self::new(Arc::new(UserManager::new(store)))
    }

    /// Create application state over a fresh, empty store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryUserStore::new()))
    }
}
