use std::sync::Arc;

use tokio::sync::RwLock;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod seed;
pub mod store;
pub mod telemetry;
pub mod validation;

use crate::store::ProductStore;

/// Shared inventory state — cheap to clone (the store lives behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ProductStore>>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seeded_store())
    }
}
