//! Shared application state for all routes.

use crate::service::CrudStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CrudStore>,
}

impl AppState {
    pub fn new<S: CrudStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
