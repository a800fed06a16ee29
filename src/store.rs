//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created by `App` and handed down to the views that need it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::loader::LoadTarget;
use crate::models::CatalogEntry;

/// Catalog view state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Entries from the last load, in upstream order
    pub catalog: Vec<CatalogEntry>,
    /// True while a load is in flight
    pub loading: bool,
    /// Current search box text
    pub query: String,
    /// Number of loads started; the newest one owns `catalog` and `loading`
    pub load_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            // nothing has been fetched yet, so start in the loading state
            loading: true,
            query: String::new(),
            load_generation: 0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the search text
pub fn store_set_query(store: &AppStore, query: String) {
    *store.query().write() = query;
}

impl LoadTarget for AppStore {
    fn set_loading(&self, loading: bool) {
        *self.loading().write() = loading;
    }

    fn set_catalog(&self, entries: Vec<CatalogEntry>) {
        *self.catalog().write() = entries;
    }

    fn generation(&self) -> u64 {
        self.load_generation().get_untracked()
    }

    fn set_generation(&self, generation: u64) {
        *self.load_generation().write() = generation;
    }
}
