//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

/// Transient view state; never persisted
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Current search box text
    pub search_term: String,
    /// Highlight the editor after an empty add
    pub input_invalid: bool,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}
