//! Search Box Component

use leptos::prelude::*;

use crate::store::{use_ui_store, UiStateStoreFields};

/// Filters the displayed notes as the user types
#[component]
pub fn SearchBox() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <input
            type="search"
            class="search-input"
            placeholder="Search notes..."
            prop:value=move || ui.search_term().get()
            on:input=move |ev| *ui.search_term().write() = event_target_value(&ev)
        />
    }
}
