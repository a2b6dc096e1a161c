//! Scrapbook Frontend App
//!
//! Editor on top, search box, then the note list.

use leptos::prelude::*;
use notes_core::{NoteController, NoteRepository, NotesConfig};
use reactive_stores::Store;

use crate::components::{NoteEditor, NoteList, SearchBox};
use crate::context::AppContext;
use crate::storage::BrowserStore;
use crate::store::UiState;

#[component]
pub fn App(config: NotesConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let repo = NoteRepository::new(BrowserStore::local(), config.storage_key.clone());
    let controller = NoteController::new(repo);

    // Provide context to all children
    provide_context(AppContext::new(
        controller,
        (reload_trigger, set_reload_trigger),
        config.invalid_flash_ms,
    ));
    provide_context(Store::new(UiState::default()));

    view! {
        <main class="notes-app">
            <h1>"My Notes"</h1>

            <NoteEditor />

            <SearchBox />

            <NoteList />
        </main>
    }
}
