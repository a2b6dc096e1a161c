//! Note List Component
//!
//! Redraws the filtered notes from storage on every change, or the empty-state
//! message when nothing is shown.

use leptos::either::Either;
use leptos::prelude::*;
use notes_core::NoteView;

use crate::components::NoteCard;
use crate::context::AppContext;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn NoteList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = use_ui_store();

    let shown = move || ctx.view(&ui.search_term().get());

    view! {
        <section class="notes-container">
            {move || {
                let shown = shown();
                if shown.is_empty() {
                    Either::Left(view! { <p class="no-notes">{empty_message(&shown)}</p> })
                } else {
                    Either::Right(
                        shown
                            .entries
                            .into_iter()
                            .map(|entry| view! { <NoteCard entry=entry /> })
                            .collect_view(),
                    )
                }
            }}
        </section>
    }
}

/// Empty-state text: nothing stored vs. nothing matching
pub fn empty_message(shown: &NoteView) -> &'static str {
    if shown.is_filtered() {
        "No notes match your search."
    } else {
        "No notes yet. Add one above!"
    }
}
