//! Delete Confirm Button Component
//!
//! Inline delete confirmation bound to a note's original index.

use leptos::prelude::*;

use crate::context::AppContext;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. Clicking it puts the controller into the
/// pending-delete state for this note, which swaps in a Yes/No prompt.
///
/// # Arguments
/// * `original_index` - Position of the note in the unfiltered list
#[component]
pub fn DeleteConfirmButton(original_index: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let pending = move || ctx.pending_delete() == Some(original_index);

    view! {
        <Show when=move || !pending()>
            <button
                class="delete-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.mutate(|notes| notes.request_delete(original_index));
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=pending>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete this note?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.mutate(|notes| notes.confirm_delete());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.mutate(|notes| notes.cancel_delete());
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
