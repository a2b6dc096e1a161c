//! Note Card Component
//!
//! One displayed note. Segments render as text nodes and elements; stored
//! content is never parsed as HTML.

use leptos::prelude::*;
use notes_core::{NoteEntry, Segment};

use crate::components::DeleteConfirmButton;

#[component]
pub fn NoteCard(entry: NoteEntry) -> impl IntoView {
    let NoteEntry { original_index, note } = entry;
    let body = note.content.segments().iter().map(render_segment).collect_view();

    view! {
        <article class="note-item">
            <div class="note-body">{body}</div>
            {note.created.map(|label| view! { <p class="note-timestamp">{label}</p> })}
            <div class="note-actions">
                <DeleteConfirmButton original_index=original_index />
            </div>
        </article>
    }
}

fn render_segment(segment: &Segment) -> AnyView {
    match segment {
        Segment::Text { text } => text.clone().into_any(),
        Segment::Image { src, alt } => {
            view! { <img class="note-image" src=src.clone() alt=alt.clone() /> }.into_any()
        }
        Segment::Break => view! { <br /> }.into_any(),
    }
}
