//! Note Editor Component
//!
//! Contenteditable input with image intake (picker, drop, paste) and the add
//! button.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_image_drop::{
    create_drop_signals, make_on_dragleave, make_on_dragover, make_on_drop, make_on_file_change,
    make_on_paste, read_as_data_url,
};
use notes_core::{timestamp, NoteError};
use web_sys::File;

use crate::context::AppContext;
use crate::editor;
use crate::store::{use_ui_store, UiStateStoreFields, UiStore};

#[component]
pub fn NoteEditor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let ui = use_ui_store();
    let drop_signals = create_drop_signals();

    let editor_ref = NodeRef::<html::Div>::new();
    let file_input_ref = NodeRef::<html::Input>::new();

    // Each read finishes on its own; the image lands wherever the caret is then
    let on_image = move |file: File| {
        let loaded = read_as_data_url(&file, move |data_url| match editor_ref.get_untracked() {
            Some(el) => {
                if let Err(e) = editor::insert_image(&el, &data_url) {
                    log::error!("Failed to insert image: {:?}", e);
                }
            }
            None => log::warn!("Editor unmounted before image finished loading"),
        });
        if let Err(e) = loaded {
            log::error!("Failed to read image: {:?}", e);
        }
    };

    let on_text = move |text: String| {
        if let Err(e) = editor::insert_text(&text) {
            log::error!("Failed to paste text: {:?}", e);
        }
    };

    let add_note = move |_| {
        let Some(el) = editor_ref.get_untracked() else { return };
        let content = editor::capture(&el);
        match ctx.mutate(|notes| notes.add(content, timestamp::now())) {
            Some(Ok(())) => editor::clear(&el),
            Some(Err(NoteError::EmptyContent)) => flash_invalid(ui, ctx.invalid_flash_ms),
            None => log::error!("Note controller is gone"),
        }
    };

    view! {
        <section class="note-editor">
            <div class="editor-toolbar">
                <button
                    type="button"
                    class="insert-image-btn"
                    on:click=move |_| {
                        if let Some(input) = file_input_ref.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "Insert Image"
                </button>
                <input
                    type="file"
                    accept="image/*"
                    class="hidden"
                    node_ref=file_input_ref
                    on:change=make_on_file_change(on_image)
                />
            </div>

            <div
                class="note-input"
                class:drag-over=move || drop_signals.drag_over_read.get()
                class:invalid=move || ui.input_invalid().get()
                contenteditable="true"
                node_ref=editor_ref
                on:dragover=make_on_dragover(drop_signals)
                on:dragleave=make_on_dragleave(drop_signals)
                on:drop=make_on_drop(drop_signals, on_image)
                on:paste=make_on_paste(on_image, on_text)
            ></div>

            <button type="button" class="add-note-btn" on:click=add_note>
                "Add Note"
            </button>
        </section>
    }
}

/// Highlight the editor for `ms`, then clear it
fn flash_invalid(ui: UiStore, ms: u32) {
    *ui.input_invalid().write() = true;
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        *ui.input_invalid().write() = false;
    });
}
