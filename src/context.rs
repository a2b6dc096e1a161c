//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use notes_core::{NoteController, NoteView};

use crate::storage::BrowserStore;

pub type Controller = NoteController<BrowserStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The one note controller; browser storage is not `Send`, so it lives in
    /// local storage of the reactive arena
    notes: StoredValue<Controller, LocalStorage>,
    /// Bumped after every controller mutation - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every controller mutation - write
    set_reload_trigger: WriteSignal<u32>,
    /// Duration of the empty-input highlight
    pub invalid_flash_ms: u32,
}

impl AppContext {
    pub fn new(
        controller: Controller,
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        invalid_flash_ms: u32,
    ) -> Self {
        Self {
            notes: StoredValue::new_local(controller),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            invalid_flash_ms,
        }
    }

    /// Trigger a redraw of everything reading the controller
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Run a mutation against the controller, then redraw
    pub fn mutate<U>(&self, f: impl FnOnce(&mut Controller) -> U) -> Option<U> {
        let out = self.notes.try_update_value(f);
        self.reload();
        out
    }

    /// Filtered note view; re-runs whenever the controller changes
    pub fn view(&self, term: &str) -> NoteView {
        let _ = self.reload_trigger.get();
        self.notes.with_value(|notes| notes.view(term))
    }

    /// Original index awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<usize> {
        let _ = self.reload_trigger.get();
        self.notes.with_value(|notes| notes.pending_delete())
    }
}
