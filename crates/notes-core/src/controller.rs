//! Note Controller
//!
//! Single owner of the repository and the delete-confirmation state. The UI
//! holds one controller and calls into it from event handlers; nothing here
//! caches the list, every call re-reads storage.

use chrono::NaiveDateTime;

use crate::domain::{Content, Note};
use crate::error::NoteError;
use crate::filter::{filter_notes, NoteView};
use crate::repository::{KeyValueStore, NoteRepository};
use crate::timestamp::format_timestamp;

/// Delete confirmation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteState {
    #[default]
    Idle,
    /// Waiting for the user to confirm removal of this original index
    Pending(usize),
}

pub struct NoteController<S> {
    repo: NoteRepository<S>,
    delete_state: DeleteState,
}

impl<S: KeyValueStore> NoteController<S> {
    pub fn new(repo: NoteRepository<S>) -> Self {
        Self { repo, delete_state: DeleteState::Idle }
    }

    pub fn repository(&self) -> &NoteRepository<S> {
        &self.repo
    }

    /// Stamp `content` with a label for `at` and put it at the top of the list.
    /// Blank content is rejected without touching storage. A pending delete
    /// follows its note down one position.
    pub fn add(&mut self, content: Content, at: NaiveDateTime) -> Result<(), NoteError> {
        if content.is_blank() {
            return Err(NoteError::EmptyContent);
        }
        let note = Note::new(content, Some(format_timestamp(&at)));
        let total = self.repo.add(note);
        if let DeleteState::Pending(index) = self.delete_state {
            self.delete_state = DeleteState::Pending(index + 1);
        }
        log::info!("Note added ({} total)", total);
        Ok(())
    }

    /// Fresh filtered view of the stored list
    pub fn view(&self, term: &str) -> NoteView {
        filter_notes(self.repo.load(), term)
    }

    pub fn delete_state(&self) -> DeleteState {
        self.delete_state
    }

    /// Original index awaiting confirmation, if any
    pub fn pending_delete(&self) -> Option<usize> {
        match self.delete_state {
            DeleteState::Pending(index) => Some(index),
            DeleteState::Idle => None,
        }
    }

    /// Ask for confirmation before deleting. Replaces any earlier request.
    pub fn request_delete(&mut self, original_index: usize) {
        self.delete_state = DeleteState::Pending(original_index);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_state = DeleteState::Idle;
    }

    /// Carry out the pending delete. Returns the removed note; `None` when
    /// nothing was pending or the index no longer exists.
    pub fn confirm_delete(&mut self) -> Option<Note> {
        let DeleteState::Pending(index) = std::mem::take(&mut self.delete_state) else {
            return None;
        };
        let removed = self.repo.delete(index);
        if removed.is_some() {
            log::info!("Note {} deleted", index);
        }
        removed
    }
}
