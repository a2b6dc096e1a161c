//! Notes Core
//!
//! Platform-independent half of the scrapbook widget: the note model,
//! persistence over a key-value store, filtering, timestamp labels and the
//! controller state machine the UI drives.

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod filter;
pub mod legacy;
pub mod repository;
pub mod timestamp;

pub use config::NotesConfig;
pub use controller::{DeleteState, NoteController};
pub use domain::{Content, Note, Segment};
pub use error::{NoteError, StorageError, StorageResult};
pub use filter::{filter_notes, NoteEntry, NoteView};
pub use repository::{KeyValueStore, MemoryStore, NoteRepository};
pub use timestamp::{format_timestamp, now};
