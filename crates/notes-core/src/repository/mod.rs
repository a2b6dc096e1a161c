//! Repository Layer
//!
//! Storage abstractions and the note repository built on them.

mod memory;
mod note_repo;
mod traits;


pub use memory::MemoryStore;
pub use note_repo::NoteRepository;
pub use traits::KeyValueStore;
