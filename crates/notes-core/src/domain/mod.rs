//! Domain Layer
//!
//! Note entities and their rich content.
//! No storage or browser dependencies live here.

mod content;
mod note;

pub use content::{Content, Segment};
pub use note::Note;
