//! UI Components
//!
//! Leptos components for the notes widget.

mod delete_confirm_button;
mod note_card;
mod note_editor;
mod note_list;
mod search_box;

pub use delete_confirm_button::DeleteConfirmButton;
pub use note_card::NoteCard;
pub use note_editor::NoteEditor;
pub use note_list::NoteList;
pub use search_box::SearchBox;
