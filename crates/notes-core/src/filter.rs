//! Search Filter
//!
//! Derives the displayed subsequence of notes. Each entry keeps the note's
//! position in the unfiltered list so delete targets the right note while a
//! filter is active.

use crate::domain::Note;

/// A displayed note with its position in the full list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub original_index: usize,
    pub note: Note,
}

/// Result of filtering the note list with one search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteView {
    pub term: String,
    pub entries: Vec<NoteEntry>,
}

impl NoteView {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when a non-empty term was applied. Whitespace counts: a term of
    /// spaces still only keeps notes containing those spaces.
    pub fn is_filtered(&self) -> bool {
        !self.term.is_empty()
    }
}

/// Keep the notes whose text contains `term`, ignoring case.
/// An empty term keeps every note.
pub fn filter_notes(notes: Vec<Note>, term: &str) -> NoteView {
    let folded = term.to_lowercase();
    let entries = notes
        .into_iter()
        .enumerate()
        .filter(|(_, note)| folded.is_empty() || note.search_text().to_lowercase().contains(&folded))
        .map(|(original_index, note)| NoteEntry { original_index, note })
        .collect();

    NoteView { term: term.to_string(), entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Content;

    fn notes(texts: &[&str]) -> Vec<Note> {
        texts.iter().map(|t| Note::from(Content::from_text(t))).collect()
    }

    #[test]
    fn test_empty_term_keeps_all() {
        let view = filter_notes(notes(&["a", "b", "c"]), "");
        assert_eq!(view.len(), 3);
        assert!(!view.is_filtered());
        let indices: Vec<usize> = view.entries.iter().map(|e| e.original_index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let view = filter_notes(notes(&["Buy MILK", "call mom", "milkshake recipe"]), "Milk");
        let indices: Vec<usize> = view.entries.iter().map(|e| e.original_index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert!(view.is_filtered());
    }

    #[test]
    fn test_no_match_is_empty() {
        let view = filter_notes(notes(&["alpha", "beta"]), "gamma");
        assert!(view.is_empty());
    }

    #[test]
    fn test_whitespace_term_is_applied() {
        let view = filter_notes(notes(&["two  spaces", "one space", "none"]), "  ");
        assert!(view.is_filtered());
        assert_eq!(view.len(), 1);
        assert_eq!(view.entries[0].original_index, 0);
    }

    #[test]
    fn test_matches_timestamp_label() {
        let mut list = notes(&["one", "two"]);
        list[1].created = Some("Friday, 5 Jan 2024, 1.00.000 PM".into());
        let view = filter_notes(list, "friday");
        assert_eq!(view.len(), 1);
        assert_eq!(view.entries[0].original_index, 1);
    }
}
