//! Note Entity
//!
//! A persisted entry. Notes have no identifier; a note is addressed by its
//! position in the note list.

use serde::{Deserialize, Serialize};

use super::content::Content;

/// One note: its body plus the timestamp label stamped when it was added
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

impl Note {
    pub fn new(content: Content, created: Option<String>) -> Self {
        Self { content, created }
    }

    /// Text the search box matches against: the body text and the label
    pub fn search_text(&self) -> String {
        let mut text = self.content.plain_text();
        if let Some(label) = &self.created {
            text.push('\n');
            text.push_str(label);
        }
        text
    }
}

impl From<Content> for Note {
    fn from(content: Content) -> Self {
        Self::new(content, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_text_includes_label() {
        let note = Note::new(Content::from_text("groceries"), Some("Monday, 1 Jan 2024".into()));
        assert_eq!(note.search_text(), "groceries\nMonday, 1 Jan 2024");
    }

    #[test]
    fn test_label_omitted_from_json_when_absent() {
        let note = Note::from(Content::from_text("x"));
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"content":[{"type":"text","text":"x"}]}"#);
    }
}
