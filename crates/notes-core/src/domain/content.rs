//! Rich Content
//!
//! A note body is a sequence of tagged segments instead of raw markup, so the
//! UI renders text nodes and images and never injects HTML.

use serde::{Deserialize, Serialize};

/// Only inline image data is accepted as an image source
pub const IMAGE_DATA_PREFIX: &str = "data:image/";

/// One piece of note content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { text: String },
    Image {
        src: String,
        #[serde(default)]
        alt: String,
    },
    Break,
}

impl Segment {
    /// Build an image segment, refusing anything but an inline image data URL
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Option<Self> {
        let src = src.into();
        if is_image_data_url(&src) {
            Some(Segment::Image { src, alt: alt.into() })
        } else {
            None
        }
    }
}

/// Case-insensitive check for a `data:image/...` URL
pub fn is_image_data_url(src: &str) -> bool {
    src.get(..IMAGE_DATA_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IMAGE_DATA_PREFIX))
}

/// Ordered note body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Segment>", into = "Vec<Segment>")]
pub struct Content {
    segments: Vec<Segment>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content holding a single run of text
    pub fn from_text(text: &str) -> Self {
        let mut content = Self::new();
        content.push_text(text);
        content
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append text, merging with a preceding text segment
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(Segment::Text { text: last }) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(Segment::Text { text: text.to_string() });
        }
    }

    /// Append an image. Returns false when the source was refused.
    pub fn push_image(&mut self, src: impl Into<String>, alt: impl Into<String>) -> bool {
        match Segment::image(src, alt) {
            Some(segment) => {
                self.segments.push(segment);
                true
            }
            None => false,
        }
    }

    pub fn push_break(&mut self) {
        self.segments.push(Segment::Break);
    }

    /// Start a new line unless already at the start of one
    pub fn ensure_break(&mut self) {
        if !matches!(self.segments.last(), None | Some(Segment::Break)) {
            self.segments.push(Segment::Break);
        }
    }

    /// True when there is no image and all text is whitespace
    pub fn is_blank(&self) -> bool {
        self.segments.iter().all(|segment| match segment {
            Segment::Text { text } => text.trim().is_empty(),
            Segment::Image { .. } => false,
            Segment::Break => true,
        })
    }

    pub fn image_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Image { .. }))
            .count()
    }

    /// Text rendition with breaks as newlines; images contribute nothing
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { text } => out.push_str(text),
                Segment::Break => out.push('\n'),
                Segment::Image { .. } => {}
            }
        }
        out
    }
}

impl From<Vec<Segment>> for Content {
    fn from(segments: Vec<Segment>) -> Self {
        let mut content = Content::new();
        for segment in segments {
            match segment {
                Segment::Text { text } => content.push_text(&text),
                Segment::Image { src, alt } => {
                    if !content.push_image(src, alt) {
                        log::warn!("dropping image segment with a non-data source");
                    }
                }
                Segment::Break => content.push_break(),
            }
        }
        content
    }
}

impl From<Content> for Vec<Segment> {
    fn from(content: Content) -> Self {
        content.segments
    }
}
