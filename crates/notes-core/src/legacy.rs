//! Legacy Markup Import
//!
//! Older versions of the widget stored each note as the raw HTML of the
//! editable region. This converts such a fragment into `Content`: line breaks
//! and block boundaries become breaks, inline-data images are kept, every other
//! tag is dropped and common entities are decoded.

use crate::domain::Content;

const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
    // must stay last so "&amp;lt;" decodes to "&lt;"
    ("&amp;", "&"),
];

/// Convert a stored HTML fragment into structured content
pub fn import_markup(markup: &str) -> Content {
    let mut content = Content::new();
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        content.push_text(&decode_entities(&rest[..open]));
        let tail = &rest[open..];
        let Some(close) = tail.find('>') else {
            // unterminated tag: keep it as text
            content.push_text(&decode_entities(tail));
            return content;
        };
        apply_tag(&mut content, &tail[1..close]);
        rest = &tail[close + 1..];
    }
    content.push_text(&decode_entities(rest));
    content
}

fn apply_tag(content: &mut Content, tag: &str) {
    let tag = tag.trim();
    let closing = tag.starts_with('/');
    let name = tag
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();

    match name.as_str() {
        "br" => content.push_break(),
        "div" | "p" => content.ensure_break(),
        "img" if !closing => {
            let Some(src) = attribute(tag, "src") else { return };
            let alt = attribute(tag, "alt").unwrap_or_default();
            if !content.push_image(decode_entities(&src), decode_entities(&alt)) {
                log::warn!("legacy note image skipped: not an inline image");
            }
        }
        _ => {}
    }
}

/// Value of `name` inside a tag body, quoted or bare
fn attribute(tag: &str, name: &str) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `tag`
    let lower = tag.to_ascii_lowercase();
    let mut from = 0;

    while let Some(pos) = lower[from..].find(name) {
        let start = from + pos;
        from = start + name.len();

        let bounded = start == 0 || lower.as_bytes()[start - 1].is_ascii_whitespace();
        let after = lower[from..].trim_start();
        if !bounded || !after.starts_with('=') {
            continue;
        }

        let value_start = tag.len() - after.len() + 1;
        let value = tag[value_start..].trim_start();
        let parsed = match value.chars().next() {
            Some(quote @ ('"' | '\'')) => value[1..].split(quote).next().unwrap_or_default(),
            _ => value.split_whitespace().next().unwrap_or_default(),
        };
        return Some(parsed.to_string());
    }
    None
}

fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Segment;

    #[test]
    fn test_plain_text_passes_through() {
        let content = import_markup("just words");
        assert_eq!(content.plain_text(), "just words");
    }

    #[test]
    fn test_breaks_and_blocks() {
        let content = import_markup("first<div>second</div><div>third<br></div>");
        assert_eq!(content.plain_text(), "first\nsecond\nthird\n");
    }

    #[test]
    fn test_image_with_attributes() {
        let html = r#"hi<img src="data:image/png;base64,AAAA" alt="Note Image" style="max-width: 100%;"><br>"#;
        let content = import_markup(html);
        assert_eq!(
            content.segments(),
            &[
                Segment::Text { text: "hi".into() },
                Segment::Image {
                    src: "data:image/png;base64,AAAA".into(),
                    alt: "Note Image".into()
                },
                Segment::Break,
            ]
        );
    }

    #[test]
    fn test_remote_images_and_scripts_dropped() {
        let content = import_markup(r#"<img src="https://evil.example/x.png"><script>alert(1)</script>ok"#);
        assert_eq!(content.image_count(), 0);
        assert_eq!(content.plain_text(), "alert(1)ok");
    }

    #[test]
    fn test_entities_decoded() {
        let content = import_markup("a &lt;b&gt; &amp;&nbsp;c &amp;lt;");
        assert_eq!(content.plain_text(), "a <b> & c &lt;");
    }

    #[test]
    fn test_unterminated_tag_kept_as_text() {
        let content = import_markup("1 <2 and more");
        assert_eq!(content.plain_text(), "1 <2 and more");
    }

    #[test]
    fn test_attribute_lookup() {
        assert_eq!(attribute(r#"img data-src="x" src='y'"#, "src").as_deref(), Some("y"));
        assert_eq!(attribute("img SRC=data:image/gif;base64,R0 alt=z", "src").as_deref(), Some("data:image/gif;base64,R0"));
        assert_eq!(attribute("img alt=z", "src"), None);
    }
}
