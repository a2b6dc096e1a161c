//! Editable Region
//!
//! DOM helpers for the contenteditable note input: capture its content as
//! segments, splice in images and pasted text, clear it after an add.

use leptos::prelude::{document, window};
use notes_core::Content;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlDocument, HtmlElement, HtmlImageElement, Node, Range, Selection};

/// Alt text for images inserted into the editor
pub const IMAGE_ALT: &str = "Note Image";

/// Current editor content. Whitespace is kept as typed.
pub fn capture(editor: &HtmlElement) -> Content {
    let mut content = Content::new();
    walk(editor, &mut content);
    content
}

fn walk(parent: &Node, content: &mut Content) {
    let children = parent.child_nodes();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else { continue };
        match child.node_type() {
            Node::TEXT_NODE => content.push_text(&child.text_content().unwrap_or_default()),
            Node::ELEMENT_NODE => walk_element(child.unchecked_ref::<Element>(), content),
            _ => {}
        }
    }
}

fn walk_element(element: &Element, content: &mut Content) {
    match element.tag_name().to_ascii_lowercase().as_str() {
        "img" => {
            let src = element.get_attribute("src").unwrap_or_default();
            let alt = element.get_attribute("alt").unwrap_or_default();
            if !content.push_image(src, alt) {
                log::warn!("Skipping editor image without inline data");
            }
        }
        "br" => content.push_break(),
        // browsers wrap each new line of a contenteditable in a block
        "div" | "p" => {
            content.ensure_break();
            walk(element, content);
            content.ensure_break();
        }
        _ => walk(element, content),
    }
}

/// Insert an image at the caret, replacing any selection, and put the caret
/// after it. Without a caret inside the editor the image is appended. A line
/// break is appended either way.
pub fn insert_image(editor: &HtmlElement, data_url: &str) -> Result<(), JsValue> {
    let document = editor
        .owner_document()
        .ok_or_else(|| JsValue::from_str("editor is not attached to a document"))?;

    let image: HtmlImageElement = document.create_element("img")?.dyn_into()?;
    image.set_src(data_url);
    image.set_alt(IMAGE_ALT);
    image.set_class_name("note-image");

    match caret_range(editor)? {
        Some((selection, range)) => {
            range.delete_contents()?;
            range.insert_node(&image)?;
            range.set_start_after(&image)?;
            range.set_end_after(&image)?;
            selection.remove_all_ranges()?;
            selection.add_range(&range)?;
        }
        None => {
            editor.append_child(&image)?;
        }
    }

    let br = document.create_element("br")?;
    editor.append_child(&br)?;
    Ok(())
}

/// The first selection range, if it sits inside `editor`
fn caret_range(editor: &HtmlElement) -> Result<Option<(Selection, Range)>, JsValue> {
    let Some(selection) = window().get_selection()? else {
        return Ok(None);
    };
    if selection.range_count() == 0 || !editor.contains(selection.anchor_node().as_ref()) {
        return Ok(None);
    }
    let range = selection.get_range_at(0)?;
    Ok(Some((selection, range)))
}

/// Insert plain text at the caret as if typed
pub fn insert_text(text: &str) -> Result<(), JsValue> {
    let document: HtmlDocument = document().dyn_into()?;
    document.exec_command_with_show_ui_and_value("insertText", false, text)?;
    Ok(())
}

pub fn clear(editor: &HtmlElement) {
    editor.set_inner_html("");
}
