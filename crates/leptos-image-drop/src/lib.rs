//! Leptos Image Drop Utilities
//!
//! Image intake for editable regions: drag-and-drop, clipboard paste and file
//! pickers. Non-image files are logged and ignored. Reading a file into a data
//! URL completes through a callback.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{ClipboardEvent, DataTransfer, DragEvent, File, FileReader, HtmlInputElement};

/// Where an image came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Picker,
    Drop,
    Paste,
}

impl ImageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Picker => "file picker",
            ImageSource::Drop => "drop",
            ImageSource::Paste => "paste",
        }
    }
}

/// Drag-over feedback signals
#[derive(Clone, Copy)]
pub struct DropSignals {
    pub drag_over_read: ReadSignal<bool>,
    pub drag_over_write: WriteSignal<bool>,
}

pub fn create_drop_signals() -> DropSignals {
    let (drag_over_read, drag_over_write) = signal(false);
    DropSignals { drag_over_read, drag_over_write }
}

/// MIME type check, `image/*` only
pub fn is_image_type(mime: &str) -> bool {
    mime.get(..6).is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

/// Pass `file` through if it is an image, otherwise log and drop it
pub fn accept_image(file: File, source: ImageSource) -> Option<File> {
    let mime = file.type_();
    if is_image_type(&mime) {
        Some(file)
    } else {
        log::warn!("Non-image file from {}: {:?}", source.as_str(), mime);
        None
    }
}

/// Create dragover handler: allow the drop and show feedback
pub fn make_on_dragover(signals: DropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        signals.drag_over_write.set(true);
    }
}

/// Create dragleave handler: clear feedback
pub fn make_on_dragleave(signals: DropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        signals.drag_over_write.set(false);
    }
}

/// Create drop handler. The first dropped file is forwarded if it is an image;
/// the browser never gets to open it.
pub fn make_on_drop<F>(signals: DropSignals, on_image: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(File) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        signals.drag_over_write.set(false);

        let file = ev
            .data_transfer()
            .and_then(|data| data.files())
            .and_then(|files| files.get(0));
        if let Some(image) = file.and_then(|f| accept_image(f, ImageSource::Drop)) {
            on_image(image);
        }
    }
}

/// Create paste handler. The first image on the clipboard goes to `on_image`;
/// without one, the plain-text flavour goes to `on_text`.
pub fn make_on_paste<F, T>(on_image: F, on_text: T) -> impl Fn(ClipboardEvent) + Clone + 'static
where
    F: Fn(File) + Clone + 'static,
    T: Fn(String) + Clone + 'static,
{
    move |ev: ClipboardEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let Some(data) = ev.clipboard_data() else { return };
        if let Some(image) = first_clipboard_image(&data) {
            on_image(image);
            return;
        }
        match data.get_data("text/plain") {
            Ok(text) if !text.is_empty() => on_text(text),
            Ok(_) => {}
            Err(e) => log::warn!("Clipboard text unavailable: {:?}", e),
        }
    }
}

fn first_clipboard_image(data: &DataTransfer) -> Option<File> {
    let items = data.items();
    (0..items.length())
        .filter_map(|i| items.get(i))
        .filter(|item| is_image_type(&item.type_()))
        .find_map(|item| item.get_as_file().ok().flatten())
}

/// Create change handler for a file input. The input is reset afterwards so
/// picking the same file again fires another change.
pub fn make_on_file_change<F>(on_image: F) -> impl Fn(web_sys::Event) + Clone + 'static
where
    F: Fn(File) + Clone + 'static,
{
    move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        input.set_value("");
        if let Some(image) = file.and_then(|f| accept_image(f, ImageSource::Picker)) {
            on_image(image);
        }
    }
}

/// Read `file` as a data URL and hand it to `on_load` once the read finishes.
/// Failed or aborted reads are logged; `loadend` fires in every case, so the
/// handler always runs once.
pub fn read_as_data_url<F>(file: &File, on_load: F) -> Result<(), JsValue>
where
    F: FnOnce(String) + 'static,
{
    let reader = FileReader::new()?;
    let finished = reader.clone();
    let onloadend = Closure::once_into_js(move |_: web_sys::Event| {
        let data_url = finished.result().ok().and_then(|value| value.as_string());
        let error = finished.error().map(|e| e.message());
        match read_outcome(data_url, error) {
            Ok(url) => on_load(url),
            Err(message) => log::error!("{}", message),
        }
    });
    reader.set_onloadend(Some(onloadend.unchecked_ref::<js_sys::Function>()));
    reader.read_as_data_url(file)?;
    Ok(())
}

/// Decide what a finished read produced
fn read_outcome(data_url: Option<String>, error: Option<String>) -> Result<String, String> {
    match (error, data_url) {
        (Some(message), _) => Err(format!("Failed to read image: {}", message)),
        (None, Some(url)) => Ok(url),
        (None, None) => Err("FileReader finished without a data URL".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_types() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("IMAGE/JPEG"));
        assert!(is_image_type("image/svg+xml"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type("image"));
        assert!(!is_image_type(""));
    }

    #[test]
    fn test_read_outcome() {
        assert_eq!(
            read_outcome(Some("data:image/png;base64,AA".into()), None),
            Ok("data:image/png;base64,AA".to_string())
        );
        assert_eq!(
            read_outcome(None, Some("NotReadableError".into())),
            Err("Failed to read image: NotReadableError".to_string())
        );
        assert_eq!(
            read_outcome(None, None),
            Err("FileReader finished without a data URL".to_string())
        );
    }

    #[test]
    fn test_source_names() {
        assert_eq!(ImageSource::Drop.as_str(), "drop");
        assert_eq!(ImageSource::Paste.as_str(), "paste");
        assert_eq!(ImageSource::Picker.as_str(), "file picker");
    }
}
