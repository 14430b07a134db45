// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    /// Writes to the browser clipboard through `navigator.clipboard`.
    #[derive(Clone, Copy)]
    pub struct ClipboardWriter;

    /// Must be called during render, like any hook.
    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter
    }

    impl ClipboardWriter {
        pub async fn write(&mut self, text: String) -> bool {
            match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
                Some(clipboard) => JsFuture::from(clipboard.write_text(&text)).await.is_ok(),
                None => false,
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus_clipboard::prelude::*;

    /// Writes to the system clipboard.
    #[derive(Clone)]
    pub struct ClipboardWriter(UseClipboard);

    /// Must be called during render, like any hook.
    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter(use_clipboard())
    }

    impl ClipboardWriter {
        pub async fn write(&mut self, text: String) -> bool {
            self.0.set(text).is_ok()
        }
    }
}
