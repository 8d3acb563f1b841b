//! MEI Export WASM Module
//!
//! Exports score documents to MEI (Music Encoding Initiative) XML.
//! Every emitted element carries a unique `xml:id` so consumers can
//! cross-reference elements.

pub mod models;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use models::score::*;
pub use renderers::mei::{save_mei, to_mei, try_save_mei, ExportConfig, MeiError, MeiExporter};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("console logger not installed: {}", e);
    }

    log::info!("MEI export WASM module initialized");
}
