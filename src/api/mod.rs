//! MEI export WASM API
//!
//! JavaScript-facing entry points.
//!
//! # Module Structure
//!
//! - `helpers`: console logging and input decoding
//! - `export`: MEI export functions

pub mod helpers;
pub mod export;

pub use export::{export_mei, export_mei_bytes, export_mei_from_value, export_mei_with_config};
