//! Export operations for the WASM API
//!
//! Scores arrive from JavaScript either as JSON text or as a plain JS
//! object and leave as an MEI document (string or bytes).

use wasm_bindgen::prelude::*;
use crate::api::helpers::{deserialize, parse_config_json, parse_score_json, to_js_error};
use crate::models::Score;
use crate::renderers::mei::{ExportConfig, MeiExporter};
use crate::{wasm_log, wasm_info};
use js_sys;

/// Export a JSON-encoded score to MEI
///
/// # Returns
/// MEI string (XML format)
#[wasm_bindgen(js_name = exportMEI)]
pub fn export_mei(score_json: String) -> Result<String, JsValue> {
    wasm_info!("exportMEI called");
    wasm_log!("  Input score: {} bytes", score_json.len());

    let score: Score = parse_score_json(&score_json).map_err(to_js_error)?;
    let mei = export_score(&score, ExportConfig::default());

    wasm_info!("exportMEI completed: {} bytes", mei.len());
    Ok(mei)
}

/// Export a JSON-encoded score to MEI with JSON-encoded settings
///
/// Missing settings fall back to their defaults.
#[wasm_bindgen(js_name = exportMEIWithConfig)]
pub fn export_mei_with_config(score_json: String, config_json: String) -> Result<String, JsValue> {
    wasm_info!("exportMEIWithConfig called");

    let score: Score = parse_score_json(&score_json).map_err(to_js_error)?;
    let config: ExportConfig = parse_config_json(&config_json).map_err(to_js_error)?;
    let mei = export_score(&score, config);

    wasm_info!("exportMEIWithConfig completed: {} bytes", mei.len());
    Ok(mei)
}

/// Export a score passed as a JS object to MEI
#[wasm_bindgen(js_name = exportMEIFromValue)]
pub fn export_mei_from_value(score: JsValue) -> Result<String, JsValue> {
    wasm_info!("exportMEIFromValue called");

    let score: Score = deserialize(score, "Failed to deserialize score")?;
    Ok(export_score(&score, ExportConfig::default()))
}

/// Export a JSON-encoded score to MEI as UTF-8 bytes (for download)
#[wasm_bindgen(js_name = exportMEIBytes)]
pub fn export_mei_bytes(score_json: String) -> Result<js_sys::Uint8Array, JsValue> {
    wasm_info!("exportMEIBytes called");

    let score: Score = parse_score_json(&score_json).map_err(to_js_error)?;
    let exporter = MeiExporter::new(&score);
    let mut bytes = Vec::new();
    exporter.write(&mut bytes).map_err(to_js_error)?;

    wasm_info!("  MEI bytes generated: {}", bytes.len());
    Ok(js_sys::Uint8Array::from(&bytes[..]))
}

fn export_score(score: &Score, config: ExportConfig) -> String {
    wasm_log!(
        "  Score has {} staves, {} timeline items",
        score.nstaves(),
        score.measures.len()
    );
    MeiExporter::with_config(score, config).to_mei_string()
}
