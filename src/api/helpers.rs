//! Shared helpers for WASM API operations
//!
//! Console logging and input decoding used by the export functions.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;

use crate::renderers::mei::MeiError;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// ============================================================================
// Decoding Helpers
// ============================================================================

/// Decode a score from its JSON form
pub fn parse_score_json<T: DeserializeOwned>(json: &str) -> Result<T, MeiError> {
    serde_json::from_str(json).map_err(|e| MeiError::InvalidScore(e.to_string()))
}

/// Decode export settings from JSON
pub fn parse_config_json<T: DeserializeOwned>(json: &str) -> Result<T, MeiError> {
    serde_json::from_str(json).map_err(|e| MeiError::InvalidConfig(e.to_string()))
}

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        wasm_error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert an export error into a JS error value, logging it
pub fn to_js_error(e: MeiError) -> JsValue {
    let msg = format!("MEI export error: {}", e);
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Score;
    use crate::renderers::mei::ExportConfig;

    #[test]
    fn test_parse_score_json() {
        let score: Score = parse_score_json(r#"{"staves": [{}, {}]}"#).unwrap();
        assert_eq!(score.nstaves(), 2);
        assert!(score.measures.is_empty());
    }

    #[test]
    fn test_parse_score_json_with_sparse_voices() {
        let json = r#"{
            "staves": [{}],
            "measures": [{"type": "measure", "segments": [
                {"tick": 0, "elements": [{"kind": {"type": "rest"}}]}
            ]}]
        }"#;
        let score: Score = parse_score_json(json).unwrap();
        let segment = &score.iter_measures().next().unwrap().segments[0];
        assert!(segment.element(0).is_some());
        assert!(segment.element(1).is_none());
    }

    #[test]
    fn test_invalid_score_json() {
        let err = parse_score_json::<Score>("{not json").unwrap_err();
        assert!(matches!(err, MeiError::InvalidScore(_)));
    }

    #[test]
    fn test_invalid_config_json() {
        let err = parse_config_json::<ExportConfig>(r#"{"isodate": "yesterday"}"#).unwrap_err();
        assert!(matches!(err, MeiError::InvalidConfig(_)));
    }
}
