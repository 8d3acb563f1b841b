//! Export settings
//!
//! Only the application record of the header is configurable. Format
//! constants (MEI version, id prefix, indentation, encoding) are fixed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// MEI schema version written to `mei/@meiversion`
pub const MEI_VERSION: &str = "3.0.0";

/// Indentation unit of the serialized document
pub const INDENT: &str = "\t";

/// Settings for one MEI export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Exporting application name, written to `application/name`
    pub application_name: String,

    /// Exporting application version, written to `application/@version`
    pub application_version: String,

    /// Date written to `application/@isodate`; `None` means today
    pub isodate: Option<NaiveDate>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            application_name: env!("CARGO_PKG_NAME").to_string(),
            application_version: env!("CARGO_PKG_VERSION").to_string(),
            isodate: None,
        }
    }
}

impl ExportConfig {
    /// Pin the header date (useful for reproducible output)
    pub fn with_isodate(mut self, date: NaiveDate) -> Self {
        self.isodate = Some(date);
        self
    }

    /// Header date as `YYYY-MM-DD`
    pub fn isodate_string(&self) -> String {
        self.isodate
            .unwrap_or_else(|| chrono::Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    }

    /// Text of `application/name`, e.g. "mei-export 0.1.0"
    pub fn application_label(&self) -> String {
        format!("{} {}", self.application_name, self.application_version)
    }
}
