//! MEI export module
//!
//! Exports a [`Score`](crate::models::Score) as an MEI 3.0.0 document.
//!
//! # Module Structure
//!
//! - **ids**: sequential `xml:id` generation (`m-1`, `m-2`, ...)
//! - **document**: arena output tree and the node builder
//! - **header**: document skeleton (`mei`, `meiHead`, `music > body > mdiv > score`)
//! - **walker**: score traversal (`scoreDef`, `section > measure > staff > layer > element`)
//! - **serialize**: tab-indented UTF-8 text output
//! - **export**: driver, sinks and file entry points
//! - **config** / **errors** / **helpers**: settings, error types, logging

pub mod config;
pub mod document;
pub mod errors;
pub mod export;
pub mod header;
pub mod helpers;
pub mod ids;
pub mod serialize;
pub mod walker;

pub use config::{ExportConfig, INDENT, MEI_VERSION};
pub use document::{Declaration, MeiBuilder, MeiDocument, MeiNode, NodeId, XML_ID};
pub use errors::{MeiError, Result};
pub use export::{save_mei, to_mei, try_save_mei, MeiExporter};
pub use header::build_skeleton;
pub use helpers::log_mei;
pub use ids::{id_number, IdGenerator, ID_PREFIX};
pub use serialize::to_xml_string;
pub use walker::{ScoreWalker, PLACEHOLDER_TAG};
