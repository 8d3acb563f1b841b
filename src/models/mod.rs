//! Models module for MEI export
//!
//! The score document model read by the exporter.

pub mod score;
pub mod serde_helpers;

// Re-export commonly used types
pub use score::*;
