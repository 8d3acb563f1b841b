//! Renderers module
//!
//! This module contains export logic for converting
//! score documents into output formats.

pub mod mei;

// Re-export commonly used types
pub use mei::*;
