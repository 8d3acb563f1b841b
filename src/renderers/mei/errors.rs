//! Error types for MEI export
//!
//! Building the tree never fails; only the sink and the API-layer input
//! decoding can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeiError {
    /// Output location could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the serialized document did not complete
    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),

    /// Score input could not be decoded
    #[error("invalid score: {0}")]
    InvalidScore(String),

    /// Export settings could not be decoded
    #[error("invalid export config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MeiError>;
