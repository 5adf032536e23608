//! Error types for the I/O edges around the converter.
//!
//! Conversion itself never fails; these cover reading input, writing output
//! and reporting an empty result to the caller.

use thiserror::Error;

use crate::record::ItemKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no valid {kind} found, check the input format")]
    NothingFound { kind: ItemKind },

    #[error("no input given")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
