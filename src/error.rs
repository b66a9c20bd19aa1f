use std::path::PathBuf;
use thiserror::Error;

use crate::ir::TierKind;

/// The main error type for labgrid operations.
#[derive(Debug, Error)]
pub enum LabgridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported encoding: {detail}")]
    UnsupportedEncoding { detail: String },

    #[error("Malformed TextGrid header: expected \"{expected}\", found {found}")]
    MalformedHeader {
        expected: &'static str,
        found: String,
    },

    #[error("Unexpected end of input while reading {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("Invalid token for {expected}: {found}")]
    InvalidToken { expected: String, found: String },

    #[error("Invalid tier status <{0}> (expected <exists> or <absent>)")]
    InvalidTierStatus(String),

    #[error("Tier '{tier}' has {bound} {value}, outside TextGrid {bound} {limit}")]
    TierBounds {
        tier: String,
        bound: &'static str,
        value: f64,
        limit: f64,
    },

    #[error("Unknown tier type '{0}' (expected IntervalTier or TextTier)")]
    UnknownTierType(String),

    #[error("Tier kind mismatch: operation requires {expected}, tier is {found}")]
    TierKindMismatch { expected: TierKind, found: TierKind },

    #[error("Bounds violation in tier '{tier}': {message}")]
    BoundsViolation { tier: String, message: String },

    #[error("No tier named '{0}'")]
    TierNotFound(String),

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Refusing to overwrite existing file {0}")]
    FileExists(PathBuf),

    #[error("Malformed lab file {path} at line {line}: {message}")]
    MalformedLabFile {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to parse TextGrid JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write TextGrid JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
