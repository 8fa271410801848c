//! Error types for varna analysis

use thiserror::Error;

/// Boundary and initialisation failures.
#[derive(Error, Debug)]
pub enum VarnaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty token")]
    EmptyToken,

    #[error("Pratyahara {0} has no resolution")]
    UnresolvedPratyahara(String),

    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Why a set of letters does not form a pratyahara.
///
/// These are reported outcomes, not faults: callers decide whether to
/// surface them or treat the set as unnamed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("No letters of the Maheshwara Sutras were given")]
    Empty,

    #[error("Cannot form a pratyahara due to discontinuity")]
    Discontiguous,

    #[error("Cannot form a pratyahara due to end position")]
    NotClosed,

    #[error("Malformed pratyahara: {0}")]
    MalformedName(String),
}

pub type Result<T> = std::result::Result<T, VarnaError>;
