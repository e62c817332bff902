//! Error type shared by the graph, generator and exporters.

use core::fmt;
use std::io;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// The error type for fallible graph operations.
///
/// Mutations never fail: invalid or duplicate requests are silent no-ops.
/// Only operations that cannot produce a meaningful answer report errors.
#[derive(Debug)]
pub enum GraphError {
    /// A start vertex passed to an algorithm is not in the graph.
    VertexNotFound,
    /// A generator weight range with `min > max`.
    InvalidWeightRange {
        /// Lower bound requested.
        min: u32,
        /// Upper bound requested.
        max: u32,
    },
    /// Writing an export failed.
    Io(io::Error),
    /// The external renderer failed or is missing.
    Render(String),
    /// JSON encoding or decoding failed.
    Json(serde_json::Error),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound => f.write_str("start vertex not found in the graph"),
            Self::InvalidWeightRange { min, max } => {
                write!(f, "invalid weight range: minimum {min} exceeds maximum {max}")
            }
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Render(msg) => write!(f, "render failed: {msg}"),
            Self::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GraphError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
