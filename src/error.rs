//! Error types for geometry computations and feature loading.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the pure geometry and catalog operations.
///
/// All of these are recoverable: callers are expected to skip the optional
/// clamp or overlay rather than abort.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("no coordinates to bound")]
    EmptyInput,

    #[error("polygon ring with {vertices} vertices has no edge of positive length")]
    DegenerateGeometry { vertices: usize },

    #[error("expected a Polygon feature, found {kind}")]
    NotAPolygon { kind: &'static str },

    #[error("no feature or place named {0:?}")]
    NotFound(String),

    #[error("unknown place category: {0}")]
    UnknownCategory(String),
}

/// Failures while reading a GeoJSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported GeoJSON document type: {0}")]
    UnsupportedDocument(String),
}

pub type GeoResult<T> = Result<T, GeoError>;
