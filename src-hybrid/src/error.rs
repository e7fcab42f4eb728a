//! Error type for catalog parsing, configuration and I/O

use std::path::PathBuf;

use crate::transform::TransformKind;

/// Errors raised while building, validating or loading pattern catalogs
///
/// Generating a catalog never fails; these only come from configuration,
/// string parsing and deserialization.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown base function: {0}")]
    UnknownFunction(String),

    #[error("unknown transform kind: {0}")]
    UnknownTransform(String),

    #[error("transform {transform} does not match seed {seed:?}")]
    SeedMismatch {
        transform: TransformKind,
        seed: Option<u64>,
    },

    #[error("pattern has {0} blocks, expected {n}", n = crate::N_BLOCKS)]
    BlockCount(usize),

    #[error("{0} palette is empty")]
    EmptyPalette(&'static str),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
