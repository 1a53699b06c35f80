//! # Strata Core Middleware Errors
//!
//! Registry misuse and unreadable manifests. A package that simply lacks an
//! entry point is not an error; see [`SkipReason`](super::SkipReason).
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MiddlewareError {
    #[error("Middleware package already registered: '{0}'")]
    DuplicatePackage(String),

    #[error("Failed to read package manifest '{path}': {source}")]
    ManifestIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed package manifest '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
