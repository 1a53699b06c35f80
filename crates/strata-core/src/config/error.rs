//! # Strata Core Configuration Errors
//!
//! Every variant is fatal for `init`: a project cannot become ready without
//! a readable configuration source.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No project configuration found in '{dir}' (expected {stem}.json, {stem}.yaml, {stem}.yml or {stem}.toml)")]
    NotFound { dir: PathBuf, stem: String },

    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Deserialization of '{path}' from '{format}' failed: {source}")]
    Parse {
        path: PathBuf,
        format: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("Configuration in '{0}' must be a mapping at the top level")]
    NotAMapping(PathBuf),
}

impl ConfigError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        ConfigError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}
