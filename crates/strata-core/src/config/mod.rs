//! # Strata Core Configuration
//!
//! Hierarchical, dot-addressed configuration.
//!
//! - **[`store`]**: the [`ConfigStore`] and the free functions behind it
//!   (`normalize`, `merge`, `get`). The canonical form is one nested mapping;
//!   dot-notation keys such as `"logger.level"` are only a way of addressing it.
//! - **[`format`]**: supported on-disk formats ([`ConfigFormat`]).
//! - **[`loader`]**: locating and parsing the project configuration source.
//! - **[`error`]**: [`ConfigError`](error::ConfigError).
pub mod error;
pub mod format;
pub mod loader;
pub mod store;

pub use error::ConfigError;
pub use format::ConfigFormat;
pub use loader::load_project_config;
pub use store::{ConfigMap, ConfigStore};
