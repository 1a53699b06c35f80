//! # Strata Core Middleware
//!
//! Middleware packages are optional units installed alongside a project.
//! Discovery is driven by an explicit [`PackageCatalog`]: installed packages
//! are registered at startup (or read from the installed-packages manifest)
//! and entry points are plain factories keyed by package name.
//!
//! A package is activated only when it both declares a namespace below the
//! reserved [`MIDDLEWARE_NAMESPACE`](crate::kernel::constants::MIDDLEWARE_NAMESPACE)
//! and has an entry point. Packages that match the namespace but lack the
//! entry point are skipped and recorded, never treated as errors.
//!
//! - **[`traits`]**: the [`Middleware`] trait and the factory type.
//! - **[`package`]**: [`InstalledPackage`], [`MiddlewarePackage`] and manifest parsing.
//! - **[`registry`]**: [`PackageCatalog`] and [`MiddlewareRegistry`].
//! - **[`error`]**: [`MiddlewareError`](error::MiddlewareError).
pub mod error;
pub mod package;
pub mod registry;
pub mod traits;

pub use error::MiddlewareError;
pub use package::{InstalledPackage, MiddlewarePackage};
pub use registry::{MiddlewareRegistry, PackageCatalog, SkipReason, SkippedPackage};
pub use traits::{Middleware, MiddlewareFactory};

// Test module declaration
#[cfg(test)]
mod tests;
