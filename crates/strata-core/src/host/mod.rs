//! # Strata Core Host Seams
//!
//! Interfaces to the host runtime the framework is layered on. The core
//! only drives these seams; what they do is up to the host.
//!
//! - **[`loader`]**: [`ClassLoader`] and the [`NamespaceBinder`] that registers
//!   the project's sources with it.
//! - **[`post_types`]**: [`PostTypeRegistrar`], fed from `custom-post-types`.
//! - **[`security`]**: [`SecurityMeasures`], applied last during `run`.
pub mod loader;
pub mod post_types;
pub mod security;

pub use loader::{ClassLoader, NamespaceBinder, NamespaceMap};
pub use post_types::{PostTypeDefinition, PostTypeRegistrar, PostTypeRegistry};
pub use security::{Measure, Security, SecurityMeasures};

// Test module declaration
#[cfg(test)]
mod tests;
