//! # Strata Core Kernel
//!
//! The `kernel` module is the heart of `strata-core`. It owns the
//! [`Application`](bootstrap::Application) context object, which sequences
//! the two lifecycle phases:
//!
//! - **`init`**: logger, process id record, project configuration and
//!   namespace binding, timezone, localization, middleware registry
//!   construction. Readiness flips to `true` only when every step succeeds.
//! - **`run`**: router composition, custom post types, application routes,
//!   middleware activation and security hardening.
//!
//! Supporting submodules:
//!
//! - `constants`: conventional file names, keys and defaults.
//! - `error`: the aggregate [`Error`] type and `Result` alias.
//! - `layout`: the [`ProjectLayout`](layout::ProjectLayout) describing where a project keeps its files.
//! - `logger`: the [`Logger`](logger::Logger) wrapper around the `log` facade.
//! - `timezone`: timezone resolution from configuration.
pub mod bootstrap;
pub mod constants;
pub mod error;
pub mod layout;
pub mod logger;
pub mod timezone;

pub use bootstrap::{Application, LifecycleState};
pub use error::{Error, KernelLifecyclePhase, Result};
pub use layout::ProjectLayout;
pub use logger::Logger;
