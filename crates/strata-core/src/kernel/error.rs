//! # Strata Core Kernel Errors
//!
//! Defines the aggregate error type of the kernel.
//!
//! Subsystems keep their own typed errors ([`ConfigError`], [`MiddlewareError`])
//! which convert into [`Error`] through `#[from]`. Failures inside a lifecycle
//! step that have no subsystem error of their own (logger, timezone,
//! localization, security) are reported as [`Error::KernelLifecycleError`]
//! tagged with the [`KernelLifecyclePhase`] they happened in.
use std::error::Error as StdError;
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::middleware::error::MiddlewareError;

/// Custom error type for the Strata kernel
#[derive(Debug, ThisError)]
pub enum Error {
    /// Project configuration could not be located, read or parsed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Middleware catalog or manifest error
    #[error("Middleware error: {0}")]
    Middleware(#[from] MiddlewareError),

    /// Error occurring during a specific kernel lifecycle phase.
    #[error("Kernel lifecycle error during {phase}: {message}")]
    KernelLifecycleError {
        phase: KernelLifecyclePhase,
        message: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Generic error with message
    #[error("Error: {0}")]
    Other(String),
}

/// Represents a specific step of the kernel's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum KernelLifecyclePhase {
    #[error("Logger")]
    Logger,
    #[error("Configuration")]
    Configuration,
    #[error("Timezone")]
    Timezone,
    #[error("Localization")]
    Localization,
    #[error("Middleware")]
    Middleware,
    #[error("Router")]
    Router,
    #[error("PostTypes")]
    PostTypes,
    #[error("Security")]
    Security,
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;

impl Error {
    /// Lifecycle error without an underlying cause.
    pub fn lifecycle(phase: KernelLifecyclePhase, message: impl Into<String>) -> Self {
        Error::KernelLifecycleError {
            phase,
            message: message.into(),
            source: None,
        }
    }

    /// Lifecycle error wrapping the cause reported by a collaborator.
    pub fn lifecycle_with_source<E>(phase: KernelLifecyclePhase, message: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Error::KernelLifecycleError {
            phase,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The lifecycle phase this error was raised in, if any.
    pub fn phase(&self) -> Option<KernelLifecyclePhase> {
        match self {
            Error::Config(_) => Some(KernelLifecyclePhase::Configuration),
            Error::Middleware(_) => Some(KernelLifecyclePhase::Middleware),
            Error::KernelLifecycleError { phase, .. } => Some(*phase),
            Error::Other(_) => None,
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}
