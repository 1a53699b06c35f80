use env_logger::{Builder, Env};

use crate::kernel::constants;
use crate::kernel::error::Result;

/// Thin wrapper over the `log` facade.
///
/// Installing the backend is the first step of `init`. The host process may
/// already own a global logger, in which case installation is a no-op and
/// records keep flowing to the existing backend.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    installed: bool,
}

impl Logger {
    pub fn new() -> Self {
        Self { installed: false }
    }

    /// Install `env_logger` as the global backend, filtered by `STRATA_LOG`.
    pub fn install(&mut self) -> Result<()> {
        let env = Env::new().filter_or(constants::LOG_ENV_VAR, constants::DEFAULT_LOG_FILTER);
        match Builder::from_env(env).format_timestamp_secs().try_init() {
            Ok(()) => {
                self.installed = true;
                log::debug!("Installed env_logger backend");
            }
            Err(_) => {
                log::debug!("A global logger is already installed, keeping it");
            }
        }
        Ok(())
    }

    /// Whether this instance installed the global backend.
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Record `message` under `context`, used as the log target.
    pub fn log(&self, message: &str, context: &str) {
        let context = if context.is_empty() { constants::DEFAULT_LOG_CONTEXT } else { context };
        log::info!(target: context, "{}", message);
    }
}
