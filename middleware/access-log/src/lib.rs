use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use semver::Version;
use strata_core::{InstalledPackage, Middleware, MiddlewarePackage};

/// Package identifier
pub const PACKAGE_NAME: &str = "strata/access-log";

/// Namespace the package declares, below the reserved middleware namespace
pub const NAMESPACE: &str = "Strata\\Middleware\\AccessLog\\";

/// Log target used for access lines
pub const LOG_TARGET: &str = "strata::access";

/// Writes one line per handled request through the `log` facade.
#[derive(Debug, Default)]
pub struct AccessLogMiddleware {
    recorded: AtomicU64,
}

impl AccessLogMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a handled request.
    pub fn record(&self, method: &str, path: &str, status: u16) {
        let count = self.recorded.fetch_add(1, Ordering::Relaxed) + 1;
        log::info!(target: LOG_TARGET, "#{} {} {} -> {}", count, method, path, status);
    }

    /// Number of requests recorded so far.
    pub fn recorded(&self) -> u64 {
        self.recorded.load(Ordering::Relaxed)
    }
}

impl Middleware for AccessLogMiddleware {
    fn name(&self) -> &str {
        "access-log"
    }
}

/// Registration unit handed to [`Application::register_middleware_package`](strata_core::Application::register_middleware_package).
pub fn package() -> MiddlewarePackage {
    let installed = InstalledPackage::new(PACKAGE_NAME, vec![NAMESPACE.to_string()])
        .with_version(Version::new(0, 1, 0));
    MiddlewarePackage::new(installed)
        .with_entry_point(|| Arc::new(AccessLogMiddleware::new()) as Arc<dyn Middleware>)
}
