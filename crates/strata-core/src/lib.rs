pub mod config;
pub mod host;
pub mod i18n;
pub mod kernel;
pub mod middleware;
pub mod router;
pub mod utils;

// Re-export key public types/traits for easier use by the binary and middleware packages
pub use kernel::Application;
pub use kernel::error::Error as KernelError;
pub use kernel::layout::ProjectLayout;
pub use config::{ConfigStore, ConfigMap};
pub use middleware::{Middleware, MiddlewarePackage, MiddlewareRegistry, InstalledPackage};
pub use router::{RouterFacade, RoutingEngine, RouteTable};
