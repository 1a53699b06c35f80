use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// Core trait that all middleware instances implement.
///
/// The kernel only needs a name; everything else a middleware offers is
/// reached by downcasting through
/// [`MiddlewareRegistry::get_concrete`](super::MiddlewareRegistry::get_concrete).
pub trait Middleware: Any + Send + Sync + Debug {
    /// The name of the middleware
    fn name(&self) -> &str;
}

/// Activation entry point of a middleware package. Called with no arguments.
pub type MiddlewareFactory = Arc<dyn Fn() -> Arc<dyn Middleware> + Send + Sync>;
