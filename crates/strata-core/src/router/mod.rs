//! # Strata Core Router Facade
//!
//! Route matching belongs to the routing engine, an external collaborator
//! reached through [`RoutingEngine`]. The facade only composes the engine
//! and feeds it the route descriptors declared under the `routes` key,
//! without interpreting them.
use std::fmt::Debug;

use serde_json::Value;

use crate::config::ConfigStore;
use crate::kernel::constants;

/// A declared route, opaque to the core
pub type RouteDescriptor = Value;

/// Interface of the underlying routing engine
pub trait RoutingEngine: Debug + Send {
    /// Accept a sequence of route descriptors
    fn add_routes(&mut self, routes: Vec<RouteDescriptor>);

    /// Descriptors received so far, in declaration order
    fn routes(&self) -> &[RouteDescriptor];
}

/// Default engine: keeps descriptors in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoutingEngine for RouteTable {
    fn add_routes(&mut self, routes: Vec<RouteDescriptor>) {
        self.routes.extend(routes);
    }

    fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }
}

/// Owns the routing engine composed during `run`.
#[derive(Debug)]
pub struct RouterFacade {
    engine: Box<dyn RoutingEngine>,
}

impl RouterFacade {
    /// Facade over the default [`RouteTable`] engine.
    pub fn url_routing() -> Self {
        Self::with_engine(Box::new(RouteTable::new()))
    }

    pub fn with_engine(engine: Box<dyn RoutingEngine>) -> Self {
        Self { engine }
    }

    /// Pass the `routes` configuration value to the engine.
    ///
    /// Only a sequence is forwarded. An absent or differently shaped value
    /// means there are no routes to add and the engine is not called.
    /// Returns the number of descriptors forwarded.
    pub fn load_routes(&mut self, config: &ConfigStore) -> usize {
        match config.get(constants::KEY_ROUTES) {
            Some(Value::Array(routes)) => {
                let count = routes.len();
                self.engine.add_routes(routes.clone());
                log::debug!("Loaded {} application route(s)", count);
                count
            }
            None => 0,
            Some(other) => {
                log::debug!("Ignoring '{}': expected a sequence, found {}", constants::KEY_ROUTES, other);
                0
            }
        }
    }

    pub fn add_routes(&mut self, routes: Vec<RouteDescriptor>) {
        self.engine.add_routes(routes);
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        self.engine.routes()
    }

    pub fn engine(&self) -> &dyn RoutingEngine {
        self.engine.as_ref()
    }
}

// Test module declaration
#[cfg(test)]
mod tests;
