use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::config::ConfigStore;
use crate::router::{RouteDescriptor, RouterFacade, RoutingEngine};

/// Engine recording every `add_routes` call.
#[derive(Debug, Default)]
struct RecordingEngine {
    calls: Arc<Mutex<Vec<Vec<RouteDescriptor>>>>,
    routes: Vec<RouteDescriptor>,
}

impl RoutingEngine for RecordingEngine {
    fn add_routes(&mut self, routes: Vec<RouteDescriptor>) {
        self.calls.lock().unwrap().push(routes.clone());
        self.routes.extend(routes);
    }

    fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }
}

fn config(value: Value) -> ConfigStore {
    match value {
        Value::Object(map) => ConfigStore::from_map(map),
        other => panic!("expected an object, got {}", other),
    }
}

fn recording_facade() -> (RouterFacade, Arc<Mutex<Vec<Vec<RouteDescriptor>>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let engine = RecordingEngine { calls: calls.clone(), routes: Vec::new() };
    (RouterFacade::with_engine(Box::new(engine)), calls)
}

#[test]
fn test_routes_are_forwarded_wholesale() {
    let (mut router, calls) = recording_facade();
    let routes = json!([
        ["GET", "/", "HomeController"],
        { "method": "POST", "path": "/songs" },
    ]);

    let added = router.load_routes(&config(json!({ "routes": routes.clone() })));

    assert_eq!(added, 2);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1, "one add_routes call per load");
    assert_eq!(Value::Array(calls[0].clone()), routes);
}

#[test]
fn test_non_sequence_routes_are_noop() {
    let (mut router, calls) = recording_facade();

    let added = router.load_routes(&config(json!({ "routes": "not-a-list" })));

    assert_eq!(added, 0);
    assert!(calls.lock().unwrap().is_empty(), "add_routes must not be called");
    assert!(router.routes().is_empty());
}

#[test]
fn test_missing_or_mapping_routes_are_noop() {
    let (mut router, calls) = recording_facade();

    router.load_routes(&config(json!({ "timezone": "UTC" })));
    router.load_routes(&config(json!({ "routes": { "home": "/" } })));
    router.load_routes(&config(json!({ "routes": null })));

    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_default_engine_keeps_declaration_order() {
    let mut router = RouterFacade::url_routing();

    router.load_routes(&config(json!({ "routes": ["/a", "/b"] })));
    router.add_routes(vec![json!("/c")]);

    assert_eq!(router.routes(), &[json!("/a"), json!("/b"), json!("/c")]);
    assert_eq!(router.engine().routes().len(), 3);
}
