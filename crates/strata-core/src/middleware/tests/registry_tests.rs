use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::middleware::error::MiddlewareError;
use crate::middleware::package::{InstalledPackage, MiddlewarePackage};
use crate::middleware::registry::{MiddlewareRegistry, PackageCatalog, SkipReason};
use crate::middleware::traits::Middleware;

#[derive(Debug)]
struct TestMiddleware {
    name: String,
}

impl Middleware for TestMiddleware {
    fn name(&self) -> &str {
        &self.name
    }
}

fn package(name: &str, namespace: &str) -> InstalledPackage {
    InstalledPackage::new(name, vec![namespace.to_string()])
}

fn with_entry_point(name: &str, namespace: &str) -> MiddlewarePackage {
    let middleware_name = format!("{}-instance", name);
    MiddlewarePackage::new(package(name, namespace)).with_entry_point(move || {
        Arc::new(TestMiddleware { name: middleware_name.clone() }) as Arc<dyn Middleware>
    })
}

#[test]
fn test_middlewares_empty_before_discovery() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"))
        .expect("register failed");

    let registry = MiddlewareRegistry::new(catalog);

    assert!(!registry.is_discovered());
    assert!(registry.middlewares().is_empty());
}

#[test]
fn test_discover_activates_reserved_packages_only() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"))
        .expect("register failed");
    catalog
        .register(with_entry_point("acme/tracker", "Acme\\Tracker\\"))
        .expect("register failed");

    let mut registry = MiddlewareRegistry::new(catalog);
    let active = registry.discover();

    assert_eq!(active, 1);
    assert!(registry.middlewares().contains_key("strata/cache"));
    assert!(
        !registry.middlewares().contains_key("acme/tracker"),
        "package outside the reserved namespace must never activate"
    );
    assert!(registry.skipped().is_empty(), "non-middleware packages are not candidates");
    assert_eq!(
        registry.get("strata/cache").map(|m| m.name().to_string()),
        Some("strata/cache-instance".to_string())
    );
}

#[test]
fn test_discover_skips_missing_entry_point() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(MiddlewarePackage::new(package("strata/headless", "Strata\\Middleware\\Headless\\")))
        .expect("register failed");
    catalog
        .register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"))
        .expect("register failed");

    let mut registry = MiddlewareRegistry::new(catalog);
    registry.discover();

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.skipped().len(), 1);
    assert_eq!(registry.skipped()[0].package, "strata/headless");
    assert_eq!(registry.skipped()[0].reason, SkipReason::MissingEntryPoint);
}

#[test]
fn test_discover_runs_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let mut catalog = PackageCatalog::new();
    catalog
        .register(
            MiddlewarePackage::new(package("strata/counted", "Strata\\Middleware\\Counted\\")).with_entry_point(
                move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Arc::new(TestMiddleware { name: "counted".into() }) as Arc<dyn Middleware>
                },
            ),
        )
        .expect("register failed");

    let mut registry = MiddlewareRegistry::new(catalog);
    assert_eq!(registry.discover(), 1);
    assert_eq!(registry.discover(), 1);

    assert_eq!(calls.load(Ordering::SeqCst), 1, "entry point must be called exactly once");
    assert!(registry.is_discovered());
}

#[test]
fn test_duplicate_registration_fails() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"))
        .expect("register failed");

    let result = catalog.register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"));

    match result {
        Err(MiddlewareError::DuplicatePackage(name)) => assert_eq!(name, "strata/cache"),
        other => panic!("Expected DuplicatePackage, got {:?}", other),
    }
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_manifest_entries_do_not_override_registrations() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"))
        .expect("register failed");

    catalog.add_installed(package("strata/cache", "Strata\\Middleware\\Other\\"));
    catalog.add_installed(package("strata/manifest-only", "Strata\\Middleware\\ManifestOnly\\"));

    assert_eq!(catalog.len(), 2);
    assert!(catalog.entry_point("strata/cache").is_some());

    let mut registry = MiddlewareRegistry::new(catalog);
    registry.discover();
    assert!(registry.middlewares().contains_key("strata/cache"));
    assert_eq!(registry.skipped()[0].package, "strata/manifest-only");
}

#[test]
fn test_get_concrete_downcasts() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(with_entry_point("strata/cache", "Strata\\Middleware\\Cache\\"))
        .expect("register failed");
    let mut registry = MiddlewareRegistry::new(catalog);
    registry.discover();

    let concrete = registry.get_concrete::<TestMiddleware>("strata/cache");

    assert_eq!(concrete.map(|m| m.name.clone()), Some("strata/cache-instance".to_string()));
    assert!(registry.get_concrete::<TestMiddleware>("strata/missing").is_none());
}

#[test]
fn test_custom_reserved_namespace() {
    let mut catalog = PackageCatalog::new();
    catalog
        .register(with_entry_point("acme/tracker", "Acme\\Middleware\\Tracker\\"))
        .expect("register failed");

    let mut registry = MiddlewareRegistry::with_reserved_namespace(catalog, "Acme\\Middleware");
    registry.discover();

    assert_eq!(registry.reserved_namespace(), "Acme\\Middleware");
    assert!(registry.middlewares().contains_key("acme/tracker"));
}
