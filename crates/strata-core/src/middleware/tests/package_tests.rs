use std::fs;

use semver::Version;
use tempfile::tempdir;

use crate::middleware::error::MiddlewareError;
use crate::middleware::package::{read_manifest, InstalledPackage};

#[test]
fn test_namespace_matching() {
    let reserved = "Strata\\Middleware\\";

    let under = InstalledPackage::new("strata/access-log", vec!["Strata\\Middleware\\AccessLog\\".into()]);
    let without_separator = InstalledPackage::new("strata/cache", vec!["Strata\\Middleware\\Cache".into()]);
    let prefix_itself = InstalledPackage::new("strata/base", vec!["Strata\\Middleware\\".into()]);
    let lookalike = InstalledPackage::new("acme/mw", vec!["Strata\\MiddlewareExtras\\".into()]);
    let unrelated = InstalledPackage::new("acme/utils", vec!["Acme\\Utils\\".into()]);
    let no_namespace = InstalledPackage::new("acme/assets", vec![]);

    assert!(under.is_under(reserved));
    assert!(without_separator.is_under(reserved));
    assert!(!prefix_itself.is_under(reserved));
    assert!(!lookalike.is_under(reserved));
    assert!(!unrelated.is_under(reserved));
    assert!(!no_namespace.is_under(reserved));
}

#[test]
fn test_any_declared_namespace_can_match() {
    let package = InstalledPackage::new(
        "strata/multi",
        vec!["Acme\\Shared\\".into(), "Strata\\Middleware\\Multi\\".into()],
    );

    assert!(package.is_under("Strata\\Middleware"));
}

#[test]
fn test_read_manifest() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("installed.json");
    fs::write(
        &path,
        r#"{
            "packages": [
                { "name": "strata/access-log", "version": "1.2.0", "namespaces": ["Strata\\Middleware\\AccessLog\\"] },
                { "name": "acme/utils" }
            ]
        }"#,
    )
    .expect("Failed to write manifest");

    let packages = read_manifest(&path).expect("read_manifest failed");

    assert_eq!(packages.len(), 2);
    assert_eq!(packages[0].name, "strata/access-log");
    assert_eq!(packages[0].version, Some(Version::new(1, 2, 0)));
    assert!(packages[0].is_under("Strata\\Middleware\\"));
    assert_eq!(packages[1].version, None);
    assert!(packages[1].namespaces.is_empty());
}

#[test]
fn test_read_manifest_errors() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.json");
    assert!(matches!(read_manifest(&missing), Err(MiddlewareError::ManifestIo { .. })));

    let malformed = temp_dir.path().join("installed.json");
    fs::write(&malformed, r#"{ "packages": [ { "version": "1.0.0" } ] }"#).expect("Failed to write manifest");
    assert!(matches!(read_manifest(&malformed), Err(MiddlewareError::ManifestParse { .. })));
}
