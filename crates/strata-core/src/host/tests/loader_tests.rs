use std::path::{Path, PathBuf};

use crate::host::loader::{ClassLoader, NamespaceBinder, NamespaceMap};
use crate::kernel::layout::ProjectLayout;

#[test]
fn test_binder_registers_src_under_project_namespace() {
    let layout = ProjectLayout::new("/srv/site");
    let mut loader = NamespaceMap::new();

    let (prefix, path) = NamespaceBinder::bind(&mut loader, &layout);

    assert_eq!(prefix, "App\\");
    assert_eq!(path, PathBuf::from("/srv/site/src"));
    assert_eq!(loader.paths("App\\"), Some(&[PathBuf::from("/srv/site/src")][..]));
}

#[test]
fn test_binder_uses_layout_namespace() {
    let layout = ProjectLayout::new("/srv/site").with_namespace("Test\\Fixture\\");
    let mut loader = NamespaceMap::new();

    let (prefix, _) = NamespaceBinder::bind(&mut loader, &layout);

    assert_eq!(prefix, "Test\\Fixture\\");
}

#[test]
fn test_set_namespace_path_replaces() {
    let mut loader = NamespaceMap::new();
    loader.add_namespace_path("App\\", Path::new("/a"));
    loader.add_namespace_path("App\\", Path::new("/b"));
    assert_eq!(loader.paths("App\\").map(|p| p.len()), Some(2));

    loader.set_namespace_path("App\\", Path::new("/c"));

    assert_eq!(loader.paths("App\\"), Some(&[PathBuf::from("/c")][..]));
}

#[test]
fn test_resolve_uses_longest_prefix() {
    let mut loader = NamespaceMap::new();
    loader.set_namespace_path("App\\", Path::new("/srv/site/src"));
    loader.set_namespace_path("App\\Model\\", Path::new("/srv/models"));

    assert_eq!(loader.resolve("App\\Model\\Song"), Some(PathBuf::from("/srv/models/Song")));
    assert_eq!(
        loader.resolve("App\\Controller\\HomeController"),
        Some(PathBuf::from("/srv/site/src/Controller/HomeController"))
    );
    assert!(loader.resolve("Vendor\\Thing").is_none());
}

#[test]
fn test_resolve_through_trait_object() {
    let layout = ProjectLayout::new("/srv/site");
    let mut loader: Box<dyn ClassLoader> = Box::new(NamespaceMap::new());

    NamespaceBinder::bind(loader.as_mut(), &layout);

    assert_eq!(loader.resolve("App\\Song"), Some(PathBuf::from("/srv/site/src/Song")));
    assert!(loader.resolve("Apple\\Song").is_none());
}
