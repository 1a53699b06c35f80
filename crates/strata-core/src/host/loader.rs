use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

use crate::kernel::layout::ProjectLayout;

/// Class-loading interface supplied by the host process.
pub trait ClassLoader: Debug + Send {
    /// Register `path` as the directory for the namespace `prefix`,
    /// replacing any directory previously set for it.
    fn set_namespace_path(&mut self, prefix: &str, path: &Path);

    /// Path a fully qualified class name maps to, if any registered
    /// namespace covers it.
    fn resolve(&self, qualified_name: &str) -> Option<PathBuf>;
}

/// Default loader: an in-memory prefix to directories map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    prefixes: BTreeMap<String, Vec<PathBuf>>,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories registered for `prefix`.
    pub fn paths(&self, prefix: &str) -> Option<&[PathBuf]> {
        self.prefixes.get(prefix).map(|paths| paths.as_slice())
    }

    /// Add another directory for `prefix`, keeping existing ones.
    pub fn add_namespace_path(&mut self, prefix: &str, path: &Path) {
        self.prefixes
            .entry(prefix.to_string())
            .or_default()
            .push(path.to_path_buf());
    }
}

impl ClassLoader for NamespaceMap {
    fn set_namespace_path(&mut self, prefix: &str, path: &Path) {
        self.prefixes.insert(prefix.to_string(), vec![path.to_path_buf()]);
    }

    /// Uses the longest matching prefix and its first directory.
    fn resolve(&self, qualified_name: &str) -> Option<PathBuf> {
        let (prefix, paths) = self
            .prefixes
            .iter()
            .filter(|(prefix, _)| qualified_name.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())?;
        let remainder = &qualified_name[prefix.len()..];
        let mut path = paths.first()?.clone();
        path.extend(remainder.split('\\').filter(|segment| !segment.is_empty()));
        Some(path)
    }
}

/// Registers the project's source directory under the project namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespaceBinder;

impl NamespaceBinder {
    /// Bind `<namespace>\` to `<project>/src/`. Returns the registered pair.
    pub fn bind(loader: &mut dyn ClassLoader, layout: &ProjectLayout) -> (String, PathBuf) {
        let prefix = format!("{}\\", layout.namespace());
        let path = layout.src_dir();
        loader.set_namespace_path(&prefix, &path);
        log::debug!("Registered namespace '{}' -> {}", prefix, path.display());
        (prefix, path)
    }
}
