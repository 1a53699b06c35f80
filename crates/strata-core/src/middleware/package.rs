use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::middleware::error::MiddlewareError;
use crate::middleware::traits::{Middleware, MiddlewareFactory};

/// A package installed next to the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    /// Package identifier, e.g. `strata/access-log`
    pub name: String,
    /// Installed version, when the manifest records one
    #[serde(default)]
    pub version: Option<Version>,
    /// Namespaces the package declares
    #[serde(default)]
    pub namespaces: Vec<String>,
}

impl InstalledPackage {
    pub fn new(name: impl Into<String>, namespaces: Vec<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            namespaces,
        }
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Whether any declared namespace lies strictly below `reserved`.
    ///
    /// Namespaces are compared with a trailing separator, so `Strata\Middleware`
    /// itself does not match `Strata\Middleware\` while
    /// `Strata\Middleware\AccessLog` does.
    pub fn is_under(&self, reserved: &str) -> bool {
        let reserved = with_separator(reserved);
        self.namespaces.iter().any(|namespace| {
            let namespace = with_separator(namespace);
            namespace.len() > reserved.len() && namespace.starts_with(&reserved)
        })
    }
}

fn with_separator(namespace: &str) -> String {
    format!("{}\\", namespace.trim_end_matches('\\'))
}

/// Static registration unit: an installed package plus its entry point.
#[derive(Clone)]
pub struct MiddlewarePackage {
    pub package: InstalledPackage,
    pub entry_point: Option<MiddlewareFactory>,
}

impl MiddlewarePackage {
    /// Package without an activation entry point.
    pub fn new(package: InstalledPackage) -> Self {
        Self {
            package,
            entry_point: None,
        }
    }

    /// Attach the activation entry point.
    pub fn with_entry_point<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Middleware> + Send + Sync + 'static,
    {
        self.entry_point = Some(Arc::new(factory));
        self
    }

    pub fn name(&self) -> &str {
        &self.package.name
    }
}

impl fmt::Debug for MiddlewarePackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewarePackage")
            .field("package", &self.package)
            .field("entry_point", &self.entry_point.is_some())
            .finish()
    }
}

/// On-disk shape of the installed packages manifest.
#[derive(Debug, Default, Deserialize)]
struct InstalledManifest {
    #[serde(default)]
    packages: Vec<InstalledPackage>,
}

/// Read the installed packages manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<Vec<InstalledPackage>, MiddlewareError> {
    let content = fs::read_to_string(path).map_err(|source| MiddlewareError::ManifestIo {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest: InstalledManifest = serde_json::from_str(&content).map_err(|source| {
        MiddlewareError::ManifestParse {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(manifest.packages)
}
