use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::kernel::constants;
use crate::middleware::error::MiddlewareError;
use crate::middleware::package::{read_manifest, InstalledPackage, MiddlewarePackage};
use crate::middleware::traits::{Middleware, MiddlewareFactory};

/// Installed packages and the entry points known for them.
#[derive(Clone, Default)]
pub struct PackageCatalog {
    packages: Vec<InstalledPackage>,
    entry_points: HashMap<String, MiddlewareFactory>,
}

impl PackageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package together with its entry point, if it has one.
    pub fn register(&mut self, package: MiddlewarePackage) -> Result<(), MiddlewareError> {
        let name = package.package.name.clone();
        if self.contains(&name) {
            return Err(MiddlewareError::DuplicatePackage(name));
        }
        if let Some(factory) = package.entry_point {
            self.entry_points.insert(name.clone(), factory);
        }
        self.packages.push(package.package);
        log::debug!("Registered middleware package '{}'", name);
        Ok(())
    }

    /// Add a package known only from the installed manifest.
    ///
    /// A package already registered explicitly keeps its registration.
    pub fn add_installed(&mut self, package: InstalledPackage) {
        if self.contains(&package.name) {
            log::debug!("Package '{}' already registered, ignoring manifest entry", package.name);
            return;
        }
        self.packages.push(package);
    }

    /// Read the installed packages manifest and add every entry.
    ///
    /// Returns the number of manifest entries read.
    pub fn load_manifest(&mut self, path: &Path) -> Result<usize, MiddlewareError> {
        let packages = read_manifest(path)?;
        let count = packages.len();
        for package in packages {
            self.add_installed(package);
        }
        Ok(count)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.iter().any(|package| package.name == name)
    }

    pub fn packages(&self) -> &[InstalledPackage] {
        &self.packages
    }

    pub fn entry_point(&self, name: &str) -> Option<&MiddlewareFactory> {
        self.entry_points.get(name)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl fmt::Debug for PackageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut with_entry_point: Vec<&String> = self.entry_points.keys().collect();
        with_entry_point.sort();
        f.debug_struct("PackageCatalog")
            .field("packages", &self.packages)
            .field("entry_points", &with_entry_point)
            .finish()
    }
}

/// Why a middleware candidate was not activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Under the reserved namespace but no activation entry point
    MissingEntryPoint,
}

/// A middleware candidate left out during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPackage {
    pub package: String,
    pub reason: SkipReason,
}

/// Active middleware instances, keyed by package identifier.
pub struct MiddlewareRegistry {
    reserved_namespace: String,
    catalog: PackageCatalog,
    middlewares: BTreeMap<String, Arc<dyn Middleware>>,
    skipped: Vec<SkippedPackage>,
    discovered: bool,
}

impl MiddlewareRegistry {
    /// Registry over `catalog` using the default reserved namespace.
    pub fn new(catalog: PackageCatalog) -> Self {
        Self::with_reserved_namespace(catalog, constants::MIDDLEWARE_NAMESPACE)
    }

    pub fn with_reserved_namespace(catalog: PackageCatalog, reserved_namespace: impl Into<String>) -> Self {
        Self {
            reserved_namespace: reserved_namespace.into(),
            catalog,
            middlewares: BTreeMap::new(),
            skipped: Vec::new(),
            discovered: false,
        }
    }

    /// Activate every package under the reserved namespace that has an entry point.
    ///
    /// Runs once; later calls return the number of active middlewares
    /// without touching the registry. Returns the number of active instances.
    pub fn discover(&mut self) -> usize {
        if self.discovered {
            log::debug!("Middleware discovery already ran, keeping {} instance(s)", self.middlewares.len());
            return self.middlewares.len();
        }
        self.discovered = true;

        for package in self.catalog.packages() {
            if !package.is_under(&self.reserved_namespace) {
                continue;
            }

            let Some(factory) = self.catalog.entry_point(&package.name) else {
                log::info!(
                    "Skipping middleware package '{}': no activation entry point",
                    package.name
                );
                self.skipped.push(SkippedPackage {
                    package: package.name.clone(),
                    reason: SkipReason::MissingEntryPoint,
                });
                continue;
            };

            let instance = factory();
            log::info!("Activated middleware '{}' from package '{}'", instance.name(), package.name);
            self.middlewares.insert(package.name.clone(), instance);
        }

        self.middlewares.len()
    }

    /// Active instances. Empty until [`discover`](Self::discover) has run.
    pub fn middlewares(&self) -> &BTreeMap<String, Arc<dyn Middleware>> {
        &self.middlewares
    }

    /// Get a middleware by package identifier.
    pub fn get(&self, package: &str) -> Option<Arc<dyn Middleware>> {
        self.middlewares.get(package).cloned()
    }

    /// Get a middleware by package identifier as its concrete type T.
    pub fn get_concrete<T: Middleware>(&self, package: &str) -> Option<Arc<T>> {
        self.middlewares.get(package).and_then(|instance| {
            let arc_any: Arc<dyn Any + Send + Sync> = instance.clone();
            Arc::downcast::<T>(arc_any).ok()
        })
    }

    /// Candidates left out during discovery.
    pub fn skipped(&self) -> &[SkippedPackage] {
        &self.skipped
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub fn reserved_namespace(&self) -> &str {
        &self.reserved_namespace
    }

    pub fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}

impl fmt::Debug for MiddlewareRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareRegistry")
            .field("reserved_namespace", &self.reserved_namespace)
            .field("middlewares", &self.middlewares.keys().collect::<Vec<_>>())
            .field("skipped", &self.skipped)
            .field("discovered", &self.discovered)
            .finish()
    }
}
