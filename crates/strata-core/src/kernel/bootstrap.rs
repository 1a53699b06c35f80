use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use crate::config::{self, ConfigStore};
use crate::host::loader::{ClassLoader, NamespaceBinder, NamespaceMap};
use crate::host::post_types::{definitions_from, PostTypeRegistrar, PostTypeRegistry};
use crate::host::security::{Security, SecurityMeasures};
use crate::i18n::I18n;
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};
use crate::kernel::layout::ProjectLayout;
use crate::kernel::logger::Logger;
use crate::kernel::timezone::resolve_timezone;
use crate::middleware::{Middleware, MiddlewarePackage, MiddlewareRegistry, PackageCatalog};
use crate::router::{RouteTable, RouterFacade, RoutingEngine};
use crate::utils::fs::write_pid_file;

/// Builds the routing engine composed on every `run`.
pub type EngineFactory = Box<dyn Fn() -> Box<dyn RoutingEngine> + Send>;

static NO_MIDDLEWARES: BTreeMap<String, Arc<dyn Middleware>> = BTreeMap::new();

/// Where the application is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, or the last `init` failed
    Uninitialized,
    /// Inside `init`
    Initializing,
    /// Every `init` step succeeded
    Ready,
    /// `run` composed the router, middleware and security
    Running,
}

/// Running Strata instance.
///
/// The application is an explicit context object: it owns the configuration
/// store, the readiness flag and every subsystem, and hands out read access
/// to the rest of the program. Nothing is stored in globals, so each caller
/// (and each test) builds its own instance over a [`ProjectLayout`].
pub struct Application {
    layout: ProjectLayout,
    config: ConfigStore,
    ready: bool,
    state: LifecycleState,
    logger: Option<Logger>,
    timezone: Option<Tz>,
    i18n: Option<I18n>,
    class_loader: Box<dyn ClassLoader>,
    catalog: PackageCatalog,
    middleware: Option<MiddlewareRegistry>,
    engine_factory: EngineFactory,
    router: Option<RouterFacade>,
    post_types: Box<dyn PostTypeRegistrar>,
    security: Box<dyn SecurityMeasures>,
}

impl Application {
    /// Creates an application for the project described by `layout`, with
    /// the default host collaborators.
    pub fn new(layout: ProjectLayout) -> Self {
        Self {
            layout,
            config: ConfigStore::new(),
            ready: false,
            state: LifecycleState::Uninitialized,
            logger: None,
            timezone: None,
            i18n: None,
            class_loader: Box::new(NamespaceMap::new()),
            catalog: PackageCatalog::new(),
            middleware: None,
            engine_factory: Box::new(|| Box::new(RouteTable::new())),
            router: None,
            post_types: Box::new(PostTypeRegistry::new()),
            security: Box::new(Security::new()),
        }
    }

    /// Shorthand for an application rooted at `root` with the default layout.
    pub fn for_project(root: impl Into<PathBuf>) -> Self {
        Self::new(ProjectLayout::new(root))
    }

    /// Use the host's class loader instead of the in-memory [`NamespaceMap`].
    pub fn with_class_loader(mut self, loader: Box<dyn ClassLoader>) -> Self {
        self.class_loader = loader;
        self
    }

    /// Use another routing engine. The factory is called once per `run`.
    pub fn with_routing_engine<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Box<dyn RoutingEngine> + Send + 'static,
    {
        self.engine_factory = Box::new(factory);
        self
    }

    pub fn with_post_type_registrar(mut self, registrar: Box<dyn PostTypeRegistrar>) -> Self {
        self.post_types = registrar;
        self
    }

    pub fn with_security(mut self, security: Box<dyn SecurityMeasures>) -> Self {
        self.security = security;
        self
    }

    /// Make a middleware package known to discovery.
    ///
    /// Registrations made after `init` take effect on the next `init`.
    pub fn register_middleware_package(&mut self, package: MiddlewarePackage) -> Result<()> {
        self.catalog.register(package)?;
        Ok(())
    }

    /// Prepares the application for its run.
    ///
    /// Every step is redone on each call. Readiness and everything a previous
    /// `init` or `run` produced are reset first; readiness is only set again
    /// when all steps succeed. The first failing step's error is returned.
    pub fn init(&mut self) -> Result<()> {
        self.ready = false;
        self.state = LifecycleState::Initializing;
        self.timezone = None;
        self.i18n = None;
        self.middleware = None;
        self.router = None;

        match self.initialize_steps() {
            Ok(()) => {
                self.ready = true;
                self.state = LifecycleState::Ready;
                log::info!("{} v{} initialized", constants::APP_NAME, constants::APP_VERSION);
                Ok(())
            }
            Err(e) => {
                self.state = LifecycleState::Uninitialized;
                log::error!("Initialization failed: {}", e);
                Err(e)
            }
        }
    }

    fn initialize_steps(&mut self) -> Result<()> {
        self.configure_logger()?;
        self.save_current_pid();
        self.load_configuration()?;
        self.set_timezone()?;
        self.localize()?;
        self.middleware = Some(self.build_middleware_registry()?);
        Ok(())
    }

    /// Composes the router, loads the project's post types and routes,
    /// activates middleware and hardens the installation.
    ///
    /// Initializes first when the application is not ready. A failure in one
    /// of the composition steps is returned as is and leaves the application
    /// partially composed.
    pub fn run(&mut self) -> Result<()> {
        if !self.ready {
            log::debug!("run() called before init(), initializing now");
            self.init()?;
        }

        self.configure_router();
        self.configure_custom_post_types()?;
        self.add_app_routes();
        self.load_middleware();
        self.improve_security()?;

        self.state = LifecycleState::Running;
        log::info!("{} is running", constants::APP_NAME);
        Ok(())
    }

    fn configure_logger(&mut self) -> Result<()> {
        let mut logger = Logger::new();
        logger.install()?;
        self.logger = Some(logger);
        Ok(())
    }

    /// Record the process id for spotting runaway processes.
    ///
    /// Best effort: a failure is logged and otherwise ignored.
    fn save_current_pid(&self) {
        let pid = std::process::id();
        let path = self.layout.pid_file();
        self.log(&format!("Loaded and running with process ID {}", pid), constants::DEFAULT_LOG_CONTEXT);

        if let Err(e) = write_pid_file(&path, pid) {
            log::warn!("Could not record process id in {}: {}", path.display(), e);
        }
    }

    /// Load the project configuration source and bind the project namespace.
    pub fn load_configuration(&mut self) -> Result<()> {
        let raw = config::load_project_config(&self.layout.config_dir())?;
        self.config.normalize(raw);
        NamespaceBinder::bind(self.class_loader.as_mut(), &self.layout);
        Ok(())
    }

    fn set_timezone(&mut self) -> Result<()> {
        let timezone = resolve_timezone(&self.config)?;
        log::debug!("Using timezone {}", timezone.name());
        self.timezone = Some(timezone);
        Ok(())
    }

    fn localize(&mut self) -> Result<()> {
        let mut i18n = I18n::new();
        i18n.initialize(&self.config)?;
        self.i18n = Some(i18n);
        Ok(())
    }

    fn build_middleware_registry(&self) -> Result<MiddlewareRegistry> {
        let mut catalog = self.catalog.clone();
        let manifest = self.layout.installed_manifest();
        if manifest.is_file() {
            let count = catalog.load_manifest(&manifest)?;
            log::debug!("Read {} installed package(s) from {}", count, manifest.display());
        }
        Ok(MiddlewareRegistry::new(catalog))
    }

    fn configure_router(&mut self) {
        self.router = Some(RouterFacade::with_engine((self.engine_factory)()));
    }

    fn configure_custom_post_types(&mut self) -> Result<()> {
        let definitions = definitions_from(self.config.get(constants::KEY_CUSTOM_POST_TYPES));
        if definitions.is_empty() {
            return Ok(());
        }
        let count = definitions.len();
        self.post_types.register(definitions).map_err(|e| match e {
            Error::KernelLifecycleError { .. } => e,
            other => Error::lifecycle_with_source(
                KernelLifecyclePhase::PostTypes,
                "Custom post type registration failed",
                other,
            ),
        })?;
        log::debug!("Registered {} custom post type(s)", count);
        Ok(())
    }

    fn add_app_routes(&mut self) {
        if let Some(router) = self.router.as_mut() {
            router.load_routes(&self.config);
        }
    }

    fn load_middleware(&mut self) {
        if let Some(registry) = self.middleware.as_mut() {
            registry.discover();
        }
    }

    fn improve_security(&mut self) -> Result<()> {
        self.security.add_measures(&self.config).map_err(|e| match e {
            Error::KernelLifecycleError { .. } => e,
            other => Error::lifecycle_with_source(
                KernelLifecyclePhase::Security,
                "Applying security measures failed",
                other,
            ),
        })
    }

    /// Fetch a configuration value by dotted key.
    pub fn get_config(&self, key: &str) -> Option<&Value> {
        self.config.get(key)
    }

    /// Merge a value into the configuration under a dotted key.
    pub fn set_config(&mut self, key: &str, value: impl Into<Value>) {
        self.config.set(key, value);
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// Record `message` under `context` through the configured logger.
    ///
    /// Dropped when the logger has not been configured yet.
    pub fn log(&self, message: &str, context: &str) {
        if let Some(logger) = &self.logger {
            logger.log(message, context);
        }
    }

    /// Whether every `init` step has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Timezone resolved during `init`.
    pub fn timezone(&self) -> Option<Tz> {
        self.timezone
    }

    /// Current time in the resolved timezone.
    pub fn local_now(&self) -> Option<DateTime<Tz>> {
        self.timezone.map(|tz| Utc::now().with_timezone(&tz))
    }

    pub fn i18n(&self) -> Option<&I18n> {
        self.i18n.as_ref()
    }

    pub fn router(&self) -> Option<&RouterFacade> {
        self.router.as_ref()
    }

    pub fn middleware_registry(&self) -> Option<&MiddlewareRegistry> {
        self.middleware.as_ref()
    }

    /// Active middleware instances, empty before `run`.
    pub fn middlewares(&self) -> &BTreeMap<String, Arc<dyn Middleware>> {
        self.middleware
            .as_ref()
            .map(|registry| registry.middlewares())
            .unwrap_or(&NO_MIDDLEWARES)
    }

    pub fn class_loader(&self) -> &dyn ClassLoader {
        self.class_loader.as_ref()
    }
}
