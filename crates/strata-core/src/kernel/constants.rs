/// Application name
pub const APP_NAME: &str = "Strata";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory holding the project configuration source
pub const CONFIG_DIR_NAME: &str = "config";

/// File stem of the project configuration source (`config/strata.json`, ...)
pub const CONFIG_FILE_STEM: &str = "strata";

/// Directory holding the application's own sources
pub const SRC_DIR_NAME: &str = "src";

/// Project temporary directory
pub const TMP_DIR_NAME: &str = "tmp";

/// Name of the process id file inside the temporary directory
pub const PID_FILE_NAME: &str = "pid";

/// Installed packages manifest, relative to the project root
pub const INSTALLED_MANIFEST: &str = "vendor/installed.json";

/// Namespace the application's sources are registered under
pub const PROJECT_NAMESPACE: &str = "App";

/// Packages declaring a namespace below this prefix are middleware candidates
pub const MIDDLEWARE_NAMESPACE: &str = "Strata\\Middleware\\";

/// Timezone applied when the configuration does not name one
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// Locale used when the configuration does not name one
pub const DEFAULT_LOCALE: &str = "en_US";

/// Context attached to log lines that do not name one
pub const DEFAULT_LOG_CONTEXT: &str = "[Strata]";

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "STRATA_LOG";

/// Default log filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration key holding the route descriptors
pub const KEY_ROUTES: &str = "routes";

/// Configuration key holding the custom post type declarations
pub const KEY_CUSTOM_POST_TYPES: &str = "custom-post-types";

/// Configuration key holding the timezone identifier
pub const KEY_TIMEZONE: &str = "timezone";
