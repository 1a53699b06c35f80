use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::error::ConfigError;
use crate::config::format::ConfigFormat;
use crate::config::store::ConfigMap;
use crate::kernel::constants;

/// Find the project configuration source inside `config_dir`.
///
/// Candidates are probed in [`ConfigFormat::candidates`] order and the
/// first existing file wins.
pub fn locate(config_dir: &Path) -> Result<(PathBuf, ConfigFormat), ConfigError> {
    for (extension, format) in ConfigFormat::candidates() {
        let candidate = config_dir.join(format!("{}.{}", constants::CONFIG_FILE_STEM, extension));
        if candidate.is_file() {
            return Ok((candidate, format));
        }
    }

    Err(ConfigError::NotFound {
        dir: config_dir.to_path_buf(),
        stem: constants::CONFIG_FILE_STEM.to_string(),
    })
}

/// Locate, read and parse the project configuration source.
///
/// The returned values are raw: dotted keys have not been expanded yet.
pub fn load_project_config(config_dir: &Path) -> Result<ConfigMap, ConfigError> {
    let (path, format) = locate(config_dir)?;
    log::debug!("Loading project configuration from {}", path.display());

    let content = fs::read_to_string(&path)
        .map_err(|e| ConfigError::io(e, "read_to_string", path.clone()))?;

    parse(&content, format, &path)
}

/// Parse `content` as `format`. `path` is only used for error reporting.
///
/// An empty document yields an empty mapping; any other non-mapping document
/// is rejected.
pub fn parse(content: &str, format: ConfigFormat, path: &Path) -> Result<ConfigMap, ConfigError> {
    let parse_error = |source: Box<dyn std::error::Error + Send + Sync>| ConfigError::Parse {
        path: path.to_path_buf(),
        format: format.name().to_string(),
        source,
    };

    let value: Value = match format {
        ConfigFormat::Json => {
            if content.trim().is_empty() {
                Value::Null
            } else {
                serde_json::from_str(content).map_err(|e| parse_error(Box::new(e)))?
            }
        }
        #[cfg(feature = "yaml-config")]
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(Box::new(e)))?
        }
        #[cfg(feature = "toml-config")]
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| parse_error(Box::new(e)))?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(ConfigMap::new()),
        _ => Err(ConfigError::NotAMapping(path.to_path_buf())),
    }
}
