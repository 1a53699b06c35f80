use chrono_tz::Tz;
use serde_json::Value;

use crate::config::ConfigStore;
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};

/// Resolve the process timezone from the `timezone` key.
///
/// An absent or null value falls back to [`constants::DEFAULT_TIMEZONE`].
/// Anything else must be a known IANA zone identifier.
pub fn resolve_timezone(config: &ConfigStore) -> Result<Tz> {
    let name = match config.get(constants::KEY_TIMEZONE) {
        None | Some(Value::Null) => constants::DEFAULT_TIMEZONE,
        Some(Value::String(name)) => name.as_str(),
        Some(other) => {
            return Err(Error::lifecycle(
                KernelLifecyclePhase::Timezone,
                format!("'{}' must be a zone identifier, found {}", constants::KEY_TIMEZONE, other),
            ));
        }
    };

    name.trim().parse::<Tz>().map_err(|e| {
        Error::lifecycle(
            KernelLifecyclePhase::Timezone,
            format!("Unknown timezone '{}': {}", name, e),
        )
    })
}
