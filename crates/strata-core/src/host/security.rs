use std::fmt::{self, Debug};

use crate::config::ConfigStore;
use crate::kernel::error::Result;

/// Hardening applied as the last step of `run`.
pub trait SecurityMeasures: Debug + Send {
    fn add_measures(&mut self, config: &ConfigStore) -> Result<()>;
}

/// Named countermeasures the default [`Security`] knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Strip the framework and host versions from generated output
    HideVersion,
    /// Turn off the XML-RPC endpoint
    DisableXmlRpc,
    /// Forbid editing theme and plugin files from the admin screens
    DisableFileEdit,
}

impl Measure {
    pub const ALL: [Measure; 3] = [Measure::HideVersion, Measure::DisableXmlRpc, Measure::DisableFileEdit];

    pub fn name(&self) -> &'static str {
        match self {
            Measure::HideVersion => "hide-version",
            Measure::DisableXmlRpc => "disable-xmlrpc",
            Measure::DisableFileEdit => "disable-file-edit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Measure::ALL.into_iter().find(|measure| measure.name() == name)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default hardening: records which measures are in force.
///
/// Every known measure is applied unless listed under `security.disable`.
#[derive(Debug, Clone, Default)]
pub struct Security {
    applied: Vec<Measure>,
}

impl Security {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> &[Measure] {
        &self.applied
    }

    pub fn is_applied(&self, measure: Measure) -> bool {
        self.applied.contains(&measure)
    }
}

impl SecurityMeasures for Security {
    fn add_measures(&mut self, config: &ConfigStore) -> Result<()> {
        let disabled: Vec<String> = config.get_or("security.disable", Vec::new());
        for name in &disabled {
            if Measure::from_name(name).is_none() {
                log::warn!("Unknown security measure '{}' in security.disable", name);
            }
        }

        for measure in Measure::ALL {
            if disabled.iter().any(|name| name == measure.name()) {
                log::info!("Security measure '{}' disabled by configuration", measure);
                continue;
            }
            if !self.applied.contains(&measure) {
                self.applied.push(measure);
            }
            log::debug!("Applied security measure '{}'", measure);
        }
        Ok(())
    }
}
