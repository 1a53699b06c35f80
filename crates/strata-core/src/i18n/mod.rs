//! # Strata Core Localization
//!
//! Localization bootstrap run during `init`. Reads `i18n.locale` and
//! `i18n.locales` and validates them; message catalogs themselves are the
//! host's business.
use crate::config::ConfigStore;
use crate::kernel::constants;
use crate::kernel::error::{Error, KernelLifecyclePhase, Result};

/// Active locale and the locales the project declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18n {
    locale: String,
    locales: Vec<String>,
    initialized: bool,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            locale: constants::DEFAULT_LOCALE.to_string(),
            locales: vec![constants::DEFAULT_LOCALE.to_string()],
            initialized: false,
        }
    }

    /// Read and validate the locale settings.
    ///
    /// Every code must look like `ll` or `ll_CC`, and the active locale must
    /// be one of the declared locales.
    pub fn initialize(&mut self, config: &ConfigStore) -> Result<()> {
        let locale = match config.get("i18n.locale") {
            None | Some(serde_json::Value::Null) => constants::DEFAULT_LOCALE.to_string(),
            Some(value) => value.as_str().map(str::to_string).ok_or_else(|| {
                Error::lifecycle(
                    KernelLifecyclePhase::Localization,
                    format!("'i18n.locale' must be a string, found {}", value),
                )
            })?,
        };

        let locales = match config.get("i18n.locales") {
            None | Some(serde_json::Value::Null) => vec![locale.clone()],
            Some(_) => config.get_as::<Vec<String>>("i18n.locales").ok_or_else(|| {
                Error::lifecycle(
                    KernelLifecyclePhase::Localization,
                    "'i18n.locales' must be a list of locale codes",
                )
            })?,
        };

        if let Some(invalid) = std::iter::once(&locale).chain(locales.iter()).find(|code| !is_valid_locale(code)) {
            return Err(Error::lifecycle(
                KernelLifecyclePhase::Localization,
                format!("Invalid locale code '{}'", invalid),
            ));
        }

        if !locales.contains(&locale) {
            return Err(Error::lifecycle(
                KernelLifecyclePhase::Localization,
                format!("Active locale '{}' is not among the declared locales {:?}", locale, locales),
            ));
        }

        log::debug!("Localization ready with locale '{}'", locale);
        self.locale = locale;
        self.locales = locales;
        self.initialized = true;
        Ok(())
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

/// `ll` or `ll_CC`: two lowercase letters, optionally an underscore and two uppercase letters.
pub fn is_valid_locale(code: &str) -> bool {
    let (language, region) = match code.split_once('_') {
        Some((language, region)) => (language, Some(region)),
        None => (code, None),
    };
    let language_ok = language.len() == 2 && language.chars().all(|c| c.is_ascii_lowercase());
    let region_ok = region.is_none_or(|region| region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()));
    language_ok && region_ok
}
