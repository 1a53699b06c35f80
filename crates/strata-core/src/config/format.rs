/// Syntax of a project configuration source.
///
/// JSON is always available; YAML and TOML follow the `yaml-config` and
/// `toml-config` features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    #[cfg(feature = "yaml-config")]
    Yaml,
    #[cfg(feature = "toml-config")]
    Toml,
}

/// Recognized extensions, in lookup order.
const CANDIDATES: &[(&str, ConfigFormat)] = &[
    ("json", ConfigFormat::Json),
    #[cfg(feature = "yaml-config")]
    ("yaml", ConfigFormat::Yaml),
    #[cfg(feature = "yaml-config")]
    ("yml", ConfigFormat::Yaml),
    #[cfg(feature = "toml-config")]
    ("toml", ConfigFormat::Toml),
];

impl ConfigFormat {
    /// Name used in error reports.
    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            #[cfg(feature = "yaml-config")]
            ConfigFormat::Yaml => "yaml",
            #[cfg(feature = "toml-config")]
            ConfigFormat::Toml => "toml",
        }
    }

    /// Format for a file extension, ignoring case.
    pub fn for_extension(extension: &str) -> Option<Self> {
        CANDIDATES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(extension))
            .map(|(_, format)| *format)
    }

    /// `(extension, format)` pairs the loader tries, first match wins.
    pub fn candidates() -> impl Iterator<Item = (&'static str, ConfigFormat)> {
        CANDIDATES.iter().copied()
    }
}
