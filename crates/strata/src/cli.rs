use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

/// Strata: bootstrap and run a Strata project
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Simple ping command for testing
    #[arg(long)]
    pub ping: bool,

    /// Project root holding config/, src/ and tmp/
    #[arg(long, short = 'p', default_value = ".")]
    pub project: PathBuf,

    /// Override a configuration value after loading, e.g. `--set timezone=UTC`.
    /// The value is read as JSON and falls back to a plain string.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, Value)>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize and run the application (default)
    Run,
    /// Inspect the loaded configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// Inspect middleware packages
    Middleware {
        #[command(subcommand)]
        command: MiddlewareCommand,
    },
    /// Print the routes handed to the routing engine
    Routes,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the value stored under a dotted key
    Get {
        /// Dotted key, e.g. `i18n.locale`
        key: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiddlewareCommand {
    /// List known packages and whether they were activated
    List {},
}

/// Parse a `KEY=VALUE` override.
pub fn parse_override(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_override_values() {
        assert_eq!(parse_override("a.b=1").unwrap(), ("a.b".to_string(), json!(1)));
        assert_eq!(parse_override("flag=true").unwrap().1, json!(true));
        assert_eq!(parse_override("list=[\"x\"]").unwrap().1, json!(["x"]));
        assert_eq!(parse_override("timezone=Europe/Paris").unwrap().1, json!("Europe/Paris"));
        assert_eq!(parse_override("empty=").unwrap().1, json!(""));
    }

    #[test]
    fn test_parse_override_rejects_malformed_input() {
        assert!(parse_override("no-separator").is_err());
        assert!(parse_override("=value").is_err());
    }
}
