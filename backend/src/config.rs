//! Runtime settings for the link service, read from `LINKS_*` environment
//! variables.

use std::env;
use std::path::PathBuf;

/// Environment variable names.
const HOST_VAR: &str = "LINKS_HOST";
const PORT_VAR: &str = "LINKS_PORT";
const SEED_VAR: &str = "LINKS_SEED";
const OPEN_BROWSER_VAR: &str = "LINKS_OPEN_BROWSER";

const DEFAULT_HOST: &str = "127.0.0.1";
/// Same port the client historically pointed at.
const DEFAULT_PORT: u16 = 3000;
const JSON_LIMIT: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be a boolean, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
    #[error("cannot read seed file {}: {source}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file {} is not a link collection: {source}", path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// JSON file with the initial collection.
    pub seed: Option<PathBuf>,
    /// Open the served client in the default browser on startup.
    pub open_browser: bool,
    /// Largest accepted JSON body, in bytes.
    pub json_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
            open_browser: false,
            json_limit: JSON_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source; unset or blank values
    /// fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Config::default();

        if let Some(host) = read(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = read(PORT_VAR) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port.clone(),
            })?;
        }
        config.seed = read(SEED_VAR).map(PathBuf::from);
        if let Some(flag) = read(OPEN_BROWSER_VAR) {
            config.open_browser = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidFlag {
                var: OPEN_BROWSER_VAR,
                value: flag.clone(),
            })?;
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LINKS_HOST", "0.0.0.0"),
            ("LINKS_PORT", " 8080 "),
            ("LINKS_SEED", "db.json"),
            ("LINKS_OPEN_BROWSER", "Yes"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.seed, Some(PathBuf::from("db.json")));
        assert!(config.open_browser);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[("LINKS_PORT", ""), ("LINKS_SEED", "  ")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[("LINKS_PORT", "70000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));

        let err = Config::from_lookup(lookup(&[("LINKS_OPEN_BROWSER", "maybe")])).unwrap_err();
        assert_eq!(err.to_string(), "LINKS_OPEN_BROWSER must be a boolean, got \"maybe\"");
    }
}
