use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
    #[serde(default = "defaults::network")]
    pub network: Network,
    #[serde(default = "defaults::iterations")]
    pub iterations: usize,
    #[serde(default = "defaults::queue_capacity")]
    pub queue_capacity: usize,
    #[serde(default = "defaults::console_title")]
    pub console_title: String,
}

/// Which demonstration network the demo binary wires up.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    Numbers,
    Integrate,
    Squares,
    ReverseIntegrate,
    Fibonacci,
    /// producer → queue → prompt
    Queue,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("queue_capacity must be at least 1")]
    ZeroCapacity,
}

mod defaults {
    use super::Network;

    pub fn log_level() -> String {
        "info".into()
    }

    pub fn network() -> Network {
        Network::Squares
    }

    pub fn iterations() -> usize {
        10
    }

    pub fn queue_capacity() -> usize {
        4
    }

    pub fn console_title() -> String {
        "pnp".into()
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level(),
            network: defaults::network(),
            iterations: defaults::iterations(),
            queue_capacity: defaults::queue_capacity(),
            console_title: defaults::console_title(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path> + ToString) -> Result<Self, ConfigError> {
        let toml_to_str = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::parse(&toml_to_str)
    }

    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        let demo_config: DemoConfig = toml::from_str(toml_str)?;
        if demo_config.queue_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(demo_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(DemoConfig::parse("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let cfg = DemoConfig::parse(
            r#"
            log_level = "debug"
            network = "reverse_integrate"
            iterations = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.network, Network::ReverseIntegrate);
        assert_eq!(cfg.iterations, 3);
        assert_eq!(cfg.queue_capacity, 4);
    }

    #[test]
    fn unknown_network_is_a_parse_error() {
        let err = DemoConfig::parse(r#"network = "ring""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = DemoConfig::parse("queue_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DemoConfig::load("/nonexistent/pnp.toml").unwrap_err();
        assert_eq!(err.to_string(), "failed to read '/nonexistent/pnp.toml'");
    }
}
