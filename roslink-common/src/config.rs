//! Connection and logging settings shared by every bridge.
//!
//! Bridges load their full configuration through their own config types;
//! this module only holds the two blocks all of them embed.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Zenoh connection settings, pared down to what the bridges use: the
/// session mode and the two endpoint lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZenohConfig {
    /// Zenoh mode: "client", "peer", or "router".
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Endpoints to connect to (for client mode).
    #[serde(default)]
    pub connect: Vec<String>,

    /// Endpoints to listen on (for peer/router mode).
    #[serde(default)]
    pub listen: Vec<String>,
}

fn default_mode() -> String {
    "peer".to_string()
}

impl Default for ZenohConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            connect: Vec::new(),
            listen: Vec::new(),
        }
    }
}

impl ZenohConfig {
    /// Build the zenoh session configuration.
    ///
    /// Everything not covered by these settings keeps the zenoh defaults.
    pub fn build(&self) -> Result<zenoh::Config> {
        match self.mode.as_str() {
            "client" | "peer" | "router" => {}
            other => {
                return Err(Error::Config(format!(
                    "invalid zenoh mode '{}', expected 'client', 'peer', or 'router'",
                    other
                )));
            }
        }

        let mut config = zenoh::Config::default();
        config
            .insert_json5("mode", &format!("\"{}\"", self.mode))
            .map_err(|e| Error::Config(format!("failed to set zenoh mode: {}", e)))?;

        if !self.connect.is_empty() {
            let endpoints = serde_json::to_string(&self.connect)?;
            config
                .insert_json5("connect/endpoints", &endpoints)
                .map_err(|e| Error::Config(format!("failed to set connect endpoints: {}", e)))?;
        }

        if !self.listen.is_empty() {
            let endpoints = serde_json::to_string(&self.listen)?;
            config
                .insert_json5("listen/endpoints", &endpoints)
                .map_err(|e| Error::Config(format!("failed to set listen endpoints: {}", e)))?;
        }

        Ok(config)
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zenoh_defaults() {
        let config: ZenohConfig = json5::from_str("{}").unwrap();
        assert_eq!(config.mode, "peer");
        assert!(config.connect.is_empty());
        assert!(config.listen.is_empty());
    }

    #[test]
    fn test_zenoh_parse() {
        let config: ZenohConfig = json5::from_str(
            r#"{ mode: "client", connect: ["tcp/localhost:7447"] }"#,
        )
        .unwrap();
        assert_eq!(config.mode, "client");
        assert_eq!(config.connect, vec!["tcp/localhost:7447"]);
    }

    #[test]
    fn test_build_accepts_known_modes() {
        for mode in ["client", "peer", "router"] {
            let config = ZenohConfig {
                mode: mode.to_string(),
                ..Default::default()
            };
            assert!(config.build().is_ok(), "mode '{mode}' must build");
        }
    }

    #[test]
    fn test_build_rejects_unknown_mode() {
        let config = ZenohConfig {
            mode: "mesh".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(Error::Config(_))));
    }

    #[test]
    fn test_build_with_endpoints() {
        let config = ZenohConfig {
            mode: "client".to_string(),
            connect: vec!["tcp/localhost:7447".to_string()],
            listen: vec!["tcp/0.0.0.0:7448".to_string()],
        };
        assert!(config.build().is_ok());
    }

    #[test]
    fn test_logging_defaults() {
        let config: LoggingConfig = json5::from_str("{}").unwrap();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Text);
    }
}
