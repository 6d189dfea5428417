//! Configuration traits and the common bridge parameter block.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use roslink_common::{LoggingConfig, ZenohConfig, validate_node_name, validate_topic_name};

use crate::error::{BridgeError, Result};

/// Default poll period in seconds (20 ms).
pub const DEFAULT_PERIOD_S: f64 = 0.02;

/// Parameters common to every polling bridge.
///
/// This is the per-bridge configuration block the original network wrapper
/// devices expose: identity of the publishing endpoint, destination topic,
/// poll period, and an optional internally owned source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeParams {
    /// Identifies the publishing endpoint. Must not begin with '/'.
    pub node_name: String,

    /// Destination channel. Must begin with '/'.
    pub topic_name: String,

    /// Poll period in seconds. Defaults to 20 ms when absent.
    #[serde(default)]
    pub period: Option<f64>,

    /// If present, the bridge constructs and owns a source of this type.
    #[serde(default)]
    pub subdevice: Option<String>,
}

impl BridgeParams {
    /// Validate node/topic names and the period.
    ///
    /// A missing period is accepted with a warning; a present but
    /// non-positive or non-finite one is a validation error.
    pub fn validate(&self) -> Result<()> {
        validate_node_name(&self.node_name)?;
        validate_topic_name(&self.topic_name)?;

        match self.period {
            None => {
                tracing::warn!(
                    default_s = DEFAULT_PERIOD_S,
                    "missing 'period' parameter, using default"
                );
            }
            Some(p) if !p.is_finite() || p <= 0.0 => {
                return Err(BridgeError::validation(format!(
                    "period must be a positive number of seconds, got {}",
                    p
                )));
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// The effective poll period.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.period.unwrap_or(DEFAULT_PERIOD_S))
    }
}

/// Trait for bridge configuration types.
///
/// Implement this trait for a bridge's configuration struct to get
/// automatic loading, validation, and access to common config fields.
pub trait BridgeConfig: Sized + DeserializeOwned {
    /// Get the Zenoh configuration.
    fn zenoh(&self) -> &ZenohConfig;

    /// Get the logging configuration.
    fn logging(&self) -> &LoggingConfig;

    /// Get the common bridge parameters.
    fn params(&self) -> &BridgeParams;

    /// Validate the configuration.
    ///
    /// Called automatically after loading. The default implementation
    /// validates the common parameter block; override to add
    /// bridge-specific checks (and call the default).
    fn validate(&self) -> Result<()> {
        self.params().validate()
    }

    /// Load configuration from a JSON5 file path.
    ///
    /// Calls [`validate`](Self::validate) after parsing.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BridgeError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = json5::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }
}
