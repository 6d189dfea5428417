//! Configuration for the battery bridge.

use serde::{Deserialize, Serialize};

use roslink_common::{Format, LoggingConfig, ZenohConfig};
use roslink_bridge_framework::{BridgeConfig, BridgeParams};

/// Complete bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryBridgeConfig {
    /// Zenoh connection settings.
    #[serde(default)]
    pub zenoh: ZenohConfig,

    /// Bridge parameters (node name, topic, period, subdevice).
    pub battery: BridgeParams,

    /// Wire encoding. Defaults to CBOR: the message carries NaN
    /// placeholders, which JSON cannot represent.
    #[serde(default = "default_format")]
    pub serialization: Format,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_format() -> Format {
    Format::Cbor
}

impl BridgeConfig for BatteryBridgeConfig {
    fn zenoh(&self) -> &ZenohConfig {
        &self.zenoh
    }

    fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    fn params(&self) -> &BridgeParams {
        &self.battery
    }
}
