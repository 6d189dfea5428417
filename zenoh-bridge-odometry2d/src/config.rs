//! Configuration for the odometry bridge.

use serde::{Deserialize, Serialize};

use roslink_common::{Format, LoggingConfig, ZenohConfig};
use roslink_bridge_framework::{BridgeConfig, BridgeError, BridgeParams, Result};

/// Bridge parameters plus the two frame identifiers odometry messages
/// carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdometryParams {
    #[serde(flatten)]
    pub bridge: BridgeParams,

    /// Frame the pose is expressed in (message `frame_id`).
    pub odom_frame: String,

    /// Robot base frame (message `child_frame_id`).
    pub base_frame: String,
}

/// Complete bridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdometryBridgeConfig {
    /// Zenoh connection settings.
    #[serde(default)]
    pub zenoh: ZenohConfig,

    /// Bridge parameters (node name, topic, period, subdevice, frames).
    pub odometry: OdometryParams,

    /// Wire encoding for published messages.
    #[serde(default)]
    pub serialization: Format,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl BridgeConfig for OdometryBridgeConfig {
    fn zenoh(&self) -> &ZenohConfig {
        &self.zenoh
    }

    fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    fn params(&self) -> &BridgeParams {
        &self.odometry.bridge
    }

    fn validate(&self) -> Result<()> {
        self.odometry.bridge.validate()?;

        if self.odometry.odom_frame.is_empty() {
            return Err(BridgeError::validation("odom_frame must not be empty"));
        }
        if self.odometry.base_frame.is_empty() {
            return Err(BridgeError::validation("base_frame must not be empty"));
        }

        Ok(())
    }
}
