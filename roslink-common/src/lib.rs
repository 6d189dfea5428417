//! roslink Common Library
//!
//! Shared types and utilities for roslink sensor bridges:
//!
//! - [`msg`] - ROS2-shaped message types (`BatteryState`, `Odometry`, `Time`)
//! - [`serialization`] - JSON/CBOR encoding and decoding
//! - [`config`] - Zenoh connection and logging settings
//! - [`topic`] - Topic/node name validation and key mapping
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod msg;
pub mod serialization;
pub mod topic;

// Re-export commonly used types at the crate root
pub use config::{LogFormat, LoggingConfig, ZenohConfig};
pub use error::{Error, Result};
pub use msg::{BatteryState, Header, Odometry, Point, Pose, Quaternion, Time, Twist, Vector3};
pub use serialization::{Format, decode, decode_auto, encode};
pub use topic::{topic_to_key, validate_node_name, validate_topic_name};

/// Initialize tracing with the given configuration.
///
/// Supports two output formats:
/// - `LogFormat::Text` (default): Human-readable text format
/// - `LogFormat::Json`: Structured JSON format for log aggregation systems
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
