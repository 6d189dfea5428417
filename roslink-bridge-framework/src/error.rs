//! Error types for the bridge framework.

use thiserror::Error;

/// Result type alias using [`BridgeError`].
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Errors that can occur in a bridge.
///
/// Lifecycle calls (`configure`, `attach`, `detach`, `shutdown`) surface
/// these as `Result`s; steady-state tick failures are logged instead and
/// never escalate past the current cycle.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Configuration parse error.
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration validation error.
    #[error("Configuration validation failed: {0}")]
    ConfigValidation(String),

    /// Invalid or absent source passed to attach.
    #[error("Attach failed: {0}")]
    Attach(String),

    /// Attach called while a source is already bound.
    #[error("A source is already attached; detach first")]
    AlreadyAttached,

    /// Unknown subdevice type requested in configuration.
    #[error("Unknown subdevice type: {0}")]
    Subdevice(String),

    /// Zenoh connection error.
    #[error("Zenoh connection error: {0}")]
    ZenohConnection(String),

    /// Zenoh session error.
    #[error("Zenoh session error: {0}")]
    ZenohSession(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Publishing error.
    #[error("Failed to publish to {key}: {message}")]
    Publish { key: String, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a configuration validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ConfigValidation(msg.into())
    }

    /// Create an attach error.
    pub fn attach(msg: impl Into<String>) -> Self {
        Self::Attach(msg.into())
    }
}

impl From<zenoh::Error> for BridgeError {
    fn from(err: zenoh::Error) -> Self {
        Self::ZenohSession(err.to_string())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<json5::Error> for BridgeError {
    fn from(err: json5::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

impl From<roslink_common::Error> for BridgeError {
    fn from(err: roslink_common::Error) -> Self {
        use roslink_common::Error as E;
        match err {
            E::Config(msg) => Self::Config(msg),
            E::Topic(msg) | E::Node(msg) => Self::ConfigValidation(msg),
            E::Json(e) => Self::Serialization(e.to_string()),
            E::Cbor(msg) => Self::Serialization(msg),
            E::Zenoh(e) => Self::ZenohSession(e.to_string()),
            E::Io(e) => Self::Io(e),
        }
    }
}
