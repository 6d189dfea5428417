//! Bridge status announcements.
//!
//! Each bridge announces its lifecycle state on `{key}/@/status`, next to
//! the key it publishes messages on. Announcements are always JSON so they
//! can be inspected without knowing the bridge's payload encoding.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::publisher::Publisher;

/// Lifecycle state carried by a status announcement.
///
/// Mirrors the bridge state machine: a bridge is configured once its sink
/// is bound, running while a source is attached and ticking, and detached
/// in between. `Offline` is the terminal announcement on shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BridgeState {
    /// Sink bound, no source attached yet.
    Configured,
    /// Source attached, tick running.
    Running,
    /// Source detached; the bridge can re-attach.
    Detached,
    /// Process shutting down.
    Offline,
    /// A lifecycle call failed.
    Error,
}

/// One status announcement as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeStatus {
    /// Bridge name (e.g., "battery", "odometry2d").
    pub bridge: String,
    /// Bridge version.
    pub version: String,
    /// Lifecycle state.
    pub state: BridgeState,
    /// Failure cause, only present for [`BridgeState::Error`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Bridge-specific metadata (topic, period, frames, ...).
    #[serde(flatten)]
    pub metadata: serde_json::Value,
}

/// Publishes lifecycle announcements for one bridge.
pub struct StatusPublisher {
    publisher: Publisher,
    bridge_name: String,
    version: String,
}

impl StatusPublisher {
    pub fn new(
        publisher: Publisher,
        bridge_name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            publisher,
            bridge_name: bridge_name.into(),
            version: version.into(),
        }
    }

    /// The key announcements are published on: `{key}/@/status`.
    pub fn status_key(&self) -> String {
        format!("{}/@/status", self.publisher.key())
    }

    /// Announce a lifecycle state, with optional bridge-specific metadata.
    pub async fn announce(
        &self,
        state: BridgeState,
        metadata: Option<serde_json::Value>,
    ) -> Result<()> {
        let status = BridgeStatus {
            bridge: self.bridge_name.clone(),
            version: self.version.clone(),
            state,
            detail: None,
            metadata: metadata.unwrap_or_else(|| serde_json::json!({})),
        };
        self.publisher.publish_json(&self.status_key(), &status).await
    }

    /// Announce a lifecycle failure with its cause.
    pub async fn announce_error(&self, detail: impl Into<String>) -> Result<()> {
        let status = BridgeStatus {
            bridge: self.bridge_name.clone(),
            version: self.version.clone(),
            state: BridgeState::Error,
            detail: Some(detail.into()),
            metadata: serde_json::json!({}),
        };
        self.publisher.publish_json(&self.status_key(), &status).await
    }
}
