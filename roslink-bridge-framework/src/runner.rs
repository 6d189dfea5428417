//! Bridge runner for process lifecycle management.
//!
//! The runner owns what sits outside the bridge state machine: logging
//! initialization, the Zenoh session, status announcements, and the
//! shutdown signal. The bridge itself (configure/attach/detach/shutdown)
//! stays in the per-sensor crates.

use std::sync::Arc;

use tokio::signal;

use roslink_common::{LoggingConfig, init_tracing};

use crate::BridgeArgs;
use crate::config::BridgeConfig;
use crate::error::{BridgeError, Result};
use crate::publisher::Publisher;
use crate::status::{BridgeState, StatusPublisher};

/// Process-level harness for a sensor bridge.
pub struct BridgeRunner<C: BridgeConfig> {
    /// Bridge name for logging and status.
    name: String,
    /// Bridge version.
    version: String,
    /// The loaded configuration.
    config: C,
    /// Zenoh session shared with the bridge's publisher.
    session: Arc<zenoh::Session>,
    /// Status publisher (optional).
    status_publisher: Option<StatusPublisher>,
}

impl<C: BridgeConfig> BridgeRunner<C> {
    /// Create a new bridge runner.
    ///
    /// This will:
    /// 1. Initialize logging based on config (with optional CLI override)
    /// 2. Connect to Zenoh
    pub async fn new(name: impl Into<String>, config: C) -> Result<Self> {
        Self::new_with_args(name, config, None).await
    }

    /// Create a new bridge runner with CLI args for log level override.
    pub async fn new_with_args(
        name: impl Into<String>,
        config: C,
        args: Option<&BridgeArgs>,
    ) -> Result<Self> {
        let name = name.into();
        let version = env!("CARGO_PKG_VERSION").to_string();

        let log_config = match args.and_then(|a| a.log_level.clone()) {
            Some(level) => LoggingConfig {
                level,
                ..config.logging().clone()
            },
            None => config.logging().clone(),
        };

        init_tracing(&log_config).map_err(|e| BridgeError::config(e.to_string()))?;

        tracing::info!(bridge = %name, version = %version, "Starting bridge");

        let zenoh_config = config
            .zenoh()
            .build()
            .map_err(|e| BridgeError::ZenohConnection(e.to_string()))?;

        tracing::info!(mode = %config.zenoh().mode, "Connecting to Zenoh");
        let session = Arc::new(
            zenoh::open(zenoh_config)
                .await
                .map_err(|e| BridgeError::ZenohConnection(e.to_string()))?,
        );
        tracing::info!(zid = %session.zid(), "Connected to Zenoh");

        Ok(Self {
            name,
            version,
            config,
            session,
            status_publisher: None,
        })
    }

    /// Enable status publishing next to the given topic publisher.
    ///
    /// When enabled, the runner announces "running" when waiting starts
    /// and "offline" on shutdown.
    pub fn with_status_publishing(mut self, publisher: Publisher) -> Self {
        self.status_publisher = Some(StatusPublisher::new(
            publisher,
            &self.name,
            &self.version,
        ));
        self
    }

    /// Get the bridge name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the bridge version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Get a clone of the Zenoh session handle.
    pub fn session(&self) -> Arc<zenoh::Session> {
        self.session.clone()
    }

    /// Block until Ctrl+C, announcing status around the wait.
    pub async fn wait_for_shutdown(&self, metadata: Option<serde_json::Value>) {
        if let Some(ref status_pub) = self.status_publisher {
            if let Err(e) = status_pub.announce(BridgeState::Running, metadata).await {
                tracing::warn!(error = %e, "Failed to announce running state");
            }
        }

        tracing::info!(bridge = %self.name, "Bridge running. Press Ctrl+C to stop.");

        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }

        tracing::info!(bridge = %self.name, "Received shutdown signal");
    }

    /// Publish the offline status and close the Zenoh session.
    ///
    /// Call after the bridge itself has been shut down.
    pub async fn close(self) -> Result<()> {
        if let Some(ref status_pub) = self.status_publisher {
            if let Err(e) = status_pub.announce(BridgeState::Offline, None).await {
                tracing::warn!(error = %e, "Failed to announce offline state");
            }
        }

        if let Err(e) = self.session.close().await {
            tracing::warn!(error = %e, "Error closing Zenoh session");
        }

        tracing::info!(bridge = %self.name, "Goodbye!");

        Ok(())
    }
}
