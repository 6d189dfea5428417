//! The battery polling bridge.
//!
//! Lifecycle: `configure` validates parameters and binds the publish sink,
//! `attach` binds a source and starts the fixed-rate tick, `detach` stops
//! the tick and clears the source (idempotent, re-attach allowed),
//! `shutdown` consumes the bridge. Ticks never overlap and every failure
//! during a tick is logged and skipped; the next tick is the retry.

use std::sync::Arc;

use tracing::{debug, error, trace};

use roslink_common::msg::{BatteryState, Time, power_supply};
use roslink_bridge_framework::{BridgeError, PollTask, Publisher, Result};

use crate::config::BatteryBridgeConfig;
use crate::source::{BatteryReading, BatterySource, read_all};

pub struct BatteryBridge {
    params: roslink_bridge_framework::BridgeParams,
    publisher: Publisher,
    source: Option<Arc<dyn BatterySource>>,
    poll: Option<PollTask>,
}

impl BatteryBridge {
    /// Validate the configuration and establish the publish sink.
    pub fn configure(
        config: &BatteryBridgeConfig,
        session: Arc<zenoh::Session>,
    ) -> Result<Self> {
        use roslink_bridge_framework::BridgeConfig;

        config.validate()?;
        let publisher = Publisher::new(session, &config.battery.topic_name, config.serialization)?;

        debug!(
            node = %config.battery.node_name,
            topic = %config.battery.topic_name,
            period = ?config.battery.period(),
            "battery bridge configured"
        );

        Ok(Self {
            params: config.battery.clone(),
            publisher,
            source: None,
            poll: None,
        })
    }

    /// Whether the periodic tick is currently running.
    pub fn is_running(&self) -> bool {
        self.poll.as_ref().is_some_and(PollTask::is_running)
    }

    /// The topic this bridge publishes on.
    pub fn topic(&self) -> &str {
        self.publisher.topic()
    }

    /// Bind a source and start ticking at the configured period.
    ///
    /// Fails if a source is already attached or if the source cannot be
    /// read; a failed attach leaves the bridge in its configured state.
    pub fn attach(&mut self, source: Arc<dyn BatterySource>) -> Result<()> {
        if self.source.is_some() {
            return Err(BridgeError::AlreadyAttached);
        }

        // Probe once so an invalid source fails the attach call instead of
        // producing an error on every tick.
        read_all(source.as_ref()).map_err(|e| BridgeError::attach(e.to_string()))?;

        let publisher = self.publisher.clone();
        let tick_source = source.clone();
        self.source = Some(source);
        self.poll = Some(PollTask::spawn(self.params.period(), move || {
            let publisher = publisher.clone();
            let source = tick_source.clone();
            async move {
                tick(source.as_ref(), &publisher).await;
            }
        }));

        debug!(topic = %self.publisher.topic(), "battery source attached, polling started");
        Ok(())
    }

    /// Stop the tick and clear the source binding.
    ///
    /// Waits for any in-flight tick to finish before the source is
    /// dropped. Safe to call when not attached.
    pub async fn detach(&mut self) {
        if let Some(poll) = self.poll.take() {
            poll.stop().await;
        }
        self.source = None;
    }

    /// Stop ticking, detach, and release the sink.
    pub async fn shutdown(mut self) {
        self.detach().await;
    }
}

/// One poll cycle: read all fields, stamp, map, publish.
async fn tick(source: &dyn BatterySource, publisher: &Publisher) {
    let reading = match read_all(source) {
        Ok(reading) => reading,
        Err(e) => {
            error!(error = %e, "battery read failed, skipping cycle");
            return;
        }
    };

    trace!(status = ?reading.status, info = %reading.info, "battery snapshot");

    let msg = map_reading(&reading, Time::now());
    if let Err(e) = publisher.publish(&msg).await {
        error!(error = %e, "battery publish failed, skipping cycle");
    }
}

/// Map a source snapshot onto the outbound message.
///
/// The source reports state of charge as a percentage, which lands in
/// `percentage`. `charge`, `capacity` and `design_capacity` are ampere-hour
/// quantities the source interface does not provide; they are published as
/// NaN placeholders, matching the upstream wrapper. Power supply
/// status/health/technology are likewise not carried by the interface and
/// are reported as unknown.
pub fn map_reading(reading: &BatteryReading, stamp: Time) -> BatteryState {
    let mut msg = BatteryState::default();
    msg.header.stamp = stamp;

    msg.voltage = reading.voltage as f32;
    msg.current = reading.current as f32;
    msg.temperature = reading.temperature as f32;
    msg.percentage = reading.charge as f32;

    msg.charge = f32::NAN;
    msg.capacity = f32::NAN;
    msg.design_capacity = f32::NAN;

    msg.power_supply_status = power_supply::STATUS_UNKNOWN;
    msg.power_supply_health = power_supply::HEALTH_UNKNOWN;
    msg.power_supply_technology = power_supply::TECHNOLOGY_UNKNOWN;
    msg.present = true;

    msg
}
