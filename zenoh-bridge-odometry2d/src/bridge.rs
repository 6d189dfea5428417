//! The odometry polling bridge.
//!
//! Same lifecycle as the battery bridge: configure binds the sink, attach
//! binds a source and starts the fixed-rate tick, detach stops and clears,
//! shutdown consumes. Tick failures are logged and skipped.

use std::sync::Arc;

use tracing::{debug, error};

use roslink_common::msg::{Odometry, Quaternion, Time};
use roslink_bridge_framework::{BridgeError, PollTask, Publisher, Result};

use crate::config::OdometryBridgeConfig;
use crate::source::{Odometry2DSource, OdometryReading};

/// Frame identifiers stamped onto every outbound message.
#[derive(Debug, Clone)]
pub struct Frames {
    /// Pose frame (`frame_id`).
    pub odom: String,
    /// Robot base frame (`child_frame_id`).
    pub base: String,
}

pub struct OdometryBridge {
    params: roslink_bridge_framework::BridgeParams,
    frames: Frames,
    publisher: Publisher,
    source: Option<Arc<dyn Odometry2DSource>>,
    poll: Option<PollTask>,
}

impl OdometryBridge {
    /// Validate the configuration and establish the publish sink.
    pub fn configure(
        config: &OdometryBridgeConfig,
        session: Arc<zenoh::Session>,
    ) -> Result<Self> {
        use roslink_bridge_framework::BridgeConfig;

        config.validate()?;
        let publisher = Publisher::new(
            session,
            &config.odometry.bridge.topic_name,
            config.serialization,
        )?;

        debug!(
            node = %config.odometry.bridge.node_name,
            topic = %config.odometry.bridge.topic_name,
            odom_frame = %config.odometry.odom_frame,
            base_frame = %config.odometry.base_frame,
            period = ?config.odometry.bridge.period(),
            "odometry bridge configured"
        );

        Ok(Self {
            params: config.odometry.bridge.clone(),
            frames: Frames {
                odom: config.odometry.odom_frame.clone(),
                base: config.odometry.base_frame.clone(),
            },
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
    pub fn attach(&mut self, source: Arc<dyn Odometry2DSource>) -> Result<()> {
        if self.source.is_some() {
            return Err(BridgeError::AlreadyAttached);
        }

        source
            .odometry()
            .map_err(|e| BridgeError::attach(e.to_string()))?;

        let publisher = self.publisher.clone();
        let frames = self.frames.clone();
        let tick_source = source.clone();
        self.source = Some(source);
        self.poll = Some(PollTask::spawn(self.params.period(), move || {
            let publisher = publisher.clone();
            let frames = frames.clone();
            let source = tick_source.clone();
            async move {
                tick(source.as_ref(), &frames, &publisher).await;
            }
        }));

        debug!(topic = %self.publisher.topic(), "odometry source attached, polling started");
        Ok(())
    }

    /// Stop the tick and clear the source binding. Idempotent.
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

/// One poll cycle: read the snapshot, stamp, map, publish.
async fn tick(source: &dyn Odometry2DSource, frames: &Frames, publisher: &Publisher) {
    let reading = match source.odometry() {
        Ok(reading) => reading,
        Err(e) => {
            error!(error = %e, "odometry read failed, skipping cycle");
            return;
        }
    };

    let msg = map_reading(&reading, frames, Time::now());
    if let Err(e) = publisher.publish(&msg).await {
        error!(error = %e, "odometry publish failed, skipping cycle");
    }
}

/// Map a source snapshot onto the outbound message.
///
/// The source is planar: position z, twist linear z and twist angular x/y
/// are fixed to zero, and the orientation quaternion is derived from the
/// heading alone. Source angles are degrees; the message carries radians.
pub fn map_reading(reading: &OdometryReading, frames: &Frames, stamp: Time) -> Odometry {
    let mut msg = Odometry::default();
    msg.header.stamp = stamp;
    msg.header.frame_id = frames.odom.clone();
    msg.child_frame_id = frames.base.clone();

    msg.pose.position.x = reading.odom_x;
    msg.pose.position.y = reading.odom_y;
    msg.pose.position.z = 0.0;
    msg.pose.orientation = Quaternion::from_yaw(reading.odom_theta.to_radians());

    msg.twist.linear.x = reading.base_vel_x;
    msg.twist.linear.y = reading.base_vel_y;
    msg.twist.linear.z = 0.0;
    msg.twist.angular.x = 0.0;
    msg.twist.angular.y = 0.0;
    msg.twist.angular.z = reading.base_vel_theta.to_radians();

    msg
}
