//! Zenoh bridge for planar odometry.

use anyhow::Result;
use roslink_bridge_framework::{BridgeArgs, BridgeConfig, BridgeRunner};

use zenoh_bridge_odometry2d::bridge::OdometryBridge;
use zenoh_bridge_odometry2d::config::OdometryBridgeConfig;
use zenoh_bridge_odometry2d::source::open_subdevice;

#[tokio::main]
async fn main() -> Result<()> {
    let args = BridgeArgs::parse_with_default("odometry2d.json5");

    let config = OdometryBridgeConfig::load(&args.config).map_err(|e| anyhow::anyhow!("{}", e))?;

    let runner = BridgeRunner::new_with_args("odometry2d", config, Some(&args))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut bridge = OdometryBridge::configure(runner.config(), runner.session())
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // With a subdevice the bridge owns its source; otherwise it stays
    // configured and waits for a programmatic attach.
    if let Some(subdevice) = runner.config().odometry.bridge.subdevice.clone() {
        let source = open_subdevice(&subdevice).map_err(|e| anyhow::anyhow!("{}", e))?;
        bridge.attach(source).map_err(|e| anyhow::anyhow!("{}", e))?;
    } else {
        tracing::warn!("no 'subdevice' configured; bridge idles until a source is attached");
    }

    let publisher = roslink_bridge_framework::Publisher::new(
        runner.session(),
        &runner.config().odometry.bridge.topic_name,
        runner.config().serialization,
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    let runner = runner.with_status_publishing(publisher);

    let metadata = serde_json::json!({
        "topic": runner.config().odometry.bridge.topic_name,
        "period_s": runner.config().odometry.bridge.period().as_secs_f64(),
        "odom_frame": runner.config().odometry.odom_frame,
        "base_frame": runner.config().odometry.base_frame,
        "subdevice": runner.config().odometry.bridge.subdevice,
    });

    runner.wait_for_shutdown(Some(metadata)).await;

    bridge.shutdown().await;
    runner.close().await.map_err(|e| anyhow::anyhow!("{}", e))
}
