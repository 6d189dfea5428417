//! Zenoh bridge for battery monitoring.

use anyhow::Result;
use roslink_bridge_framework::{BridgeArgs, BridgeConfig, BridgeRunner};

use zenoh_bridge_battery::bridge::BatteryBridge;
use zenoh_bridge_battery::config::BatteryBridgeConfig;
use zenoh_bridge_battery::source::open_subdevice;

#[tokio::main]
async fn main() -> Result<()> {
    let args = BridgeArgs::parse_with_default("battery.json5");

    let config = BatteryBridgeConfig::load(&args.config).map_err(|e| anyhow::anyhow!("{}", e))?;

    let runner = BridgeRunner::new_with_args("battery", config, Some(&args))
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut bridge = BatteryBridge::configure(runner.config(), runner.session())
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    // With a subdevice the bridge owns its source; otherwise it stays
    // configured and waits for a programmatic attach.
    if let Some(subdevice) = runner.config().battery.subdevice.clone() {
        let source = open_subdevice(&subdevice).map_err(|e| anyhow::anyhow!("{}", e))?;
        bridge.attach(source).map_err(|e| anyhow::anyhow!("{}", e))?;
    } else {
        tracing::warn!("no 'subdevice' configured; bridge idles until a source is attached");
    }

    let publisher = roslink_bridge_framework::Publisher::new(
        runner.session(),
        &runner.config().battery.topic_name,
        runner.config().serialization,
    )
    .map_err(|e| anyhow::anyhow!("{}", e))?;
    let runner = runner.with_status_publishing(publisher);

    let metadata = serde_json::json!({
        "topic": runner.config().battery.topic_name,
        "period_s": runner.config().battery.period().as_secs_f64(),
        "subdevice": runner.config().battery.subdevice,
    });

    runner.wait_for_shutdown(Some(metadata)).await;

    bridge.shutdown().await;
    runner.close().await.map_err(|e| anyhow::anyhow!("{}", e))
}
