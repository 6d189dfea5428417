//! End-to-end lifecycle tests for the odometry bridge.
//!
//! Uses an in-process Zenoh peer session for both the bridge and the test
//! subscriber. Each test uses a unique topic to avoid interference.

use std::sync::Arc;
use std::time::Duration;

use roslink_common::decode_auto;
use roslink_common::msg::Odometry;

use zenoh_bridge_odometry2d::bridge::OdometryBridge;
use zenoh_bridge_odometry2d::config::OdometryBridgeConfig;
use zenoh_bridge_odometry2d::source::FakeOdometry;

fn unique_topic() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("/test_odom_{}", nanos)
}

fn test_config(topic: &str, period: f64) -> OdometryBridgeConfig {
    let json = format!(
        r#"{{
            odometry: {{
                node_name: "odom_test_node",
                topic_name: "{}",
                period: {},
                odom_frame: "odom",
                base_frame: "base_link",
            }}
        }}"#,
        topic, period
    );
    json5::from_str(&json).expect("Failed to parse test config")
}

async fn open_session() -> Arc<zenoh::Session> {
    let config = zenoh::Config::default();
    Arc::new(
        zenoh::open(config)
            .await
            .expect("Failed to open Zenoh session"),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_attach_publishes_odometry() {
    let topic = unique_topic();
    let session = open_session().await;

    let subscriber = session
        .declare_subscriber(topic.trim_start_matches('/'))
        .await
        .expect("Failed to create subscriber");
    tokio::time::sleep(Duration::from_millis(100)).await;

    let config = test_config(&topic, 0.05);
    let mut bridge = OdometryBridge::configure(&config, session.clone()).expect("configure failed");
    assert!(!bridge.is_running());

    bridge
        .attach(Arc::new(FakeOdometry::new()))
        .expect("attach failed");
    assert!(bridge.is_running());

    let received = tokio::time::timeout(Duration::from_secs(5), subscriber.recv_async())
        .await
        .expect("Timeout waiting for message")
        .expect("Failed to receive message");

    let msg: Odometry = decode_auto(&received.payload().to_bytes()).expect("Failed to decode");

    assert_eq!(msg.header.frame_id, "odom");
    assert_eq!(msg.child_frame_id, "base_link");

    // Planar constraints.
    assert_eq!(msg.pose.position.z, 0.0);
    assert_eq!(msg.pose.orientation.x, 0.0);
    assert_eq!(msg.pose.orientation.y, 0.0);
    assert_eq!(msg.twist.linear.z, 0.0);
    assert_eq!(msg.twist.angular.x, 0.0);
    assert_eq!(msg.twist.angular.y, 0.0);

    // Unit quaternion from yaw alone.
    let q = msg.pose.orientation;
    let norm = (q.z * q.z + q.w * q.w).sqrt();
    assert!((norm - 1.0).abs() < 1e-9);

    // Stamp invariant.
    assert!(msg.header.stamp.nanosec < 1_000_000_000);
    assert!(msg.header.stamp.sec > 0);

    bridge.shutdown().await;
    session.close().await.expect("Failed to close session");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_message_rate_approximates_period() {
    let topic = unique_topic();
    let session = open_session().await;

    let subscriber = session
        .declare_subscriber(topic.trim_start_matches('/'))
        .await
        .expect("Failed to create subscriber");
    tokio::time::sleep(Duration::from_millis(100)).await;

    let config = test_config(&topic, 0.02);
    let mut bridge = OdometryBridge::configure(&config, session.clone()).expect("configure failed");
    bridge
        .attach(Arc::new(FakeOdometry::new()))
        .expect("attach failed");

    tokio::time::sleep(Duration::from_millis(200)).await;
    bridge.detach().await;

    let mut count = 0;
    while tokio::time::timeout(Duration::from_millis(50), subscriber.recv_async())
        .await
        .map(|r| r.is_ok())
        .unwrap_or(false)
    {
        count += 1;
    }

    // ~10 messages expected over 200 ms at 20 ms; generous jitter bounds.
    assert!(count >= 4, "expected at least 4 messages, got {count}");
    assert!(count <= 20, "expected at most 20 messages, got {count}");

    bridge.shutdown().await;
    session.close().await.expect("Failed to close session");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_detach_is_idempotent() {
    let topic = unique_topic();
    let session = open_session().await;

    let config = test_config(&topic, 0.05);
    let mut bridge = OdometryBridge::configure(&config, session.clone()).expect("configure failed");

    bridge.detach().await;
    bridge.detach().await;
    assert!(!bridge.is_running());

    bridge
        .attach(Arc::new(FakeOdometry::new()))
        .expect("attach after no-op detach failed");
    bridge.detach().await;
    bridge.detach().await;
    assert!(!bridge.is_running());

    bridge.shutdown().await;
    session.close().await.expect("Failed to close session");
}
