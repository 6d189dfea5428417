//! Zenoh bridge for battery monitoring.
//!
//! Polls a battery source at a fixed period and republishes each snapshot
//! as a `sensor_msgs`-shaped `BatteryState` on the configured topic.
//!
//! Messages land on the Zenoh key derived from the topic name, e.g. topic
//! `/robot/battery` publishes on `robot/battery`, with status
//! announcements on `robot/battery/@/status`.

pub mod bridge;
pub mod config;
pub mod source;
