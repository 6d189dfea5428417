//! ROS2-shaped message types published by the bridges.
//!
//! Field names and layout mirror the `sensor_msgs`/`nav_msgs`/`geometry_msgs`
//! schemas so that subscribers on the ROS2 side can map payloads one-to-one.
//! Messages are plain serde structs; the wire encoding is chosen by the
//! publisher ([`crate::serialization::Format`]).

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time split into whole seconds and nanoseconds
/// (`builtin_interfaces/msg/Time`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

impl Time {
    /// Split a floating-point clock reading (seconds since the Unix epoch)
    /// into `sec`/`nanosec`. `sec` is the floor of the reading and
    /// `nanosec` is always in `0..1_000_000_000`.
    pub fn from_secs_f64(t: f64) -> Self {
        let sec = t.floor();
        let mut nanosec = ((t - sec) * 1_000_000_000.0).round() as u32;
        if nanosec >= 1_000_000_000 {
            nanosec = 999_999_999;
        }
        Self {
            sec: sec as i32,
            nanosec,
        }
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            sec: since_epoch.as_secs() as i32,
            nanosec: since_epoch.subsec_nanos(),
        }
    }
}

/// Standard message header (`std_msgs/msg/Header`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

/// `geometry_msgs/msg/Point`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `geometry_msgs/msg/Quaternion`. Identity by default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

impl Quaternion {
    /// Quaternion for a rotation about the vertical axis only.
    ///
    /// Planar odometry constrains orientation to the horizontal plane, so
    /// `x` and `y` stay zero and the yaw angle (radians) fully determines
    /// the rotation.
    pub fn from_yaw(yaw_rad: f64) -> Self {
        let half = yaw_rad * 0.5;
        Self {
            x: 0.0,
            y: 0.0,
            z: half.sin(),
            w: half.cos(),
        }
    }
}

/// `geometry_msgs/msg/Vector3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// `geometry_msgs/msg/Pose`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

/// `geometry_msgs/msg/Twist`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Twist {
    pub linear: Vector3,
    pub angular: Vector3,
}

/// Power supply status constants from `sensor_msgs/msg/BatteryState`.
///
/// The bridges always report `UNKNOWN`; the source interface does not carry
/// this information.
pub mod power_supply {
    pub const STATUS_UNKNOWN: u8 = 0;
    pub const HEALTH_UNKNOWN: u8 = 0;
    pub const TECHNOLOGY_UNKNOWN: u8 = 0;
}

/// `sensor_msgs/msg/BatteryState`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatteryState {
    pub header: Header,
    pub voltage: f32,
    pub temperature: f32,
    pub current: f32,
    pub charge: f32,
    pub capacity: f32,
    pub design_capacity: f32,
    pub percentage: f32,
    pub power_supply_status: u8,
    pub power_supply_health: u8,
    pub power_supply_technology: u8,
    pub present: bool,
    pub cell_voltage: Vec<f32>,
    pub cell_temperature: Vec<f32>,
    pub location: String,
    pub serial_number: String,
}

/// `nav_msgs/msg/Odometry`, without the covariance blocks (the bridges
/// have no uncertainty information to report).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Odometry {
    pub header: Header,
    pub child_frame_id: String,
    pub pose: Pose,
    pub twist: Twist,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_split_floor() {
        let t = Time::from_secs_f64(1234.25);
        assert_eq!(t.sec, 1234);
        assert_eq!(t.nanosec, 250_000_000);
    }

    #[test]
    fn test_time_split_whole_second() {
        let t = Time::from_secs_f64(42.0);
        assert_eq!(t.sec, 42);
        assert_eq!(t.nanosec, 0);
    }

    #[test]
    fn test_time_nanosec_in_range() {
        for raw in [0.0, 0.999_999_999_9, 17.5, 1_700_000_000.123_456] {
            let t = Time::from_secs_f64(raw);
            assert!(t.nanosec < 1_000_000_000, "nanosec out of range for {raw}");
            assert_eq!(t.sec as f64, raw.floor());
        }
    }

    #[test]
    fn test_quaternion_identity_default() {
        let q = Quaternion::default();
        assert_eq!(q, Quaternion::from_yaw(0.0));
        assert_eq!(q.w, 1.0);
    }

    #[test]
    fn test_quaternion_from_yaw_samples() {
        // 0, 90 and 180 degrees.
        for (deg, qz, qw) in [
            (0.0, 0.0, 1.0),
            (90.0, std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2),
            (180.0, 1.0, 0.0),
        ] {
            let q = Quaternion::from_yaw(f64::to_radians(deg));
            assert!((q.z - qz).abs() < 1e-12, "qz mismatch at {deg} deg");
            assert!((q.w - qw).abs() < 1e-12, "qw mismatch at {deg} deg");
            assert_eq!(q.x, 0.0);
            assert_eq!(q.y, 0.0);
        }
    }

    #[test]
    fn test_battery_state_default_is_absent_values() {
        let msg = BatteryState::default();
        assert_eq!(msg.power_supply_status, power_supply::STATUS_UNKNOWN);
        assert!(msg.cell_voltage.is_empty());
        assert!(msg.location.is_empty());
    }
}
