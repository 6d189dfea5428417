//! Zenoh bridge for planar odometry.
//!
//! Polls an odometry source at a fixed period and republishes each
//! snapshot as a `nav_msgs`-shaped `Odometry` message: position and
//! yaw-only orientation in the configured odometry frame, twist in the
//! base frame.

pub mod bridge;
pub mod config;
pub mod source;
