//! Planar odometry source interface and built-in subdevices.

use std::sync::Arc;
use std::time::Instant;

use roslink_bridge_framework::BridgeError;

/// Error type for source reads.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),
    #[error("Read failed: {0}")]
    Read(String),
}

/// One planar odometry snapshot.
///
/// Pose is expressed in the odometry frame, velocity in the robot's base
/// frame. Angles are in degrees, matching the upstream device convention.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OdometryReading {
    /// Position along x, meters.
    pub odom_x: f64,
    /// Position along y, meters.
    pub odom_y: f64,
    /// Heading, degrees.
    pub odom_theta: f64,
    /// Forward velocity, m/s.
    pub base_vel_x: f64,
    /// Lateral velocity, m/s.
    pub base_vel_y: f64,
    /// Heading rate, degrees/s.
    pub base_vel_theta: f64,
}

/// The sensor-like dependency the bridge polls.
pub trait Odometry2DSource: Send + Sync {
    /// Fetch the current snapshot. A short synchronous call.
    fn odometry(&self) -> Result<OdometryReading, SourceError>;
}

/// Construct a bridge-owned source from a `subdevice` config value.
pub fn open_subdevice(name: &str) -> Result<Arc<dyn Odometry2DSource>, BridgeError> {
    match name {
        "fake" | "fake_odometry" => Ok(Arc::new(FakeOdometry::new())),
        other => Err(BridgeError::Subdevice(other.to_string())),
    }
}

/// Simulated odometry for demos and tests.
///
/// Drives a circle at constant forward speed and yaw rate; the pose is
/// computed analytically from the elapsed time, so consecutive reads are
/// always consistent with each other.
pub struct FakeOdometry {
    started: Instant,
    /// Forward speed, m/s.
    speed: f64,
    /// Yaw rate, degrees/s.
    yaw_rate: f64,
}

impl FakeOdometry {
    pub fn new() -> Self {
        Self::with_motion(0.3, 9.0)
    }

    /// Simulate a circle with the given forward speed and yaw rate.
    pub fn with_motion(speed: f64, yaw_rate_deg: f64) -> Self {
        Self {
            started: Instant::now(),
            speed,
            yaw_rate: yaw_rate_deg,
        }
    }
}

impl Default for FakeOdometry {
    fn default() -> Self {
        Self::new()
    }
}

impl Odometry2DSource for FakeOdometry {
    fn odometry(&self) -> Result<OdometryReading, SourceError> {
        let t = self.started.elapsed().as_secs_f64();
        let theta_deg = self.yaw_rate * t;
        let omega = self.yaw_rate.to_radians();

        // Circular arc from the origin; straight line when not turning.
        let (x, y) = if omega.abs() < 1e-9 {
            (self.speed * t, 0.0)
        } else {
            let radius = self.speed / omega;
            let theta = theta_deg.to_radians();
            (radius * theta.sin(), radius * (1.0 - theta.cos()))
        };

        Ok(OdometryReading {
            odom_x: x,
            odom_y: y,
            odom_theta: theta_deg % 360.0,
            base_vel_x: self.speed,
            base_vel_y: 0.0,
            base_vel_theta: self.yaw_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_odometry_starts_near_origin() {
        let odom = FakeOdometry::new();
        let reading = odom.odometry().unwrap();
        assert!(reading.odom_x.abs() < 0.01);
        assert!(reading.odom_y.abs() < 0.01);
        assert_eq!(reading.base_vel_x, 0.3);
        assert_eq!(reading.base_vel_theta, 9.0);
    }

    #[test]
    fn test_fake_odometry_straight_line() {
        let odom = FakeOdometry::with_motion(1.0, 0.0);
        std::thread::sleep(std::time::Duration::from_millis(50));
        let reading = odom.odometry().unwrap();
        assert!(reading.odom_x > 0.0);
        assert_eq!(reading.odom_y, 0.0);
        assert_eq!(reading.odom_theta, 0.0);
    }

    #[test]
    fn test_fake_odometry_heading_advances() {
        let odom = FakeOdometry::with_motion(0.5, 90.0);
        std::thread::sleep(std::time::Duration::from_millis(50));
        let reading = odom.odometry().unwrap();
        assert!(reading.odom_theta > 0.0);
        assert!(reading.odom_theta < 360.0);
    }

    #[test]
    fn test_open_subdevice() {
        assert!(open_subdevice("fake").is_ok());
        assert!(open_subdevice("fake_odometry").is_ok());
        assert!(open_subdevice("bogus").is_err());
    }
}
