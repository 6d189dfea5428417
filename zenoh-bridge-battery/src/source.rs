//! Battery source interface and built-in subdevices.

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

/// Coarse battery condition reported by a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryStatus {
    Standby,
    Charging,
    InUse,
    LowCharge,
    CriticalCharge,
    Error,
}

/// A snapshot of all battery fields, taken in one tick.
#[derive(Debug, Clone)]
pub struct BatteryReading {
    /// Pack voltage in volts.
    pub voltage: f64,
    /// Draw in amperes (positive = discharging).
    pub current: f64,
    /// State of charge in percent (0..=100).
    pub charge: f64,
    /// Pack temperature in degrees Celsius.
    pub temperature: f64,
    /// Coarse condition.
    pub status: BatteryStatus,
    /// Free-text device description.
    pub info: String,
}

/// The sensor-like dependency the bridge polls.
///
/// Each accessor is a short synchronous call; the bridge invokes all of
/// them once per tick via [`read_all`].
pub trait BatterySource: Send + Sync {
    fn voltage(&self) -> Result<f64, SourceError>;
    fn current(&self) -> Result<f64, SourceError>;
    fn charge(&self) -> Result<f64, SourceError>;
    fn temperature(&self) -> Result<f64, SourceError>;
    fn status(&self) -> Result<BatteryStatus, SourceError>;
    fn info(&self) -> Result<String, SourceError>;
}

/// Read every field from a source into one snapshot.
pub fn read_all(source: &dyn BatterySource) -> Result<BatteryReading, SourceError> {
    Ok(BatteryReading {
        voltage: source.voltage()?,
        current: source.current()?,
        charge: source.charge()?,
        temperature: source.temperature()?,
        status: source.status()?,
        info: source.info()?,
    })
}

/// Construct a bridge-owned source from a `subdevice` config value.
pub fn open_subdevice(name: &str) -> Result<Arc<dyn BatterySource>, BridgeError> {
    match name {
        "fake" | "fake_battery" => Ok(Arc::new(FakeBattery::new())),
        other => Err(BridgeError::Subdevice(other.to_string())),
    }
}

/// Simulated battery for demos and tests.
///
/// Starts full and discharges at a fixed rate under a constant load.
/// Voltage tracks the state of charge linearly between the empty and full
/// cell voltages of a nominal 3S pack.
pub struct FakeBattery {
    started: Instant,
    initial_charge: f64,
    /// Percent per second of simulated discharge.
    discharge_rate: f64,
}

const FULL_VOLTAGE: f64 = 12.6;
const EMPTY_VOLTAGE: f64 = 9.6;
const LOAD_CURRENT: f64 = 1.2;

impl FakeBattery {
    pub fn new() -> Self {
        Self::with_charge(100.0)
    }

    /// Start the simulation from a given state of charge.
    pub fn with_charge(percent: f64) -> Self {
        Self {
            started: Instant::now(),
            initial_charge: percent.clamp(0.0, 100.0),
            discharge_rate: 0.05,
        }
    }

    fn current_charge(&self) -> f64 {
        let drained = self.started.elapsed().as_secs_f64() * self.discharge_rate;
        (self.initial_charge - drained).max(0.0)
    }
}

impl Default for FakeBattery {
    fn default() -> Self {
        Self::new()
    }
}

impl BatterySource for FakeBattery {
    fn voltage(&self) -> Result<f64, SourceError> {
        let soc = self.current_charge() / 100.0;
        Ok(EMPTY_VOLTAGE + soc * (FULL_VOLTAGE - EMPTY_VOLTAGE))
    }

    fn current(&self) -> Result<f64, SourceError> {
        Ok(LOAD_CURRENT)
    }

    fn charge(&self) -> Result<f64, SourceError> {
        Ok(self.current_charge())
    }

    fn temperature(&self) -> Result<f64, SourceError> {
        Ok(25.0)
    }

    fn status(&self) -> Result<BatteryStatus, SourceError> {
        let charge = self.current_charge();
        Ok(if charge <= 5.0 {
            BatteryStatus::CriticalCharge
        } else if charge <= 20.0 {
            BatteryStatus::LowCharge
        } else {
            BatteryStatus::InUse
        })
    }

    fn info(&self) -> Result<String, SourceError> {
        Ok("fake battery (simulated 3S pack)".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_battery_reads_consistent() {
        let battery = FakeBattery::new();
        let reading = read_all(&battery).unwrap();

        assert!(reading.charge <= 100.0);
        assert!(reading.voltage > EMPTY_VOLTAGE);
        assert!(reading.voltage <= FULL_VOLTAGE);
        assert_eq!(reading.current, LOAD_CURRENT);
        assert_eq!(reading.status, BatteryStatus::InUse);
        assert!(!reading.info.is_empty());
    }

    #[test]
    fn test_fake_battery_charge_never_negative() {
        let battery = FakeBattery::with_charge(0.0);
        assert_eq!(battery.charge().unwrap(), 0.0);
        assert_eq!(battery.status().unwrap(), BatteryStatus::CriticalCharge);
    }

    #[test]
    fn test_fake_battery_low_charge_status() {
        let battery = FakeBattery::with_charge(15.0);
        assert_eq!(battery.status().unwrap(), BatteryStatus::LowCharge);
    }

    #[test]
    fn test_open_subdevice() {
        assert!(open_subdevice("fake").is_ok());
        assert!(open_subdevice("fake_battery").is_ok());
        assert!(open_subdevice("bogus").is_err());
    }
}
