use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Wire encoding for published messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON (human-readable, easy to inspect with a topic echo).
    #[default]
    Json,

    /// CBOR (compact binary, preferred for high-rate topics).
    Cbor,
}

impl Format {
    /// MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Cbor => "application/cbor",
        }
    }
}

/// Encode a message to bytes using the specified format.
pub fn encode<T: Serialize>(value: &T, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Json => serde_json::to_vec(value).map_err(Error::from),
        Format::Cbor => {
            let mut buf = Vec::new();
            ciborium::into_writer(value, &mut buf)?;
            Ok(buf)
        }
    }
}

/// Decode bytes to a message using the specified format.
pub fn decode<T: DeserializeOwned>(data: &[u8], format: Format) -> Result<T> {
    match format {
        Format::Json => serde_json::from_slice(data).map_err(Error::from),
        Format::Cbor => ciborium::from_reader(data).map_err(|e| Error::Cbor(e.to_string())),
    }
}

/// Guess the format from the payload bytes.
///
/// Returns `Json` if the data starts with `{` or `[`, otherwise `Cbor`.
pub fn detect_format(data: &[u8]) -> Format {
    match data.first() {
        Some(b'{') | Some(b'[') => Format::Json,
        _ => Format::Cbor,
    }
}

/// Decode bytes, auto-detecting the format.
pub fn decode_auto<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
    decode(data, detect_format(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{BatteryState, Header, Odometry, Quaternion, Time};

    fn sample_odometry() -> Odometry {
        let mut msg = Odometry {
            header: Header {
                stamp: Time::from_secs_f64(100.5),
                frame_id: "odom".to_string(),
            },
            child_frame_id: "base_link".to_string(),
            ..Default::default()
        };
        msg.pose.position.x = 1.25;
        msg.pose.position.y = -0.5;
        msg.pose.orientation = Quaternion::from_yaw(0.3);
        msg.twist.linear.x = 0.1;
        msg.twist.angular.z = 0.05;
        msg
    }

    #[test]
    fn test_odometry_json_roundtrip() {
        let msg = sample_odometry();
        let bytes = encode(&msg, Format::Json).unwrap();
        let decoded: Odometry = decode(&bytes, Format::Json).unwrap();
        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_odometry_cbor_roundtrip() {
        let msg = sample_odometry();
        let bytes = encode(&msg, Format::Cbor).unwrap();
        let decoded: Odometry = decode(&bytes, Format::Cbor).unwrap();
        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_battery_nan_survives_cbor() {
        // JSON cannot carry NaN, which is why the battery bridge is
        // published as CBOR by default when NaN placeholders matter.
        let msg = BatteryState {
            charge: f32::NAN,
            capacity: f32::NAN,
            design_capacity: f32::NAN,
            percentage: 87.0,
            ..Default::default()
        };

        let bytes = encode(&msg, Format::Cbor).unwrap();
        let decoded: BatteryState = decode(&bytes, Format::Cbor).unwrap();

        assert!(decoded.charge.is_nan());
        assert!(decoded.capacity.is_nan());
        assert!(decoded.design_capacity.is_nan());
        assert_eq!(decoded.percentage, 87.0);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(detect_format(b"{\"sec\": 1}"), Format::Json);
        assert_eq!(detect_format(b"[1, 2, 3]"), Format::Json);
        assert_eq!(detect_format(b"\xa1\x63key\x65value"), Format::Cbor);
    }

    #[test]
    fn test_auto_decode() {
        let msg = sample_odometry();

        let json = encode(&msg, Format::Json).unwrap();
        let decoded: Odometry = decode_auto(&json).unwrap();
        assert_eq!(msg.child_frame_id, decoded.child_frame_id);

        let cbor = encode(&msg, Format::Cbor).unwrap();
        let decoded: Odometry = decode_auto(&cbor).unwrap();
        assert_eq!(msg.child_frame_id, decoded.child_frame_id);
    }
}
