//! Topic publisher backed by a Zenoh session.

use std::sync::Arc;

use roslink_common::{Format, encode, topic_to_key, validate_topic_name};

use crate::error::{BridgeError, Result};

/// The publish sink of a bridge.
///
/// Bound to a single topic at configure time; every tick's message goes
/// through [`publish`](Publisher::publish) with automatic serialization.
#[derive(Clone, Debug)]
pub struct Publisher {
    session: Arc<zenoh::Session>,
    topic: String,
    key: String,
    format: Format,
}

impl Publisher {
    /// Create a publisher for a topic.
    ///
    /// The topic name is validated (must begin with '/') and mapped onto
    /// the Zenoh keyspace by stripping the leading slash.
    pub fn new(session: Arc<zenoh::Session>, topic: impl Into<String>, format: Format) -> Result<Self> {
        let topic = topic.into();
        validate_topic_name(&topic)?;
        let key = topic_to_key(&topic);
        Ok(Self {
            session,
            topic,
            key,
            format,
        })
    }

    /// The topic name this publisher is bound to.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// The Zenoh key expression messages are published on.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The wire encoding.
    pub fn format(&self) -> Format {
        self.format
    }

    /// A reference to the underlying Zenoh session.
    pub fn session(&self) -> &Arc<zenoh::Session> {
        &self.session
    }

    /// Serialize and publish one message.
    pub async fn publish<T: serde::Serialize>(&self, msg: &T) -> Result<()> {
        let payload =
            encode(msg, self.format).map_err(|e| BridgeError::Serialization(e.to_string()))?;

        self.session
            .put(&self.key, payload)
            .await
            .map_err(|e| BridgeError::Publish {
                key: self.key.clone(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// Publish a JSON value to an arbitrary key (for status messages).
    pub async fn publish_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let payload = serde_json::to_vec(value)?;
        self.session
            .put(key, payload)
            .await
            .map_err(|e| BridgeError::Publish {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use roslink_common::{topic_to_key, validate_topic_name};

    #[test]
    fn test_topic_key_mapping() {
        // Publisher construction needs a live session; the key mapping it
        // applies is testable on its own.
        assert!(validate_topic_name("/robot/battery").is_ok());
        assert_eq!(topic_to_key("/robot/battery"), "robot/battery");

        assert!(validate_topic_name("robot/battery").is_err());
    }
}
