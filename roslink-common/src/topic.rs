//! Topic and node name validation, and mapping of topic names onto the
//! Zenoh keyspace.
//!
//! Naming follows the ROS2 convention: topic names are absolute and start
//! with `/`, node names are relative and must not. Zenoh key expressions
//! have no leading slash, so the published key is the topic name with the
//! leading `/` stripped.

use crate::error::{Error, Result};

/// Validate a node name: non-empty, must not begin with `/`.
pub fn validate_node_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::Node("node name is empty".to_string()));
    }
    if name.starts_with('/') {
        return Err(Error::Node(format!(
            "node name '{}' cannot begin with '/'",
            name
        )));
    }
    Ok(())
}

/// Validate a topic name: must begin with `/` and every segment must be
/// non-empty.
pub fn validate_topic_name(name: &str) -> Result<()> {
    let Some(rest) = name.strip_prefix('/') else {
        return Err(Error::Topic(format!(
            "missing initial '/' in topic name '{}'",
            name
        )));
    };
    if rest.is_empty() {
        return Err(Error::Topic("topic name '/' has no segments".to_string()));
    }
    if rest.split('/').any(str::is_empty) {
        return Err(Error::Topic(format!(
            "topic name '{}' has an empty segment",
            name
        )));
    }
    Ok(())
}

/// Map a validated topic name to its Zenoh key expression by removing the
/// single leading `/`.
pub fn topic_to_key(topic: &str) -> String {
    topic.strip_prefix('/').unwrap_or(topic).to_string()
}
