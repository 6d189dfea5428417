//! roslink Bridge Framework
//!
//! Common abstractions for building periodic polling bridges that read a
//! sensor-like source at a fixed rate and republish each snapshot on a
//! Zenoh topic.
//!
//! # Overview
//!
//! This framework provides:
//! - [`BridgeParams`] / [`BridgeConfig`] for configuration loading and
//!   validation (node name, topic name, poll period, subdevice)
//! - [`Publisher`] for topic publishing with automatic serialization
//! - [`PollTask`] for the non-overlapping fixed-rate tick worker
//! - [`BridgeRunner`] for process lifecycle (logging, Zenoh session,
//!   signal handling)
//! - [`BridgeArgs`] for common CLI argument parsing
//! - [`StatusPublisher`] for lifecycle announcements on `{key}/@/status`
//!
//! The bridge state machine itself (Unconfigured -> Configured -> Running
//! -> detached) lives in the per-sensor crates; every lifecycle transition
//! there is built from these parts.

mod args;
mod config;
mod error;
mod poll;
mod publisher;
mod runner;
mod status;

pub use args::BridgeArgs;
pub use config::{BridgeConfig, BridgeParams, DEFAULT_PERIOD_S};
pub use error::{BridgeError, Result};
pub use poll::PollTask;
pub use publisher::Publisher;
pub use runner::BridgeRunner;
pub use status::{BridgeState, BridgeStatus, StatusPublisher};

// Re-export commonly used types from roslink-common
pub use roslink_common::{Format, LoggingConfig, Time, ZenohConfig};
