//! Core types and configuration for Nimbus.
//!
//! This crate provides the building blocks shared by the DynamoDB schema crates,
//! the calendar contract crate, and the `nimbus` binary: environment-driven
//! configuration, the core error type, and common AWS type definitions.

mod config;
mod error;
mod types;

pub use config::NimbusConfig;
pub use error::{NimbusError, NimbusResult};
pub use types::{AwsRegion, Scheme};
