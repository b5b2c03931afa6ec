//! DynamoDB waiters for Nimbus.
//!
//! A waiter polls `DescribeTable` through a [`TableDescriber`] until the
//! condition from its [`WaiterDescriptor`](nimbus_dynamodb_model::WaiterDescriptor)
//! holds. No transport is bundled; callers plug in whatever client they have.
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod waiter;

pub use config::WaiterConfig;
pub use error::WaiterError;
pub use waiter::{TableDescriber, WaitOutcome, Waiter};
