//! Waiter errors.

use nimbus_dynamodb_model::DynamoDBError;

/// Reasons a waiter stops without reaching its success condition.
#[derive(Debug, thiserror::Error)]
pub enum WaiterError {
    /// No waiter with this name exists in the service description.
    #[error("unknown waiter: {0}")]
    UnknownWaiter(String),

    /// Every attempt ran without meeting the success condition.
    #[error("waiter {waiter} gave up after {attempts} attempts")]
    MaxAttemptsExceeded {
        /// Waiter name.
        waiter: &'static str,
        /// Attempts made.
        attempts: u32,
    },

    /// The polled operation failed with an error the waiter does not tolerate.
    #[error("waiter {waiter} aborted: {source}")]
    Unexpected {
        /// Waiter name.
        waiter: &'static str,
        /// The error returned by the operation.
        #[source]
        source: DynamoDBError,
    },

    /// The operation output could not be inspected.
    #[error("failed to inspect waiter output: {0}")]
    Output(#[from] serde_json::Error),
}
