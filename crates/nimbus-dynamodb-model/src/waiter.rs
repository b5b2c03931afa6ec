//! Waiter descriptors.
//!
//! A waiter repeatedly calls an operation until its success condition holds.
//! Both DynamoDB waiters poll `DescribeTable`.

use crate::operations::DynamoDBOperation;

/// Default delay between polls, in seconds.
pub const DEFAULT_INTERVAL_SECS: u64 = 20;

/// Default number of polls before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 25;

/// Condition that ends a waiter successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaiterSuccess {
    /// The operation output at `path` (slash-separated keys) equals `value`.
    Output {
        /// Slash-separated path into the JSON output.
        path: &'static str,
        /// Expected string value.
        value: &'static str,
    },
    /// The operation fails with the named error.
    Error {
        /// Error class name.
        code: &'static str,
    },
}

impl WaiterSuccess {
    /// Returns the schema name of the condition type (`output` or `error`).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Output { .. } => "output",
            Self::Error { .. } => "error",
        }
    }

    /// Returns the value the condition compares against.
    #[must_use]
    pub fn value(&self) -> &'static str {
        match self {
            Self::Output { value, .. } => value,
            Self::Error { code } => code,
        }
    }

    /// Returns `true` if `output` satisfies an `Output` condition.
    #[must_use]
    pub fn matches_output(&self, output: &serde_json::Value) -> bool {
        match self {
            Self::Output { path, value } => path
                .split('/')
                .try_fold(output, |node, key| node.get(key))
                .and_then(serde_json::Value::as_str)
                .is_some_and(|found| found == *value),
            Self::Error { .. } => false,
        }
    }

    /// Returns `true` if the error `code` satisfies an `Error` condition.
    #[must_use]
    pub fn matches_error(&self, code: &str) -> bool {
        matches!(self, Self::Error { code: expected } if *expected == code)
    }
}

/// Static description of a waiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterDescriptor {
    /// Waiter name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Operation polled on every attempt.
    pub operation: DynamoDBOperation,
    /// Delay between attempts, in seconds.
    pub interval_secs: u64,
    /// Attempts before giving up.
    pub max_attempts: u32,
    /// Condition that ends the wait.
    pub success: WaiterSuccess,
    /// Errors that count as "not yet" rather than failure.
    pub ignore_errors: &'static [&'static str],
}

impl WaiterDescriptor {
    /// Returns `true` if `code` should be swallowed and polling continued.
    #[must_use]
    pub fn ignores(&self, code: &str) -> bool {
        self.ignore_errors.contains(&code)
    }
}

/// Wait until a table exists and can be accessed.
pub const TABLE_EXISTS: WaiterDescriptor = WaiterDescriptor {
    name: "TableExists",
    description: "Wait until a table exists and can be accessed",
    operation: DynamoDBOperation::DescribeTable,
    interval_secs: DEFAULT_INTERVAL_SECS,
    max_attempts: DEFAULT_MAX_ATTEMPTS,
    success: WaiterSuccess::Output {
        path: "Table/TableStatus",
        value: "ACTIVE",
    },
    ignore_errors: &["ResourceNotFoundException"],
};

/// Wait until a table is deleted.
pub const TABLE_NOT_EXISTS: WaiterDescriptor = WaiterDescriptor {
    name: "TableNotExists",
    description: "Wait until a table is deleted",
    operation: DynamoDBOperation::DescribeTable,
    interval_secs: DEFAULT_INTERVAL_SECS,
    max_attempts: DEFAULT_MAX_ATTEMPTS,
    success: WaiterSuccess::Error {
        code: "ResourceNotFoundException",
    },
    ignore_errors: &[],
};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_should_follow_output_path() {
        let output = json!({"Table": {"TableStatus": "ACTIVE"}});
        assert!(TABLE_EXISTS.success.matches_output(&output));

        let creating = json!({"Table": {"TableStatus": "CREATING"}});
        assert!(!TABLE_EXISTS.success.matches_output(&creating));
        assert!(!TABLE_EXISTS.success.matches_output(&json!({})));
    }

    #[test]
    fn test_should_match_error_condition() {
        assert!(
            TABLE_NOT_EXISTS
                .success
                .matches_error("ResourceNotFoundException")
        );
        assert!(!TABLE_NOT_EXISTS.success.matches_error("InternalServerError"));
        assert!(!TABLE_EXISTS.success.matches_error("ResourceNotFoundException"));
    }

    #[test]
    fn test_should_ignore_not_found_only_while_waiting_for_existence() {
        assert!(TABLE_EXISTS.ignores("ResourceNotFoundException"));
        assert!(!TABLE_NOT_EXISTS.ignores("ResourceNotFoundException"));
    }
}
