//! Table waiters.

use async_trait::async_trait;
use tracing::{debug, warn};

use nimbus_dynamodb_model::DynamoDBError;
use nimbus_dynamodb_model::input::DescribeTableInput;
use nimbus_dynamodb_model::output::DescribeTableOutput;
use nimbus_dynamodb_model::schema::service;
use nimbus_dynamodb_model::types::TableDescription;
use nimbus_dynamodb_model::waiter::{TABLE_EXISTS, TABLE_NOT_EXISTS, WaiterDescriptor};

use crate::config::WaiterConfig;
use crate::error::WaiterError;

/// Anything that can answer `DescribeTable`.
#[async_trait]
pub trait TableDescriber: Send + Sync {
    /// Describe a table.
    async fn describe_table(
        &self,
        input: DescribeTableInput,
    ) -> Result<DescribeTableOutput, DynamoDBError>;
}

/// How a waiter finished.
#[derive(Debug, Clone)]
pub struct WaitOutcome {
    /// Attempts made, including the successful one.
    pub attempts: u32,
    /// The last table description, when the success condition was met on output.
    pub table: Option<TableDescription>,
}

/// Polls `DescribeTable` until a waiter's success condition holds.
#[derive(Debug, Clone, Copy)]
pub struct Waiter {
    descriptor: &'static WaiterDescriptor,
    config: WaiterConfig,
}

impl Waiter {
    /// Build a waiter from a descriptor with the given cadence.
    #[must_use]
    pub fn new(descriptor: &'static WaiterDescriptor, config: WaiterConfig) -> Self {
        Self { descriptor, config }
    }

    /// Look up a waiter by name in the service description.
    pub fn named(name: &str, config: WaiterConfig) -> Result<Self, WaiterError> {
        service()
            .waiter(name)
            .map(|descriptor| Self::new(descriptor, config))
            .ok_or_else(|| WaiterError::UnknownWaiter(name.to_owned()))
    }

    /// Wait until a table exists and is `ACTIVE`.
    #[must_use]
    pub fn table_exists(config: WaiterConfig) -> Self {
        Self::new(&TABLE_EXISTS, config)
    }

    /// Wait until a table is gone.
    #[must_use]
    pub fn table_not_exists(config: WaiterConfig) -> Self {
        Self::new(&TABLE_NOT_EXISTS, config)
    }

    /// The descriptor driving this waiter.
    #[must_use]
    pub fn descriptor(&self) -> &'static WaiterDescriptor {
        self.descriptor
    }

    /// Poll until the success condition holds or attempts run out.
    ///
    /// Errors listed in the descriptor's `ignore_errors` count as "not yet";
    /// any other error aborts immediately.
    ///
    /// # Examples
    ///
    /// ```
    /// use async_trait::async_trait;
    /// use nimbus_dynamodb_core::{TableDescriber, Waiter, WaiterConfig};
    /// use nimbus_dynamodb_model::DynamoDBError;
    /// use nimbus_dynamodb_model::input::DescribeTableInput;
    /// use nimbus_dynamodb_model::output::DescribeTableOutput;
    /// use nimbus_dynamodb_model::types::{TableDescription, TableStatus};
    ///
    /// struct AlwaysActive;
    ///
    /// #[async_trait]
    /// impl TableDescriber for AlwaysActive {
    ///     async fn describe_table(
    ///         &self,
    ///         input: DescribeTableInput,
    ///     ) -> Result<DescribeTableOutput, DynamoDBError> {
    ///         Ok(DescribeTableOutput {
    ///             table: Some(TableDescription {
    ///                 table_name: Some(input.table_name),
    ///                 table_status: Some(TableStatus::Active),
    ///                 ..Default::default()
    ///             }),
    ///         })
    ///     }
    /// }
    ///
    /// # tokio_test::block_on(async {
    /// let outcome = Waiter::table_exists(WaiterConfig::default())
    ///     .wait(&AlwaysActive, "Users")
    ///     .await
    ///     .unwrap();
    /// assert_eq!(outcome.attempts, 1);
    /// # });
    /// ```
    pub async fn wait<D>(&self, describer: &D, table: &str) -> Result<WaitOutcome, WaiterError>
    where
        D: TableDescriber + ?Sized,
    {
        let name = self.descriptor.name;
        let success = &self.descriptor.success;
        let max_attempts = self.config.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            match describer
                .describe_table(DescribeTableInput::new(table))
                .await
            {
                Ok(output) => {
                    let json = serde_json::to_value(&output)?;
                    if success.matches_output(&json) {
                        debug!(waiter = name, table, attempt, "waiter condition met");
                        return Ok(WaitOutcome {
                            attempts: attempt,
                            table: output.table,
                        });
                    }
                    debug!(
                        waiter = name,
                        table,
                        attempt,
                        status = ?output.table.as_ref().and_then(|t| t.table_status),
                        "waiter condition not met"
                    );
                }
                Err(err) => {
                    let code = err.code.as_str();
                    if success.matches_error(code) {
                        debug!(waiter = name, table, attempt, code, "waiter condition met");
                        return Ok(WaitOutcome {
                            attempts: attempt,
                            table: None,
                        });
                    }
                    if !self.descriptor.ignores(code) {
                        warn!(waiter = name, table, attempt, code, "waiter aborted");
                        return Err(WaiterError::Unexpected {
                            waiter: name,
                            source: err,
                        });
                    }
                    debug!(waiter = name, table, attempt, code, "ignoring error while waiting");
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(self.config.interval).await;
            }
        }

        warn!(waiter = name, table, attempts = max_attempts, "waiter gave up");
        Err(WaiterError::MaxAttemptsExceeded {
            waiter: name,
            attempts: max_attempts,
        })
    }
}
