//! Calendar error types.

/// Errors raised by calendar option objects and contract implementations.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A value outside the allowed set was supplied.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The caller lacks the permission the operation needs.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The calendar or object does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Backend failure with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CalendarError {
    /// Shorthand for [`CalendarError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Convenience result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
