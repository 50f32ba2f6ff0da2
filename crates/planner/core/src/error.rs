//! Common error infrastructure for planner-core.
//!
//! Domain-specific errors (e.g., [`SchemaError`](crate::schema::SchemaError)) live next to
//! the modules that raise them; this module holds the shared classification
//! trait that every error type in the workspace implements.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each failure domain has its own error enum
//! - **Degrade, don't abort**: Almost nothing in the planner is fatal; errors
//!   are classified so callers can decide whether to surface or swallow them
//! - **Stable codes**: `error_code()` strings are stable for logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: The operation can be skipped and the session continues
///   (e.g., a storage write failed, data stays in memory)
/// - **Validation**: User input was rejected (unknown slot id, bad import file)
/// - **Internal**: Unexpected inconsistency that should be investigated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Session continues in a degraded mode.
    ///
    /// Examples: storage quota exceeded, unreadable persisted payload
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown slot id, malformed import file
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: poisoned repository lock
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all planner errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Give every variant a stable `SCREAMING_SNAKE` error code
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
