//! Error types for the Attendance Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving employees,
//! fetching attendance records, and handling requests.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     user_id: "auth_123".to_string(),
/// };
/// assert_eq!(error.to_string(), "No employee record found for user 'auth_123'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No employee row exists for the given user identity.
    ///
    /// This is a configuration problem, distinct from an employee that
    /// simply has no attendance records in the queried range.
    #[error("No employee record found for user '{user_id}'")]
    EmployeeNotFound {
        /// The external user identity that failed to resolve.
        user_id: String,
    },

    /// The record source failed to answer a query.
    #[error("Failed to retrieve records: {message}")]
    FetchFailed {
        /// A description of the retrieval failure.
        message: String,
    },

    /// A leave request was invalid or contained inconsistent data.
    #[error("Invalid leave request: {message}")]
    InvalidLeaveRequest {
        /// A description of what made the request invalid.
        message: String,
    },

    /// An expense claim was invalid or contained inconsistent data.
    #[error("Invalid expense claim field '{field}': {message}")]
    InvalidExpense {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Persisted client state (preferences) could not be read or written.
    #[error("Failed to access client storage '{path}': {message}")]
    StorageError {
        /// The storage path involved.
        path: String,
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
