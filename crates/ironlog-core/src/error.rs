//! Error types for the workout session library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The backend has no workout with the given identifier
    #[error("Workout with ID {workout_id} not found")]
    NotFound { workout_id: String },
    /// A session is already in progress
    #[error("A session for workout {workout_id} is already in progress; finish or abandon it first")]
    Conflict { workout_id: String },
    /// Finish was requested before any exercise was logged
    #[error("Cannot finish a session with no logged exercises")]
    EmptySession,
    /// The operation needs an active session
    #[error("No workout session is in progress")]
    NoActiveSession,
    /// A start or finish call is still in flight
    #[error("Another session operation is still in flight")]
    Busy,
    /// Workout retrieval failed for a reason other than not-found
    #[error("Failed to fetch workout: {message}")]
    Fetch { message: String },
    /// Log creation failed
    #[error("Failed to submit workout log: {message}")]
    Submission { message: String },
    /// Durable store read or write failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Stable classification of [`SessionError`] for callers that branch on the
/// failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    EmptySession,
    NoActiveSession,
    Busy,
    Fetch,
    Submission,
    Persistence,
    InvalidInput,
    Configuration,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SessionError {
        SessionError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SessionError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a database error with a message and its rusqlite source.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::NotFound { .. } => ErrorKind::NotFound,
            SessionError::Conflict { .. } => ErrorKind::Conflict,
            SessionError::EmptySession => ErrorKind::EmptySession,
            SessionError::NoActiveSession => ErrorKind::NoActiveSession,
            SessionError::Busy => ErrorKind::Busy,
            SessionError::Fetch { .. } => ErrorKind::Fetch,
            SessionError::Submission { .. } => ErrorKind::Submission,
            SessionError::Persistence { .. }
            | SessionError::Database { .. }
            | SessionError::FileSystem { .. }
            | SessionError::Serialization { .. } => ErrorKind::Persistence,
            SessionError::InvalidInput { .. } => ErrorKind::InvalidInput,
            SessionError::XdgDirectory(_) | SessionError::Configuration { .. } => {
                ErrorKind::Configuration
            }
        }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to a configuration error.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SessionError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SessionError::database(message, e))
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
