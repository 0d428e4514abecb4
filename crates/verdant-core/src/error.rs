//! Error types for the scheduling library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all scheduler operations.
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Client not found for the given ID
    #[error("Client with ID {id} not found")]
    ClientNotFound { id: u64 },
    /// Program template not found for the given ID
    #[error("Program template with ID {id} not found")]
    TemplateNotFound { id: u64 },
    /// Treatment type not found for the given ID
    #[error("Treatment type with ID {id} not found")]
    TreatmentTypeNotFound { id: u64 },
    /// Client program not found for the given ID
    #[error("Client program with ID {id} not found")]
    ProgramNotFound { id: u64 },
    /// Service instance not found for the given ID
    #[error("Program service with ID {id} not found")]
    ServiceNotFound { id: u64 },
    /// Treatment instance not found for the given ID
    #[error("Program treatment with ID {id} not found")]
    TreatmentNotFound { id: u64 },
    /// Treatment program not found for the given ID
    #[error("Treatment program with ID {id} not found")]
    TreatmentProgramNotFound { id: u64 },
    /// Job not found for the given ID
    #[error("Job with ID {id} not found")]
    JobNotFound { id: u64 },
    /// Caller role lacks a required capability
    #[error("Role '{role}' is not permitted to {capability}")]
    Permission { role: String, capability: String },
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
    Validation { field: String, reason: String },
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

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> SchedulerError {
        SchedulerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> SchedulerError {
        SchedulerError::Validation {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl SchedulerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::database(message).with_source(source)
    }

    /// Creates a permission error for a role lacking a capability.
    pub fn permission(role: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::Permission {
            role: role.into(),
            capability: capability.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| SchedulerError::database(message).with_source(e))
    }
}

/// Result type alias for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
