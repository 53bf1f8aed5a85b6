//! Error types for the pathvars library.
//!
//! This module provides the error hierarchy for all operations in the
//! pathvars library, using `thiserror` for ergonomic error handling.
//!
//! Note that "no suitable variable was found" is never an error: the
//! relativizer hands back the original path in that case.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathvars error.
///
/// # Examples
///
/// ```
/// use pathvars::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("PROJECT_LOC".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathvars library.
#[derive(Debug, Error)]
pub enum Error {
    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The variable store behind a resolver could not complete an operation.
    ///
    /// This is the single error every resolver implementation reports for
    /// storage failures. Callers decide whether to retry.
    #[error("variable operation '{operation}' failed: {source}")]
    OperationFailed {
        /// The operation that was attempted.
        operation: String,
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The named variable is not defined.
    #[error("undefined path variable: {name}")]
    UndefinedVariable {
        /// The variable name.
        name: String,
    },

    /// The named variable is computed by a descriptor and cannot be changed.
    #[error("path variable '{name}' is read-only")]
    ReadOnlyVariable {
        /// The variable name.
        name: String,
    },

    /// Variable references nest deeper than the resolver allows.
    #[error("path variable '{name}' nests deeper than {depth} levels (cyclic definition?)")]
    VariableCycle {
        /// The variable being resolved when the limit was hit.
        name: String,
        /// The nesting limit.
        depth: usize,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl Error {
    /// Wrap a storage failure as [`Error::OperationFailed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::Error;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
    /// let err = Error::operation_failed("list variables", io);
    /// assert!(err.is_operation_failed());
    /// ```
    pub fn operation_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::OperationFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Check if error is a resolver storage failure.
    #[must_use]
    pub fn is_operation_failed(&self) -> bool {
        matches!(self, Self::OperationFailed { .. })
    }

    /// Check if error means the database stayed locked past the busy
    /// timeout, looking through storage failures.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        match self {
            Self::Database(rusqlite::Error::SqliteFailure(e, _)) => matches!(
                e.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            Self::OperationFailed { source, .. } => source
                .downcast_ref::<Self>()
                .is_some_and(Self::is_busy),
            _ => false,
        }
    }

    /// Check if error indicates a missing variable or resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathvars::Error;
    ///
    /// let err = Error::UndefinedVariable { name: "FOO".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UndefinedVariable { .. } | Self::NotFound { .. } | Self::DataDirectoryNotFound { .. }
        )
    }
}
