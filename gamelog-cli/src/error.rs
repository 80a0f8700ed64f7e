use gamelog_db::{OperationError, SchemaError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The database could not be opened or initialized
    #[error("Unable to open database {path}: {source}")]
    StoreUnavailable {
        path: String,
        #[source]
        source: SchemaError,
    },

    /// A required positional argument was not given
    #[error("{command}: required argument {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// An insert was rejected by a uniqueness, foreign key or check constraint
    #[error("{context}: {message}")]
    ConstraintViolation {
        context: &'static str,
        message: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub(crate) fn store_unavailable(path: impl ToString, source: SchemaError) -> Self {
        Self::StoreUnavailable {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn missing_argument(command: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument { command, argument }
    }

    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Wrap a storage error with what the command was doing when it failed.
    pub(crate) fn operation(context: &'static str, err: OperationError) -> Self {
        match err {
            OperationError::ConstraintViolation(message) => {
                Self::ConstraintViolation { context, message }
            }
            other => Self::database(format!("{}: {}", context, other)),
        }
    }

    /// Process exit code for this error.
    pub(crate) fn exit_code(&self) -> i32 {
        1
    }
}
