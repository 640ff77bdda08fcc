//! Error types and result handling for the benchmark harness.

use std::fmt;
use std::io;

/// Result alias used throughout the library.
pub type BenchResult<T> = Result<T, BenchError>;

/// Error type covering corpus generation, sorting, and report emission.
///
/// Every variant is fatal to the current run: a benchmark row is an atomic
/// unit of work with no partial-failure recovery.
#[derive(Debug)]
pub enum BenchError {
    /// A size, range, or tunable was outside its valid domain
    InvalidArgument {
        message: String,
        field: Option<String>,
    },

    /// An auxiliary working buffer could not be allocated
    AllocationFailure { context: String, requested: usize },

    /// Writing the report failed
    Io(io::Error),
}

impl BenchError {
    /// Create an invalid-argument error, optionally naming the offending field
    pub fn invalid_argument(
        message: impl Into<String>,
        field: Option<impl Into<String>>,
    ) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            field: field.map(|f| f.into()),
        }
    }

    /// Create an allocation-failure error for a buffer of `requested` elements
    pub fn allocation_failure(context: impl Into<String>, requested: usize) -> Self {
        Self::AllocationFailure {
            context: context.into(),
            requested,
        }
    }

    /// Prefix the error's message with run context (e.g. the failing size
    /// and algorithm), preserving the variant
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            Self::InvalidArgument { message, field } => Self::InvalidArgument {
                message: format!("{}: {}", context.into(), message),
                field,
            },
            Self::AllocationFailure {
                context: inner,
                requested,
            } => Self::AllocationFailure {
                context: format!("{}: {}", context.into(), inner),
                requested,
            },
            Self::Io(err) => Self::Io(io::Error::new(
                err.kind(),
                format!("{}: {}", context.into(), err),
            )),
        }
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidArgument { message, field } => {
                write!(f, "Invalid argument: {}", message)?;
                if let Some(field_name) = field {
                    write!(f, " (field: {})", field_name)?;
                }
                Ok(())
            }
            BenchError::AllocationFailure { context, requested } => {
                write!(
                    f,
                    "Allocation failure: {} ({} elements requested)",
                    context, requested
                )
            }
            BenchError::Io(err) => write!(f, "Report I/O error: {}", err),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        BenchError::Io(err)
    }
}
