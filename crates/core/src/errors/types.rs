//! Core error type definitions

use crate::types::ResourceKind;

/// Boxed foreign error carried as the cause of a translated failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Uniform error kind every release failure is translated into
#[derive(Debug)]
pub enum ReleaseError {
    /// A native `Release` implementor failed to release itself
    Failed {
        label: String,
        message: String,
        source: Option<BoxError>,
    },

    /// A foreign resource's own close operation failed
    Adaptation {
        kind: ResourceKind,
        label: String,
        source: BoxError,
    },

    /// One or more entries failed during a drain.
    ///
    /// `first` is the earliest failure in drain order and is what
    /// `source()` reports; later failures are kept in `rest`.
    Drain {
        attempted: usize,
        first: Box<ReleaseError>,
        rest: Vec<ReleaseError>,
    },
}

// Drain source is the inner error, not its box.
impl std::error::Error for ReleaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReleaseError::Failed { source, .. } => source
                .as_deref()
                .map(|e| e as &(dyn std::error::Error + 'static)),
            ReleaseError::Adaptation { source, .. } => Some(&**source),
            ReleaseError::Drain { first, .. } => Some(&**first),
        }
    }
}

impl ReleaseError {
    /// Number of individual failures this error stands for
    pub fn failure_count(&self) -> usize {
        match self {
            ReleaseError::Drain { rest, .. } => 1 + rest.len(),
            _ => 1,
        }
    }

    /// Individual failures in the order they occurred.
    ///
    /// For a non-aggregate error this yields the error itself.
    pub fn failures(&self) -> Vec<&ReleaseError> {
        match self {
            ReleaseError::Drain { first, rest, .. } => {
                std::iter::once(first.as_ref()).chain(rest.iter()).collect()
            }
            other => vec![other],
        }
    }

    /// Label of the resource that failed, if this is not an aggregate
    pub fn label(&self) -> Option<&str> {
        match self {
            ReleaseError::Failed { label, .. } | ReleaseError::Adaptation { label, .. } => {
                Some(label)
            }
            ReleaseError::Drain { .. } => None,
        }
    }

    pub fn is_drain(&self) -> bool {
        matches!(self, ReleaseError::Drain { .. })
    }
}
