//! Builder methods for creating errors with context

use super::types::{BoxError, ReleaseError};
use crate::types::ResourceKind;

impl ReleaseError {
    /// Create a release failure without an underlying cause
    #[must_use]
    pub fn failed(label: impl Into<String>, message: impl Into<String>) -> Self {
        ReleaseError::Failed {
            label: label.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a release failure with an underlying cause
    #[must_use]
    pub fn failed_with_source(
        label: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        ReleaseError::Failed {
            label: label.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Translate a foreign close failure into the uniform kind
    #[must_use]
    pub fn adaptation(
        kind: ResourceKind,
        label: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        ReleaseError::Adaptation {
            kind,
            label: label.into(),
            source: source.into(),
        }
    }

    /// Aggregate the failures collected while draining `attempted` entries.
    ///
    /// Returns `None` when `failures` is empty, so a clean drain never
    /// produces an error.
    #[must_use]
    pub fn drain(attempted: usize, failures: Vec<ReleaseError>) -> Option<Self> {
        let mut failures = failures.into_iter();
        let first = failures.next()?;
        Some(ReleaseError::Drain {
            attempted,
            first: Box::new(first),
            rest: failures.collect(),
        })
    }
}
