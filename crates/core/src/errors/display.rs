//! Display implementations for error types

use super::types::ReleaseError;
use std::fmt;

impl fmt::Display for ReleaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseError::Failed { label, message, .. } => {
                write!(f, "failed to release '{label}': {message}")
            }
            ReleaseError::Adaptation { kind, label, .. } => {
                write!(f, "failed to close {kind} '{label}'")
            }
            ReleaseError::Drain {
                attempted, rest, ..
            } => {
                let failed = 1 + rest.len();
                write!(
                    f,
                    "unable to release all resources: {failed} of {attempted} failed"
                )
            }
        }
    }
}
