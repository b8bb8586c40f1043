//! Ad-hoc release closures

use std::cell::Cell;
use std::fmt;
use teardown_core::{BoxError, Release, ReleaseError, ResourceKind, Result};

/// A release obligation expressed as a closure.
///
/// The closure runs at most once; releasing again is a no-op.
pub struct ReleaseFn<F> {
    label: String,
    action: Cell<Option<F>>,
}

impl<F, E> ReleaseFn<F>
where
    F: FnOnce() -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    pub fn new(label: impl Into<String>, action: F) -> Self {
        Self {
            label: label.into(),
            action: Cell::new(Some(action)),
        }
    }
}

impl<F> fmt::Debug for ReleaseFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseFn")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl<F, E> Release for ReleaseFn<F>
where
    F: FnOnce() -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    fn release(&self) -> Result<()> {
        match self.action.take() {
            Some(action) => action()
                .map_err(|e| ReleaseError::adaptation(ResourceKind::Deferred, &self.label, e)),
            None => Ok(()),
        }
    }

    fn kind(&self) -> ResourceKind {
        ResourceKind::Deferred
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}
