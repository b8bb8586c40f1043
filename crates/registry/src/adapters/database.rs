//! Database-style resources: connections, statements and cursors
//!
//! Drivers implement the close trait matching their handle and keep their
//! own error type; the adapters do the translation.

use std::rc::Rc;
use std::sync::Arc;
use teardown_core::{Release, ReleaseError, ResourceKind, Result};

/// A connection-like handle with its own close operation
pub trait Connection {
    type Error: std::error::Error + Send + Sync + 'static;

    fn close(&self) -> std::result::Result<(), Self::Error>;
}

/// A statement-like handle prepared against a connection
pub trait Statement {
    type Error: std::error::Error + Send + Sync + 'static;

    fn close(&self) -> std::result::Result<(), Self::Error>;
}

/// A cursor or result-set handle produced by a statement
pub trait Cursor {
    type Error: std::error::Error + Send + Sync + 'static;

    fn close(&self) -> std::result::Result<(), Self::Error>;
}

// Borrowed and shared handles close the resource they point at.
macro_rules! forward_close {
    ($trait:ident, $($wrapper:ty),+) => {
        $(
            impl<T: $trait + ?Sized> $trait for $wrapper {
                type Error = T::Error;

                fn close(&self) -> std::result::Result<(), Self::Error> {
                    (**self).close()
                }
            }
        )+
    };
}

forward_close!(Connection, &T, Box<T>, Rc<T>, Arc<T>);
forward_close!(Statement, &T, Box<T>, Rc<T>, Arc<T>);
forward_close!(Cursor, &T, Box<T>, Rc<T>, Arc<T>);

macro_rules! close_adapter {
    ($(#[$meta:meta])* $adapter:ident, $trait:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $adapter<T> {
            inner: T,
            label: Option<String>,
        }

        impl<T: $trait> $adapter<T> {
            pub fn new(inner: T) -> Self {
                Self { inner, label: None }
            }

            /// Adapter that reports `label` in logs and errors
            pub fn labeled(inner: T, label: impl Into<String>) -> Self {
                Self {
                    inner,
                    label: Some(label.into()),
                }
            }

            pub fn get_ref(&self) -> &T {
                &self.inner
            }

            /// Unwrap the adapter without closing the handle
            pub fn into_inner(self) -> T {
                self.inner
            }
        }

        impl<T: $trait> Release for $adapter<T> {
            fn release(&self) -> Result<()> {
                self.inner
                    .close()
                    .map_err(|e| ReleaseError::adaptation($kind, self.label(), e))
            }

            fn kind(&self) -> ResourceKind {
                $kind
            }

            fn label(&self) -> String {
                self.label
                    .clone()
                    .unwrap_or_else(|| $kind.as_str().to_string())
            }
        }
    };
}

close_adapter!(
    /// Releases a [`Connection`] by closing it
    ConnectionAdapter,
    Connection,
    ResourceKind::Connection
);
close_adapter!(
    /// Releases a [`Statement`] by closing it
    StatementAdapter,
    Statement,
    ResourceKind::Statement
);
close_adapter!(
    /// Releases a [`Cursor`] by closing it
    CursorAdapter,
    Cursor,
    ResourceKind::Cursor
);
