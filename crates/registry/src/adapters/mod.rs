//! Adapters from foreign release signatures to [`Release`](teardown_core::Release)
//!
//! Each adapter translates its resource's native close error into
//! [`ReleaseError::Adaptation`](teardown_core::ReleaseError::Adaptation),
//! keeping the native error as the source.

mod database;
mod deferred;

pub use database::{
    Connection, ConnectionAdapter, Cursor, CursorAdapter, Statement, StatementAdapter,
};
pub use deferred::ReleaseFn;
