//! Error types for release operations

mod builders;
mod display;
mod types;

pub use types::{BoxError, ReleaseError, Result};
