//! Core release capability and error types for `teardown`.
//!
//! ## Key Components
//!
//! - **`errors`**: The uniform `ReleaseError` every release failure is
//!   translated into, and the `Result` alias used across the workspace.
//! - **`release`**: The `Release` capability trait a registry entry exposes,
//!   with forwarding impls for borrowed and shared handles, and the
//!   `SharedHandle` marker for handles a registry may clone.
//! - **`types`**: `ResourceKind`, used to tag entries and adaptation errors.
//! - **`constants`**: Shared defaults and environment variable names.

pub mod constants;
pub mod errors;
pub mod release;
pub mod types;

pub use self::{
    constants::*,
    errors::{BoxError, ReleaseError, Result},
    release::{Release, SharedHandle},
    types::ResourceKind,
};
