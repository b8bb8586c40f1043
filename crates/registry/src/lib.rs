//! Collect the resources a unit of work acquires and release them together.
//!
//! A [`ResourceRegistry`] is a stack of release obligations. Resources are
//! released in reverse registration order, and a failing release never stops
//! the rest of the drain.
//!
//! ```
//! use teardown_registry::{Release, ResourceRegistry, Result};
//!
//! struct Lock;
//!
//! impl Release for Lock {
//!     fn release(&self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let (outer, inner) = (Lock, Lock);
//! let mut registry = ResourceRegistry::new();
//! let _outer: &Lock = registry.register(&outer);
//! let _inner: &Lock = registry.register(&inner);
//! assert_eq!(registry.len(), 2);
//!
//! registry.release_all().unwrap();
//! assert!(registry.is_empty());
//! ```

pub mod adapters;
pub mod config;
pub mod guard;
pub mod logging;
pub mod registry;

pub use adapters::{
    Connection, ConnectionAdapter, Cursor, CursorAdapter, ReleaseFn, Statement,
    StatementAdapter,
};
pub use config::{ConfigError, RegistryConfig};
pub use guard::ScopedRegistry;
pub use registry::ResourceRegistry;
pub use teardown_core::{
    BoxError, Release, ReleaseError, ResourceKind, Result, SharedHandle,
};
