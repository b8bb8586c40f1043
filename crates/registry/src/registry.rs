//! The resource registry: a stack of release obligations

use crate::adapters::{
    Connection, ConnectionAdapter, Cursor, CursorAdapter, ReleaseFn, Statement, StatementAdapter,
};
use crate::config::RegistryConfig;
use std::fmt;
use teardown_core::{BoxError, Release, ReleaseError, ResourceKind, Result, SharedHandle};
use tracing::{debug, trace, warn};

/// A registered release obligation
struct Entry<'a> {
    label: String,
    kind: ResourceKind,
    handle: Box<dyn Release + 'a>,
}

/// Holds the release obligations of one unit of work.
///
/// Entries are released last in, first out by [`release_all`], which keeps
/// going past failures and then reports them as one
/// [`ReleaseError::Drain`]. The registry can hold borrowed handles for `'a`,
/// so resources registered by reference must be declared before it.
///
/// Not synchronized: a registry belongs to a single owner.
///
/// [`release_all`]: ResourceRegistry::release_all
pub struct ResourceRegistry<'a> {
    entries: Vec<Entry<'a>>,
    config: RegistryConfig,
}

impl<'a> ResourceRegistry<'a> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Registry with room for `capacity` entries before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(RegistryConfig {
            initial_capacity: capacity,
            ..RegistryConfig::default()
        })
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a releasable handle and hand the same handle back.
    ///
    /// The registry keeps a clone of the handle, which must point at the
    /// caller's resource: `registry.register(&conn)` returns `&conn`,
    /// `registry.register(Rc::clone(&conn))` returns that `Rc`. Owned values
    /// are rejected at compile time, even when they implement `Clone`:
    ///
    /// ```compile_fail
    /// use teardown_registry::{Release, ResourceRegistry, Result};
    ///
    /// #[derive(Clone)]
    /// struct Socket;
    ///
    /// impl Release for Socket {
    ///     fn release(&self) -> Result<()> {
    ///         Ok(())
    ///     }
    /// }
    ///
    /// let mut registry = ResourceRegistry::new();
    /// let _socket = registry.register(Socket);
    /// ```
    pub fn register<R>(&mut self, resource: R) -> R
    where
        R: Release + SharedHandle + 'a,
    {
        self.push(None, Box::new(resource.clone()));
        resource
    }

    /// Like [`register`](Self::register), reporting the entry as `label`
    pub fn register_labeled<R>(&mut self, label: impl Into<String>, resource: R) -> R
    where
        R: Release + SharedHandle + 'a,
    {
        self.push(Some(label.into()), Box::new(resource.clone()));
        resource
    }

    /// Register a resource whose release goes through an adapter.
    ///
    /// `adapt` receives a clone of the `resource` handle and builds the
    /// [`Release`] wrapper that translates its native error.
    pub fn register_with<T, A>(&mut self, resource: T, adapt: impl FnOnce(T) -> A) -> T
    where
        T: SharedHandle,
        A: Release + 'a,
    {
        self.push(None, Box::new(adapt(resource.clone())));
        resource
    }

    pub fn register_connection<C>(&mut self, connection: C) -> C
    where
        C: Connection + SharedHandle + 'a,
    {
        self.register_with(connection, ConnectionAdapter::new)
    }

    pub fn register_statement<S>(&mut self, statement: S) -> S
    where
        S: Statement + SharedHandle + 'a,
    {
        self.register_with(statement, StatementAdapter::new)
    }

    pub fn register_cursor<C>(&mut self, cursor: C) -> C
    where
        C: Cursor + SharedHandle + 'a,
    {
        self.register_with(cursor, CursorAdapter::new)
    }

    /// Register a closure to run when the registry is drained
    pub fn defer<F, E>(&mut self, label: impl Into<String>, action: F)
    where
        F: FnOnce() -> std::result::Result<(), E> + 'a,
        E: Into<BoxError> + 'a,
    {
        self.push(None, Box::new(ReleaseFn::new(label, action)));
    }

    fn push(&mut self, label: Option<String>, handle: Box<dyn Release + 'a>) {
        let label = label.unwrap_or_else(|| handle.label());
        let kind = handle.kind();
        trace!(label = %label, kind = %kind, depth = self.entries.len() + 1, "registered resource");
        self.entries.push(Entry {
            label,
            kind,
            handle,
        });
    }

    /// Number of pending release obligations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels of pending entries, next to be released first
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().rev().map(|entry| entry.label.as_str())
    }

    /// Release every registered resource, most recent first.
    ///
    /// Every entry gets exactly one release attempt even when earlier ones
    /// fail. The registry is empty afterwards; any failures come back as a
    /// single [`ReleaseError::Drain`] whose source is the first of them.
    pub fn release_all(&mut self) -> Result<()> {
        let attempted = self.entries.len();
        if attempted == 0 {
            return Ok(());
        }

        debug!(count = attempted, "releasing registered resources");
        let mut failures = Vec::new();

        while let Some(entry) = self.entries.pop() {
            trace!(label = %entry.label, kind = %entry.kind, "releasing resource");
            if let Err(error) = entry.handle.release() {
                warn!(
                    label = %entry.label,
                    kind = %entry.kind,
                    error = %error,
                    "failed to release resource"
                );
                failures.push(error);
            }
        }

        match ReleaseError::drain(attempted, failures) {
            Some(error) => Err(error),
            None => {
                debug!(count = attempted, "released all resources");
                Ok(())
            }
        }
    }

    /// [`release_all`](Self::release_all), discarding any failure
    pub fn release_all_quietly(&mut self) {
        if let Err(error) = self.release_all() {
            warn!(
                failures = error.failure_count(),
                error = %error,
                "ignoring resource release failure"
            );
        }
    }
}

impl Default for ResourceRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ResourceRegistry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceRegistry")
            .field("pending", &self.labels().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl Drop for ResourceRegistry<'_> {
    fn drop(&mut self) {
        if self.entries.is_empty() {
            return;
        }

        if self.config.release_on_drop {
            warn!(
                pending = self.entries.len(),
                "registry dropped with pending resources, releasing them"
            );
            self.release_all_quietly();
        } else {
            warn!(
                pending = self.entries.len(),
                "registry dropped with pending resources, leaving them unreleased"
            );
        }
    }
}
