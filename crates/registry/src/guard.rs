//! Scope guard that always drains its registry

use crate::config::RegistryConfig;
use crate::registry::ResourceRegistry;
use std::ops::{Deref, DerefMut};
use teardown_core::Result;

/// A [`ResourceRegistry`] that is drained quietly when the guard goes out
/// of scope, whatever `release_on_drop` says.
///
/// Call [`finish`](Self::finish) on the success path to drain explicitly and
/// see the outcome; early returns and panics fall back to the quiet drain.
#[derive(Debug)]
pub struct ScopedRegistry<'a> {
    registry: ResourceRegistry<'a>,
}

impl<'a> ScopedRegistry<'a> {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            registry: ResourceRegistry::with_config(config),
        }
    }

    /// Drain now and report the result
    pub fn finish(mut self) -> Result<()> {
        self.registry.release_all()
    }
}

impl Default for ScopedRegistry<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Deref for ScopedRegistry<'a> {
    type Target = ResourceRegistry<'a>;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}

impl DerefMut for ScopedRegistry<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.registry
    }
}

impl Drop for ScopedRegistry<'_> {
    fn drop(&mut self) {
        self.registry.release_all_quietly();
    }
}
