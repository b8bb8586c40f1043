//! The release capability held by every registry entry

use crate::errors::Result;
use crate::types::ResourceKind;
use std::rc::Rc;
use std::sync::Arc;

/// A handle to an externally held asset that must be explicitly released.
///
/// `release` takes `&self` so the owner can keep using the handle while a
/// registry holds its release obligation. Implementations should treat a
/// second call as a no-op where they can; the registry itself calls it at
/// most once per registration.
pub trait Release {
    /// Free the underlying asset
    fn release(&self) -> Result<()>;

    /// What sort of resource this is, for logs and errors
    fn kind(&self) -> ResourceKind {
        ResourceKind::Generic
    }

    /// Name used for this resource in logs and errors
    fn label(&self) -> String {
        self.kind().as_str().to_string()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A handle whose clones all point at one resource.
///
/// Implemented only for `&T`, `Rc<T>` and `Arc<T>`. A registry keeps a clone
/// of the handle and hands the original back, so releasing the clone must
/// release the caller's resource. Owned values do not qualify:
///
/// ```compile_fail
/// use teardown_core::{Release, Result, SharedHandle};
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
/// fn requires_handle<H: SharedHandle>(_: H) {}
///
/// requires_handle(Socket);
/// ```
pub trait SharedHandle: Clone + sealed::Sealed {}

impl<T: ?Sized> sealed::Sealed for &T {}
impl<T: ?Sized> SharedHandle for &T {}

impl<T: ?Sized> sealed::Sealed for Rc<T> {}
impl<T: ?Sized> SharedHandle for Rc<T> {}

impl<T: ?Sized> sealed::Sealed for Arc<T> {}
impl<T: ?Sized> SharedHandle for Arc<T> {}

impl<R: Release + ?Sized> Release for &R {
    fn release(&self) -> Result<()> {
        (**self).release()
    }

    fn kind(&self) -> ResourceKind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<R: Release + ?Sized> Release for Box<R> {
    fn release(&self) -> Result<()> {
        (**self).release()
    }

    fn kind(&self) -> ResourceKind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<R: Release + ?Sized> Release for Rc<R> {
    fn release(&self) -> Result<()> {
        (**self).release()
    }

    fn kind(&self) -> ResourceKind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}

impl<R: Release + ?Sized> Release for Arc<R> {
    fn release(&self) -> Result<()> {
        (**self).release()
    }

    fn kind(&self) -> ResourceKind {
        (**self).kind()
    }

    fn label(&self) -> String {
        (**self).label()
    }
}
