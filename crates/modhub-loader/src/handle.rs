//! Handles owning constructed module instances.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use libloading::Library;

/// A constructed module instance, dereferencing to the contract type.
///
/// The handle owns a clone of the package's mapped library; the code the
/// instance runs stays mapped until the last handle from that package is
/// dropped.
pub struct ModuleHandle<T: ?Sized> {
    // the instance must drop before the library its vtable points into
    instance: Box<T>,
    _library: Arc<Library>,
}

impl<T: ?Sized> ModuleHandle<T> {
    pub(crate) fn new(instance: Box<T>, library: Arc<Library>) -> Self {
        Self {
            instance,
            _library: library,
        }
    }
}

impl<T: ?Sized> Deref for ModuleHandle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.instance
    }
}

impl<T: ?Sized> DerefMut for ModuleHandle<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.instance
    }
}

impl<T: ?Sized> fmt::Debug for ModuleHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleHandle").finish_non_exhaustive()
    }
}
