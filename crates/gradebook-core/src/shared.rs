//! A cloneable handle for hosts that serve a catalog to several callers.
//!
//! The grade model itself does no locking. `SharedCatalog` serializes access
//! so that a multi-step mutation (add a mark, then recompute totals) is never
//! observed half-done.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::catalog::CourseCatalog;

#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<CourseCatalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: CourseCatalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    /// Run `f` with shared access to the catalog.
    pub fn read<T>(&self, f: impl FnOnce(&CourseCatalog) -> T) -> T {
        f(&self.lock())
    }

    /// Run `f` with exclusive access to the catalog.
    ///
    /// Everything inside `f` is one atomic step from the point of view of
    /// other handles.
    pub fn write<T>(&self, f: impl FnOnce(&mut CourseCatalog) -> T) -> T {
        f(&mut self.lock())
    }

    /// Clone the current catalog.
    pub fn snapshot(&self) -> CourseCatalog {
        self.lock().clone()
    }

    // Poison is ignored: every model operation leaves the catalog consistent.
    fn lock(&self) -> MutexGuard<'_, CourseCatalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
