//! A lock-guarded registry handle for multi-threaded hosts.
//!
//! [`SharedGrid`] wraps one [`GridRegistry`] in an `Arc<Mutex<_>>`. The
//! registry is the unit of exclusion: every call holds the lock until it
//! returns, so a merge loop or split is never observed half-done.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use plotgrid_core::{AreaTag, PlaceError, Pos, RemoveError};

use crate::outcome::{Placement, Removal};
use crate::registry::GridRegistry;

// Compile-time assertion: SharedGrid must be Send + Sync for Send handles.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SharedGrid<u64>>();
};

// ── SharedGridError ────────────────────────────────────────────────

/// Errors from a [`SharedGrid`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SharedGridError {
    /// The placement was rejected.
    Place(PlaceError),
    /// The removal was rejected.
    Remove(RemoveError),
    /// A previous holder of the lock panicked; the registry may be
    /// mid-operation and is no longer served.
    Poisoned,
}

impl fmt::Display for SharedGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place(e) => write!(f, "place: {e}"),
            Self::Remove(e) => write!(f, "remove: {e}"),
            Self::Poisoned => write!(f, "grid lock poisoned"),
        }
    }
}

impl Error for SharedGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Place(e) => Some(e),
            Self::Remove(e) => Some(e),
            Self::Poisoned => None,
        }
    }
}

impl From<PlaceError> for SharedGridError {
    fn from(e: PlaceError) -> Self {
        Self::Place(e)
    }
}

impl From<RemoveError> for SharedGridError {
    fn from(e: RemoveError) -> Self {
        Self::Remove(e)
    }
}

// ── SharedGrid ─────────────────────────────────────────────────────

/// Cloneable, thread-safe handle to one registry.
///
/// Clones share the same registry.
#[derive(Debug)]
pub struct SharedGrid<H> {
    inner: Arc<Mutex<GridRegistry<H>>>,
}

impl<H> Clone for SharedGrid<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H> SharedGrid<H> {
    /// Take ownership of `registry` and share it.
    pub fn new(registry: GridRegistry<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// [`GridRegistry::place`] under the lock.
    pub fn place(&self, pos: Pos, handle: H, tag: AreaTag) -> Result<Placement, SharedGridError> {
        Ok(self.lock()?.place(pos, handle, tag)?)
    }

    /// [`GridRegistry::remove`] under the lock.
    pub fn remove(&self, pos: Pos) -> Result<Removal<H>, SharedGridError> {
        Ok(self.lock()?.remove(pos)?)
    }

    /// Run a read-only query under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&GridRegistry<H>) -> R) -> Result<R, SharedGridError> {
        let guard = self.lock()?;
        Ok(f(&*guard))
    }

    /// Whether a previous holder panicked while holding the lock.
    ///
    /// Once poisoned, every `place`, `remove` and `read` on every clone
    /// fails with [`SharedGridError::Poisoned`].
    pub fn is_poisoned(&self) -> bool {
        self.inner.is_poisoned()
    }

    /// Take the registry out if this is the last handle.
    ///
    /// Returns `Err(self)` while other clones are alive. The sole owner
    /// gets the registry back even after poisoning, since no other
    /// handle can observe it; check [`is_poisoned`](Self::is_poisoned)
    /// first to decide whether its contents are trustworthy. A poisoned
    /// grid is never handed back as a working `SharedGrid`.
    pub fn try_into_inner(self) -> Result<GridRegistry<H>, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, GridRegistry<H>>, SharedGridError> {
        self.inner.lock().map_err(|_| SharedGridError::Poisoned)
    }
}
