//! The storage seam for the shared counter.
//!
//! The trait keeps the fallback rules explicit instead of burying them in a
//! request handler:
//! - `Err(_)` means the backing storage itself failed (callers log this and
//!   continue from zero);
//! - `Ok(None)` means storage was readable but held no usable value
//!   (silently treated as zero);
//! - `Ok(Some(v))` is the last successfully stored value.
//!
//! Nothing in this contract promises atomicity between a `load` and the
//! following `save`. Two concurrent read-modify-write sequences can both
//! observe the same value and both store the same increment; that lost
//! update is an accepted property of the demo, not a bug in implementors.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{Result, TallyError};

/// Narrow read/write interface over the shared counter value.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Load the current value, if storage holds a usable one.
    async fn load(&self) -> Result<Option<u64>>;

    /// Overwrite the stored value.
    async fn save(&self, value: u64) -> Result<()>;
}

/// In-memory store backed by a mutex cell.
///
/// Used by tests and as a per-process backend; it shares nothing across
/// replicas, which is exactly what the demo's file store is there to fix.
#[derive(Debug, Default)]
pub struct MemStore {
    cell: Mutex<Option<u64>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing value.
    pub fn with_value(value: u64) -> Self {
        Self {
            cell: Mutex::new(Some(value)),
        }
    }
}

#[async_trait]
impl CounterStore for MemStore {
    async fn load(&self) -> Result<Option<u64>> {
        match self.cell.lock() {
            Ok(cell) => Ok(*cell),
            // Poisoned cell means a holder panicked; report it as a storage
            // layer failure instead of propagating the panic.
            Err(_) => Err(TallyError::Internal("counter cell poisoned".into())),
        }
    }

    async fn save(&self, value: u64) -> Result<()> {
        match self.cell.lock() {
            Ok(mut cell) => {
                *cell = Some(value);
                Ok(())
            }
            Err(_) => Err(TallyError::Internal("counter cell poisoned".into())),
        }
    }
}
