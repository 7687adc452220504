//! Per-symbol mutual exclusion
//!
//! All mutating operations against one symbol are serialized; operations
//! on different symbols never contend. The returned guard releases the
//! lock when dropped, so release happens on every exit path - normal
//! return, early return or error.
//!
//! Not re-entrant: a holder that acquires the same symbol again while
//! holding it will deadlock, by design, as a guard against accidental
//! recursive mutation.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use helios_core::Symbol;

/// Keyed async locks, one per traded symbol
///
/// Waiters for the same symbol queue in arrival order (tokio's mutex is
/// FIFO-fair). Lock entries are created on first use and kept for the
/// lifetime of the map; the set of traded symbols is small and bounded.
pub struct SymbolLocks {
    locks: DashMap<Symbol, Arc<Mutex<()>>>,
}

impl SymbolLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Acquire the lock for a symbol, waiting if another holder has it
    ///
    /// The guard owns the lock; dropping it releases.
    pub async fn acquire(&self, symbol: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(symbol.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// True when some holder currently has the symbol's lock
    pub fn is_locked(&self, symbol: &str) -> bool {
        self.locks
            .get(symbol)
            .is_some_and(|l| l.try_lock().is_err())
    }
}

impl Default for SymbolLocks {
    fn default() -> Self {
        Self::new()
    }
}
