//! Time source and id assignment for the store.

use crate::config::IdStrategy;
use crate::model::note::NoteId;
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond time source used for note timestamps and ids.
pub trait Clock {
    /// Current time as Unix epoch milliseconds.
    fn now_ms(&self) -> i64;
}

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
    }
}

/// Hands out strictly increasing ids for one store.
#[derive(Debug, Clone)]
pub(crate) struct IdGenerator {
    strategy: IdStrategy,
    last: i64,
}

impl IdGenerator {
    pub(crate) fn new(strategy: IdStrategy) -> Self {
        Self { strategy, last: 0 }
    }

    pub(crate) fn next_id(&mut self, now_ms: i64) -> NoteId {
        let floor = self.last.saturating_add(1);
        let next = match self.strategy {
            // Same-millisecond creations would collide on the raw timestamp.
            IdStrategy::MonotonicTimestamp => now_ms.max(floor),
            IdStrategy::Sequential => floor,
        };
        self.last = next;
        NoteId::new(next)
    }
}
