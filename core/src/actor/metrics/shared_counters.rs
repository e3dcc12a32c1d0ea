use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use parking_lot::Mutex;

/// Point-in-time copy of the [`SharedCounters`], read under the counters lock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountersSnapshot {
  pub actor_count: u64,
  pub messages_sent: u64,
  pub messages_processed: u64,
}

impl Display for CountersSnapshot {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "N Actors: {} | Messages Sent: {} | Messages Received: {}",
      self.actor_count, self.messages_sent, self.messages_processed
    )
  }
}

/// Actor count and message totals shared by every actor of one registry.
///
/// All three fields sit behind one lock so a snapshot is never torn. Values
/// only grow. The lock is synchronous and held for a single increment; callers
/// count right after the queue operation, with no await in between.
#[derive(Debug, Clone, Default)]
pub struct SharedCounters {
  inner: Arc<Mutex<CountersSnapshot>>,
}

impl SharedCounters {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn increment_actor_count(&self) {
    let mut mg = self.inner.lock();
    mg.actor_count += 1;
  }

  pub(crate) fn increment_messages_sent(&self) {
    let mut mg = self.inner.lock();
    mg.messages_sent += 1;
  }

  pub(crate) fn increment_messages_processed(&self) {
    let mut mg = self.inner.lock();
    mg.messages_processed += 1;
  }

  pub fn snapshot(&self) -> CountersSnapshot {
    *self.inner.lock()
  }

  /// Holds the counters lock until the guard drops.
  #[cfg(test)]
  pub(crate) fn lock(&self) -> parking_lot::MutexGuard<'_, CountersSnapshot> {
    self.inner.lock()
  }
}

static_assertions::assert_impl_all!(SharedCounters: Send, Sync);
