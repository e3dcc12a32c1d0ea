use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_condvar::Condvar;

/// Lets one task wait until a fixed number of other tasks have checked in.
#[derive(Clone)]
pub struct CountDownLatch {
  count: Arc<Mutex<usize>>,
  condvar: Arc<Condvar>,
}

impl Debug for CountDownLatch {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CountDownLatch").field("count", &self.count).finish()
  }
}

impl CountDownLatch {
  pub fn new(count: usize) -> Self {
    Self {
      count: Arc::new(Mutex::new(count)),
      condvar: Arc::new(Condvar::new()),
    }
  }

  /// Counting down past zero is a no-op.
  pub async fn count_down(&self) {
    let mut count = self.count.lock().await;
    *count = count.saturating_sub(1);
    if *count == 0 {
      self.condvar.notify_all();
    }
  }

  pub async fn count(&self) -> usize {
    *self.count.lock().await
  }

  pub async fn wait(&self) {
    let mut count = self.count.lock().await;
    while *count > 0 {
      count = self.condvar.wait(count).await;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[tokio::test]
  async fn test_wait_returns_immediately_at_zero() {
    let latch = CountDownLatch::new(0);
    tokio::time::timeout(Duration::from_secs(1), latch.wait())
      .await
      .expect("latch at zero must not block");
  }

  #[tokio::test]
  async fn test_wait_until_all_tasks_count_down() {
    let latch = CountDownLatch::new(3);
    for _ in 0..3 {
      let latch = latch.clone();
      tokio::spawn(async move {
        latch.count_down().await;
      });
    }
    tokio::time::timeout(Duration::from_secs(5), latch.wait())
      .await
      .expect("all tasks counted down");
    assert_eq!(latch.count().await, 0);
  }

  #[tokio::test]
  async fn test_count_down_saturates() {
    let latch = CountDownLatch::new(1);
    latch.count_down().await;
    latch.count_down().await;
    assert_eq!(latch.count().await, 0);
  }
}
