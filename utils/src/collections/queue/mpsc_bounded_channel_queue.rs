use std::sync::Arc;

use crate::collections::element::Element;
use crate::collections::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};
use async_trait::async_trait;
use tokio::sync::mpsc::error::{TryRecvError, TrySendError};
use tokio::sync::{mpsc, Mutex};


/// Bounded multi-producer FIFO backed by a tokio channel.
///
/// Every operation is non-blocking: `offer` hands the element back when the
/// channel is at capacity and `poll` yields `None` when nothing is buffered.
/// Clones share the same channel.
#[derive(Debug, Clone)]
pub struct MpscBoundedChannelQueue<E> {
  sender: mpsc::Sender<E>,
  receiver: Arc<Mutex<mpsc::Receiver<E>>>,
}

impl<E> MpscBoundedChannelQueue<E> {
  pub fn new(capacity: usize) -> Self {
    assert!(capacity > 0, "Capacity must be greater than zero");
    let (sender, receiver) = mpsc::channel(capacity);
    Self {
      sender,
      receiver: Arc::new(Mutex::new(receiver)),
    }
  }

  fn buffered(&self) -> usize {
    self.sender.max_capacity() - self.sender.capacity()
  }
}

#[async_trait]
impl<E: Element> QueueBase<E> for MpscBoundedChannelQueue<E> {
  async fn len(&self) -> QueueSize {
    QueueSize::Limited(self.buffered())
  }

  async fn capacity(&self) -> QueueSize {
    QueueSize::Limited(self.sender.max_capacity())
  }

  async fn is_full(&self) -> bool {
    self.sender.capacity() == 0
  }
}

#[async_trait]
impl<E: Element> QueueWriter<E> for MpscBoundedChannelQueue<E> {
  async fn offer(&mut self, element: E) -> Result<(), QueueError<E>> {
    match self.sender.try_send(element) {
      Ok(()) => Ok(()),
      Err(TrySendError::Full(e)) | Err(TrySendError::Closed(e)) => Err(QueueError::OfferError(e)),
    }
  }
}

#[async_trait]
impl<E: Element> QueueReader<E> for MpscBoundedChannelQueue<E> {
  async fn poll(&mut self) -> Result<Option<E>, QueueError<E>> {
    let mut receiver = self.receiver.lock().await;
    match receiver.try_recv() {
      Ok(element) => Ok(Some(element)),
      Err(TryRecvError::Empty) => Ok(None),
      Err(TryRecvError::Disconnected) => Err(QueueError::PollError),
    }
  }

  async fn drain(&mut self) -> Result<Vec<E>, QueueError<E>> {
    let mut receiver = self.receiver.lock().await;
    let mut elements = Vec::new();
    loop {
      match receiver.try_recv() {
        Ok(element) => elements.push(element),
        Err(TryRecvError::Empty) => return Ok(elements),
        Err(TryRecvError::Disconnected) => return Err(QueueError::PollError),
      }
    }
  }
}
