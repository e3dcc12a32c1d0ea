#[cfg(test)]
mod tests;

use async_trait::async_trait;
use mailroom_utils_rs::collections::{
  Element, MpscBoundedChannelQueue, QueueBase, QueueError, QueueReader, QueueSize, QueueWriter,
};

use crate::actor::actor_id::ActorId;
use crate::actor::message::Message;

/// Bounded FIFO of undelivered messages for one actor.
///
/// Many actors may offer into it concurrently; only the owner polls it.
/// Offering into a full mailbox fails at once and hands the message back.
#[derive(Debug, Clone)]
pub struct Mailbox<P> {
  owner: ActorId,
  user_mailbox: MpscBoundedChannelQueue<Message<P>>,
}

impl<P: Element> Mailbox<P> {
  pub(crate) fn new(owner: ActorId, capacity: usize) -> Self {
    Mailbox {
      owner,
      user_mailbox: MpscBoundedChannelQueue::new(capacity),
    }
  }

  pub fn owner(&self) -> &ActorId {
    &self.owner
  }

  /// Number of messages buffered right now.
  pub async fn pending(&self) -> usize {
    self.user_mailbox.len().await.to_usize()
  }
}

#[async_trait]
impl<P: Element> QueueBase<Message<P>> for Mailbox<P> {
  async fn len(&self) -> QueueSize {
    self.user_mailbox.len().await
  }

  async fn capacity(&self) -> QueueSize {
    self.user_mailbox.capacity().await
  }

  async fn is_full(&self) -> bool {
    self.user_mailbox.is_full().await
  }
}

#[async_trait]
impl<P: Element> QueueWriter<Message<P>> for Mailbox<P> {
  async fn offer(&mut self, element: Message<P>) -> Result<(), QueueError<Message<P>>> {
    self.user_mailbox.offer(element).await
  }
}

#[async_trait]
impl<P: Element> QueueReader<Message<P>> for Mailbox<P> {
  async fn poll(&mut self) -> Result<Option<Message<P>>, QueueError<Message<P>>> {
    self.user_mailbox.poll().await
  }

  async fn drain(&mut self) -> Result<Vec<Message<P>>, QueueError<Message<P>>> {
    self.user_mailbox.drain().await
  }
}
