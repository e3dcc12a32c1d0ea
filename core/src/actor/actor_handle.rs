
use mailroom_utils_rs::collections::{Element, QueueError, QueueReader, QueueWriter};

use crate::actor::actor_error::SendError;
use crate::actor::actor_id::{ActorId, BROADCAST};
use crate::actor::dispatch::Mailbox;
use crate::actor::mailbox_registry::MailboxRegistry;
use crate::actor::message::Message;
use crate::actor::metrics::SharedCounters;

/// A registered actor: sends to its peers and consumes its own mailbox.
///
/// Neither `send` nor the receive operations ever wait for mailbox space or
/// for a message to arrive.
#[derive(Debug, Clone)]
pub struct Actor<P> {
  id: ActorId,
  mailbox: Mailbox<P>,
  registry: MailboxRegistry<P>,
}

impl<P: Element> Actor<P> {
  pub(crate) fn new(id: ActorId, mailbox: Mailbox<P>, registry: MailboxRegistry<P>) -> Self {
    Self { id, mailbox, registry }
  }

  pub fn id(&self) -> &ActorId {
    &self.id
  }

  pub fn registry(&self) -> &MailboxRegistry<P> {
    &self.registry
  }

  pub fn counters(&self) -> &SharedCounters {
    self.registry.counters()
  }

  /// Sends `payload` to `target`, or to every other actor when `target` is `"all"`.
  ///
  /// A broadcast stops at the first full mailbox and reports it; messages
  /// already enqueued stay enqueued and stay counted.
  pub async fn send(&self, payload: P, target: &str) -> Result<(), SendError> {
    if self.registry.len() < 2 {
      tracing::warn!("{}Actor {} - No other actors to send message to", self.prefix(), self.id);
      return Err(SendError::NoPeers);
    }
    if target == BROADCAST {
      self.broadcast(payload).await
    } else {
      self.tell(payload, target).await
    }
  }

  async fn broadcast(&self, payload: P) -> Result<(), SendError> {
    for (peer, mut mailbox) in self.registry.all_excluding(&self.id).await {
      let message = Message::new(payload.clone(), self.id.clone());
      match mailbox.offer(message).await {
        Ok(()) => {
          tracing::debug!(
            "{}Actor {} - Sending message {:?} to '{}' - {}",
            self.prefix(),
            self.id,
            payload,
            BROADCAST,
            peer
          );
          self.counters().increment_messages_sent();
        }
        Err(err) => return Err(self.offer_failed(peer.as_str(), err)),
      }
    }
    Ok(())
  }

  async fn tell(&self, payload: P, target: &str) -> Result<(), SendError> {
    let mut mailbox = self.registry.resolve(target).inspect_err(|_| {
      tracing::warn!("{}Actor {} - Actor {} not found", self.prefix(), self.id, target);
    })?;
    let message = Message::new(payload, self.id.clone());
    match mailbox.offer(message).await {
      Ok(()) => {
        tracing::debug!("{}Actor {} - Sent message to {}", self.prefix(), self.id, target);
        self.counters().increment_messages_sent();
        Ok(())
      }
      Err(err) => Err(self.offer_failed(target, err)),
    }
  }

  fn offer_failed(&self, target: &str, err: QueueError<Message<P>>) -> SendError {
    if let QueueError::OfferError(message) = &err {
      tracing::warn!(
        "{}Actor {} - Mailbox of {} is full, dropped {:?}",
        self.prefix(),
        self.id,
        target,
        message.payload()
      );
    }
    SendError::MailboxFull {
      target: target.to_string(),
    }
  }

  /// Takes at most one message from this actor's mailbox.
  ///
  /// `None` means the mailbox was empty, which is not an error.
  pub async fn receive_once(&self) -> Option<Message<P>> {
    let mut mailbox = self.mailbox.clone();
    match mailbox.poll().await {
      Ok(Some(message)) => {
        self.processed(&message);
        Some(message)
      }
      Ok(None) => {
        tracing::trace!("{}Actor {} - No messages to process.", self.prefix(), self.id);
        None
      }
      Err(err) => {
        tracing::error!("{}Actor {} - Failed to poll mailbox: {}", self.prefix(), self.id, err);
        None
      }
    }
  }

  /// Takes everything buffered in this actor's mailbox right now, oldest first.
  ///
  /// Returns once the mailbox reports empty; it does not wait for producers.
  pub async fn receive_many(&self) -> Vec<Message<P>> {
    let mut mailbox = self.mailbox.clone();
    let messages = match mailbox.drain().await {
      Ok(messages) => messages,
      Err(err) => {
        tracing::error!("{}Actor {} - Failed to drain mailbox: {}", self.prefix(), self.id, err);
        return Vec::new();
      }
    };
    for message in &messages {
      self.processed(message);
    }
    messages
  }

  fn processed(&self, message: &Message<P>) {
    self.counters().increment_messages_processed();
    tracing::debug!(
      "{}Actor {} - Processed message {:?} from sender {}",
      self.prefix(),
      self.id,
      message.payload(),
      message.sender()
    );
  }

  fn prefix(&self) -> &str {
    self.registry.log_prefix()
  }
}

static_assertions::assert_impl_all!(Actor<String>: Send, Sync);
