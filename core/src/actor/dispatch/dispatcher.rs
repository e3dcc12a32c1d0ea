//! Sequential drain pass over a set of actors.

use mailroom_utils_rs::collections::Element;

use crate::actor::actor_handle::Actor;
use crate::actor::actor_id::ActorId;
use crate::actor::message::Message;

#[cfg(test)]
mod tests;

/// What one actor's mailbox held when the dispatcher drained it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrainOutcome<P> {
  pub actor_id: ActorId,
  pub messages: Vec<Message<P>>,
}

/// Flushes mailboxes one actor at a time, in the order given.
///
/// Actors are never drained in parallel; a pass costs the sum of its drains.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
  log_prefix: String,
}

impl Dispatcher {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_log_prefix(mut self, log_prefix: impl Into<String>) -> Self {
    self.log_prefix = log_prefix.into();
    self
  }

  pub async fn run<P: Element>(&self, actors: &[Actor<P>]) -> Vec<DrainOutcome<P>> {
    tracing::info!("{}Dispatcher::run: draining {} actors", self.log_prefix, actors.len());
    let mut outcomes = Vec::with_capacity(actors.len());
    for actor in actors {
      let messages = actor.receive_many().await;
      if messages.is_empty() {
        tracing::debug!("{}Actor {} - No messages to process.", self.log_prefix, actor.id());
      }
      outcomes.push(DrainOutcome {
        actor_id: actor.id().clone(),
        messages,
      });
    }
    tracing::info!(
      "{}Dispatcher::run: drained {} messages",
      self.log_prefix,
      outcomes.iter().map(|o| o.messages.len()).sum::<usize>()
    );
    outcomes
  }
}
