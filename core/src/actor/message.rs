use mailroom_utils_rs::collections::Element;
use serde::{Deserialize, Serialize};

use crate::actor::actor_id::ActorId;

/// A delivered payload together with the id of the actor that sent it.
///
/// Built at send time and consumed once on receive; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message<P> {
  payload: P,
  sender: ActorId,
}

impl<P> Message<P> {
  pub fn new(payload: P, sender: ActorId) -> Self {
    Self { payload, sender }
  }

  pub fn payload(&self) -> &P {
    &self.payload
  }

  pub fn sender(&self) -> &ActorId {
    &self.sender
  }

  pub fn into_parts(self) -> (P, ActorId) {
    (self.payload, self.sender)
  }
}

impl<P: Element> Element for Message<P> {}
