use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::actor::actor_error::RegistryError;

/// Target id that fans a send out to every other registered actor.
pub const BROADCAST: &str = "all";

/// Name of a registered actor.
///
/// Never empty and never equal to [`BROADCAST`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActorId(String);

impl ActorId {
  pub fn new(id: impl Into<String>) -> Result<Self, RegistryError> {
    let id = id.into();
    if id.is_empty() {
      return Err(RegistryError::EmptyId);
    }
    if id == BROADCAST {
      return Err(RegistryError::ReservedId(id));
    }
    Ok(Self(id))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for ActorId {
  type Error = RegistryError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl TryFrom<&str> for ActorId {
  type Error = RegistryError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<ActorId> for String {
  fn from(value: ActorId) -> Self {
    value.0
  }
}

impl AsRef<str> for ActorId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Borrow<str> for ActorId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl Display for ActorId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_accepts_plain_id() {
    let id = ActorId::new("1").unwrap();
    assert_eq!(id.as_str(), "1");
    assert_eq!(id.to_string(), "1");
  }

  #[test]
  fn test_new_rejects_broadcast_target() {
    assert_eq!(ActorId::new(BROADCAST), Err(RegistryError::ReservedId("all".to_string())));
  }

  #[test]
  fn test_new_rejects_empty() {
    assert_eq!(ActorId::new(""), Err(RegistryError::EmptyId));
  }

  #[test]
  fn test_serde_validates_on_deserialize() {
    let id = ActorId::new("worker").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"worker\"");
    assert_eq!(serde_json::from_str::<ActorId>(&json).unwrap(), id);
    assert!(serde_json::from_str::<ActorId>("\"all\"").is_err());
  }
}
