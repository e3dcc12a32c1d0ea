use thiserror::Error;

/// Failures of a registration attempt. Only that attempt is affected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  #[error("Actor id '{0}' is reserved")]
  ReservedId(String),
  #[error("Actor id '{0}' already exists")]
  DuplicateId(String),
  #[error("Actor id must not be empty")]
  EmptyId,
  #[error("Mailbox capacity must be positive, got {0}")]
  InvalidCapacity(usize),
}

/// Failures of a send. All of them are recoverable: the caller may retry or drop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
  #[error("No other actors to send message to")]
  NoPeers,
  #[error("Mailbox of actor '{target}' is full")]
  MailboxFull { target: String },
  #[error("Actor '{0}' not found")]
  UnknownActor(String),
}

impl SendError {
  pub fn is_mailbox_full(&self) -> bool {
    matches!(self, SendError::MailboxFull { .. })
  }
}

static_assertions::assert_impl_all!(RegistryError: Send, Sync);
static_assertions::assert_impl_all!(SendError: Send, Sync);
