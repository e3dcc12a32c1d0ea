use crate::actor::config::Config;

#[derive(Debug, Clone)]
pub enum ConfigOption {
  SetMailboxCapacity(usize),
  SetLogPrefix(String),
}

impl ConfigOption {
  pub fn apply(&self, config: &mut Config) {
    match self {
      ConfigOption::SetMailboxCapacity(capacity) => {
        config.mailbox_capacity = *capacity;
      }
      ConfigOption::SetLogPrefix(prefix) => {
        config.log_prefix = prefix.clone();
      }
    }
  }

  pub fn with_mailbox_capacity(capacity: usize) -> ConfigOption {
    ConfigOption::SetMailboxCapacity(capacity)
  }

  pub fn with_log_prefix(prefix: impl Into<String>) -> ConfigOption {
    ConfigOption::SetLogPrefix(prefix.into())
  }
}
