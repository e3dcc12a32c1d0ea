use crate::actor::ConfigOption;

pub const DEFAULT_MAILBOX_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Capacity shared by every mailbox of a registry.
  pub mailbox_capacity: usize,
  pub log_prefix: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
      log_prefix: "".to_string(),
    }
  }
}

impl Config {
  pub fn from(options: impl IntoIterator<Item = ConfigOption>) -> Config {
    let mut config = Config::default();
    for option in options {
      option.apply(&mut config);
    }
    config
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.mailbox_capacity, DEFAULT_MAILBOX_CAPACITY);
    assert_eq!(config.log_prefix, "");
  }

  #[test]
  fn test_from_options_applies_in_order() {
    let config = Config::from([
      ConfigOption::with_mailbox_capacity(1),
      ConfigOption::with_log_prefix("demo"),
      ConfigOption::with_mailbox_capacity(8),
    ]);
    assert_eq!(config.mailbox_capacity, 8);
    assert_eq!(config.log_prefix, "demo");
  }
}
