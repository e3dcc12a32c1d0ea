pub mod actor_error;
pub mod actor_handle;
pub mod actor_id;
pub mod config;
pub mod config_option;
pub mod dispatch;
pub mod mailbox_registry;
pub mod message;
pub mod metrics;

pub use self::{
  actor_error::*, actor_handle::*, actor_id::*, config::*, config_option::*, mailbox_registry::*, message::*, metrics::*,
};
