
use std::sync::Arc;

use dashmap::DashMap;
use mailroom_utils_rs::collections::{DashMapExtension, Element};
use tokio::sync::RwLock;

use crate::actor::actor_error::{RegistryError, SendError};
use crate::actor::actor_handle::Actor;
use crate::actor::actor_id::ActorId;
use crate::actor::config::Config;
use crate::actor::config_option::ConfigOption;
use crate::actor::dispatch::Mailbox;
use crate::actor::metrics::SharedCounters;

/// Append-only map from actor id to mailbox, plus the counters of its actors.
///
/// Registration is serialized by the `order` lock and keeps insertion order,
/// which is the order [`MailboxRegistry::all_excluding`] reports. Clones share
/// the same registry.
#[derive(Debug, Clone)]
pub struct MailboxRegistry<P> {
  inner: Arc<RegistryInner<P>>,
}

#[derive(Debug)]
struct RegistryInner<P> {
  config: Config,
  mailboxes: DashMap<ActorId, Mailbox<P>>,
  order: RwLock<Vec<ActorId>>,
  counters: SharedCounters,
}

impl<P: Element> MailboxRegistry<P> {
  pub fn new(mailbox_capacity: usize) -> Result<Self, RegistryError> {
    Self::new_with_config(Config::from([ConfigOption::with_mailbox_capacity(mailbox_capacity)]))
  }

  pub fn new_with_config(config: Config) -> Result<Self, RegistryError> {
    if config.mailbox_capacity == 0 {
      return Err(RegistryError::InvalidCapacity(config.mailbox_capacity));
    }
    Ok(Self {
      inner: Arc::new(RegistryInner {
        config,
        mailboxes: DashMap::new(),
        order: RwLock::new(Vec::new()),
        counters: SharedCounters::new(),
      }),
    })
  }

  /// Creates a mailbox for `id` and returns the actor bound to it.
  pub async fn register(&self, id: impl Into<String>) -> Result<Actor<P>, RegistryError> {
    let id = ActorId::new(id)?;
    let mut order = self.inner.order.write().await;
    let capacity = self.inner.config.mailbox_capacity;
    let mailbox = self
      .inner
      .mailboxes
      .store_if_absent_with(id.clone(), || Mailbox::new(id.clone(), capacity))
      .map_err(|_| RegistryError::DuplicateId(id.to_string()))?;
    order.push(id.clone());
    drop(order);

    self.inner.counters.increment_actor_count();
    tracing::info!("{}Actor {} - Created", self.log_prefix(), id);
    Ok(Actor::new(id, mailbox, self.clone()))
  }

  pub fn resolve(&self, id: &str) -> Result<Mailbox<P>, SendError> {
    self
      .inner
      .mailboxes
      .get(id)
      .map(|entry| entry.value().clone())
      .ok_or_else(|| SendError::UnknownActor(id.to_string()))
  }

  /// Every registered actor except `excluding`, in registration order.
  pub async fn all_excluding(&self, excluding: &ActorId) -> Vec<(ActorId, Mailbox<P>)> {
    let order = self.inner.order.read().await;
    order
      .iter()
      .filter(|id| *id != excluding)
      .filter_map(|id| self.inner.mailboxes.get(id).map(|entry| (id.clone(), entry.value().clone())))
      .collect()
  }

  pub async fn ids(&self) -> Vec<ActorId> {
    self.inner.order.read().await.clone()
  }

  pub fn len(&self) -> usize {
    self.inner.mailboxes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.mailboxes.is_empty()
  }

  /// Sum of the messages currently buffered across all mailboxes.
  pub async fn pending(&self) -> usize {
    let mailboxes = self
      .inner
      .mailboxes
      .iter()
      .map(|entry| entry.value().clone())
      .collect::<Vec<_>>();
    let mut pending = 0;
    for mailbox in mailboxes {
      pending += mailbox.pending().await;
    }
    pending
  }

  pub fn mailbox_capacity(&self) -> usize {
    self.inner.config.mailbox_capacity
  }

  pub fn counters(&self) -> &SharedCounters {
    &self.inner.counters
  }

  pub fn config(&self) -> &Config {
    &self.inner.config
  }

  pub(crate) fn log_prefix(&self) -> &str {
    &self.inner.config.log_prefix
  }
}

static_assertions::assert_impl_all!(MailboxRegistry<String>: Send, Sync);
