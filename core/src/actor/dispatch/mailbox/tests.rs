use mailroom_utils_rs::collections::{QueueBase, QueueError, QueueReader, QueueSize, QueueWriter};

use crate::actor::actor_id::ActorId;
use crate::actor::dispatch::Mailbox;
use crate::actor::message::Message;

fn id(s: &str) -> ActorId {
  ActorId::new(s).unwrap()
}

#[tokio::test]
async fn test_mailbox_has_fixed_capacity() {
  let mailbox = Mailbox::<String>::new(id("2"), 3);
  assert_eq!(mailbox.owner(), &id("2"));
  assert_eq!(mailbox.capacity().await, QueueSize::Limited(3));
  assert_eq!(mailbox.pending().await, 0);
}

#[tokio::test]
async fn test_mailbox_delivers_in_fifo_order() {
  let mut mailbox = Mailbox::<String>::new(id("2"), 3);
  for text in ["a", "b", "c"] {
    mailbox.offer(Message::new(text.to_string(), id("1"))).await.unwrap();
  }

  let payloads = mailbox
    .drain()
    .await
    .unwrap()
    .into_iter()
    .map(|m| m.payload().clone())
    .collect::<Vec<_>>();
  assert_eq!(payloads, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_full_mailbox_rejects_without_waiting() {
  let mut mailbox = Mailbox::<String>::new(id("2"), 1);
  mailbox.offer(Message::new("first".to_string(), id("1"))).await.unwrap();
  assert!(mailbox.is_full().await);

  let rejected = Message::new("second".to_string(), id("1"));
  assert_eq!(
    mailbox.offer(rejected.clone()).await,
    Err(QueueError::OfferError(rejected))
  );
  assert_eq!(mailbox.pending().await, 1);
}

#[tokio::test]
async fn test_poll_on_empty_mailbox_is_none() {
  let mut mailbox = Mailbox::<String>::new(id("2"), 1);
  assert_eq!(mailbox.poll().await.unwrap(), None);
}

#[tokio::test]
async fn test_clones_address_the_same_mailbox() {
  let mailbox = Mailbox::<u32>::new(id("2"), 2);
  let mut producer = mailbox.clone();
  let mut consumer = mailbox.clone();

  producer.offer(Message::new(42, id("1"))).await.unwrap();
  assert_eq!(mailbox.pending().await, 1);
  let message = consumer.poll().await.unwrap().unwrap();
  assert_eq!(message.payload(), &42);
  assert_eq!(message.sender(), &id("1"));
}
