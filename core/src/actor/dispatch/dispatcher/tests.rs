use crate::actor::actor_id::BROADCAST;
use crate::actor::dispatch::Dispatcher;
use crate::actor::mailbox_registry::MailboxRegistry;

#[tokio::test]
async fn test_run_drains_actors_in_given_order() {
  let registry = MailboxRegistry::<String>::new(3).unwrap();
  let a1 = registry.register("1").await.unwrap();
  let a2 = registry.register("2").await.unwrap();
  let a3 = registry.register("3").await.unwrap();

  a1.send("to 2".to_string(), "2").await.unwrap();
  a3.send("to all".to_string(), BROADCAST).await.unwrap();

  let outcomes = Dispatcher::new().run(&[a3.clone(), a2.clone(), a1.clone()]).await;

  let order = outcomes.iter().map(|o| o.actor_id.to_string()).collect::<Vec<_>>();
  assert_eq!(order, vec!["3", "2", "1"]);
  assert!(outcomes[0].messages.is_empty());
  let to_two = outcomes[1].messages.iter().map(|m| m.payload().as_str()).collect::<Vec<_>>();
  assert_eq!(to_two, vec!["to 2", "to all"]);
  assert_eq!(outcomes[2].messages.len(), 1);

  let snapshot = registry.counters().snapshot();
  assert_eq!(snapshot.messages_sent, 3);
  assert_eq!(snapshot.messages_processed, 3);
  assert_eq!(registry.pending().await, 0);
}

#[tokio::test]
async fn test_run_with_no_actors() {
  let outcomes = Dispatcher::new().run::<String>(&[]).await;
  assert!(outcomes.is_empty());
}

#[tokio::test]
async fn test_run_only_touches_given_actors() {
  let registry = MailboxRegistry::<u32>::new(3).unwrap();
  let a1 = registry.register("1").await.unwrap();
  let a2 = registry.register("2").await.unwrap();

  a2.send(1, "1").await.unwrap();
  a1.send(2, "2").await.unwrap();

  let outcomes = Dispatcher::new().with_log_prefix("[d] ").run(&[a1]).await;
  assert_eq!(outcomes.len(), 1);
  assert_eq!(outcomes[0].messages[0].payload(), &1);
  assert_eq!(registry.pending().await, 1);
  assert_eq!(a2.receive_many().await.len(), 1);
}
