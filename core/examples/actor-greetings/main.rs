use clap::Parser;
use mailroom_core_rs::actor::dispatch::Dispatcher;
use mailroom_core_rs::actor::{Actor, Config, ConfigOption, MailboxRegistry, BROADCAST};
use mailroom_utils_rs::concurrent::CountDownLatch;
use std::time::Duration;
use tokio::time::sleep;
use tracing_subscriber::EnvFilter;

/// Three actors greet each other through bounded mailboxes, then one
/// dispatcher pass drains everything. Try `--capacity 1` to watch sends fail.
#[derive(Parser, Debug)]
struct Args {
  /// Capacity of every mailbox.
  #[arg(long, default_value_t = 3)]
  capacity: usize,
  /// Pause between launching sends, in milliseconds.
  #[arg(long, default_value_t = 100)]
  pause_ms: u64,
  /// Log filter used when RUST_LOG is not set.
  #[arg(long, default_value = "debug")]
  log: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args = Args::parse();
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
  let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

  let config = Config::from([ConfigOption::with_mailbox_capacity(args.capacity)]);
  let registry = MailboxRegistry::<String>::new_with_config(config)?;
  let a1 = registry.register("1").await?;
  let a2 = registry.register("2").await?;
  let a3 = registry.register("3").await?;
  tracing::info!("{}", registry.counters().snapshot());

  let greetings: [(&Actor<String>, &str, &str); 5] = [
    (&a1, "Viva 2", "2"),
    (&a1, "Bonjour 3", "3"),
    (&a2, "Olá 1", "1"),
    (&a3, "Hello World", BROADCAST),
    (&a3, "Olá Mundo!", BROADCAST),
  ];
  let latch = CountDownLatch::new(greetings.len());
  for (actor, text, target) in greetings {
    let actor = actor.clone();
    let text = text.to_string();
    let target = target.to_string();
    let latch = latch.clone();
    tokio::spawn(async move {
      if let Err(err) = actor.send(text, &target).await {
        tracing::warn!("Actor {} - send failed: {}", actor.id(), err);
      }
      latch.count_down().await;
    });
    sleep(Duration::from_millis(args.pause_ms)).await;
  }
  latch.wait().await;

  let outcomes = Dispatcher::new().run(&[a1, a2, a3]).await;
  for outcome in &outcomes {
    tracing::info!("Actor {} - drained {} messages", outcome.actor_id, outcome.messages.len());
  }

  tracing::info!("{}", registry.counters().snapshot());
  Ok(())
}
