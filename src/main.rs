use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lambda_runtime::{LambdaEvent, service_fn};

use stack_hook_callback::HttpCallbackClient;
use stack_hook_config::HookConfig;
use stack_hook_handler::{LifecycleEvent, LifecycleHandler};
use stack_hook_invoker::LambdaInvoker;

type Handler = LifecycleHandler<LambdaInvoker, HttpCallbackClient>;

/// Stack Hook - custom resource handler that starts a stack's restart workflow
#[derive(Parser)]
#[command(name = "stack-hook")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Serve lifecycle events from the Lambda runtime API (default)
  Serve,

  /// Handle a single captured lifecycle event outside Lambda
  Replay {
    /// Path to the event JSON file
    event_file: PathBuf,

    /// Log stream name reported as the physical resource id
    #[arg(long, default_value = "local")]
    log_stream: String,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  lambda_runtime::tracing::init_default_subscriber();

  let config = HookConfig::from_env();

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async move {
    let handler = build_handler(config).await;

    match cli.command {
      None | Some(Commands::Serve) => serve(&handler).await,
      Some(Commands::Replay {
        event_file,
        log_stream,
      }) => replay(&handler, event_file, &log_stream).await,
    }
  })
}

async fn build_handler(config: HookConfig) -> Handler {
  let invoker = LambdaInvoker::from_config(&config).await;
  LifecycleHandler::new(config, invoker, HttpCallbackClient::default())
}

async fn serve(handler: &Handler) -> Result<()> {
  lambda_runtime::run(service_fn(
    move |event: LambdaEvent<LifecycleEvent>| async move {
      let log_stream = event.context.env_config.log_stream.clone();
      handler
        .handle(event.payload, &log_stream)
        .await
        .map(str::to_string)
        .map_err(lambda_runtime::Error::from)
    },
  ))
  .await
  .map_err(|e| anyhow::anyhow!(e))
}

async fn replay(handler: &Handler, event_file: PathBuf, log_stream: &str) -> Result<()> {
  let marker = handler
    .replay(&event_file, log_stream)
    .await
    .context("lifecycle event replay failed")?;

  println!("{}", marker);

  Ok(())
}
