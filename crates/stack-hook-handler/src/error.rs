//! Handler error types.

use std::path::PathBuf;

use stack_hook_callback::NotificationError;
use stack_hook_invoker::InvocationError;

/// Errors raised by the steps of a lifecycle invocation.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
  /// Starting the workflow failed.
  #[error(transparent)]
  Invocation(#[from] InvocationError),

  /// Reporting status to the callback URL failed.
  #[error(transparent)]
  Notification(#[from] NotificationError),
}

/// Errors raised while replaying a captured event from disk.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
  /// The event file could not be read.
  #[error("failed to read event file '{}': {source}", .path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// The event file is not a valid lifecycle event.
  #[error("failed to parse event file '{}': {source}", .path.display())]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  /// Handling the event failed.
  #[error(transparent)]
  Hook(#[from] HookError),
}
