//! Replaying captured lifecycle events outside the Lambda runtime.

use std::path::Path;

use stack_hook_callback::CallbackClient;
use stack_hook_invoker::WorkflowInvoker;
use tracing::info;

use crate::error::ReplayError;
use crate::event::LifecycleEvent;
use crate::handler::LifecycleHandler;

/// Read a lifecycle event from a JSON file.
pub async fn read_event(path: &Path) -> Result<LifecycleEvent, ReplayError> {
  let content = tokio::fs::read_to_string(path)
    .await
    .map_err(|e| ReplayError::Read {
      path: path.to_path_buf(),
      source: e,
    })?;

  serde_json::from_str(&content).map_err(|e| ReplayError::Parse {
    path: path.to_path_buf(),
    source: e,
  })
}

impl<I: WorkflowInvoker, C: CallbackClient> LifecycleHandler<I, C> {
  /// Handle the event stored at `path` as if it had arrived from the runtime.
  pub async fn replay(
    &self,
    path: &Path,
    log_stream_name: &str,
  ) -> Result<&'static str, ReplayError> {
    let event = read_event(path).await?;

    info!(
      path = %path.display(),
      request_type = %event.request_type,
      "replaying lifecycle event"
    );

    Ok(self.handle(event, log_stream_name).await?)
  }
}
