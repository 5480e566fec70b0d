//! Lifecycle event orchestration.

use stack_hook_callback::{CallbackClient, report_status};
use stack_hook_config::HookConfig;
use stack_hook_invoker::{InvocationError, WorkflowInvoker, start_workflow};
use tracing::{debug, error, info, instrument};

use crate::context::InvocationContext;
use crate::error::HookError;
use crate::event::{LifecycleEvent, RequestType};

/// Returned to the hosting runtime once an event has been handled.
pub const COMPLETION_MARKER: &str = "Done!";

/// Handles one lifecycle event at a time.
///
/// Generic over the invoker and callback client so tests can observe both
/// outbound calls without touching the network.
pub struct LifecycleHandler<I, C> {
  config: HookConfig,
  invoker: I,
  callback: C,
}

impl<I: WorkflowInvoker, C: CallbackClient> LifecycleHandler<I, C> {
  pub fn new(config: HookConfig, invoker: I, callback: C) -> Self {
    Self {
      config,
      invoker,
      callback,
    }
  }

  /// Handle a lifecycle event.
  ///
  /// Any failure in the primary pass is logged and reported as FAILED,
  /// after which [`COMPLETION_MARKER`] is still returned. Only a failure of
  /// that FAILED report escapes as an error.
  #[instrument(
    name = "lifecycle_event",
    skip(self, event, log_stream_name),
    fields(
      request_id = %event.request_id,
      request_type = %event.request_type,
      logical_resource_id = %event.logical_resource_id,
    )
  )]
  pub async fn handle(
    &self,
    event: LifecycleEvent,
    log_stream_name: &str,
  ) -> Result<&'static str, HookError> {
    info!("lifecycle event received");

    let context = InvocationContext::from_event(event, log_stream_name);

    if let Err(e) = self.run(context.clone()).await {
      error!(error = %e, "lifecycle event failed");
      self.report_status(context.failed()).await?;
    }

    info!("lifecycle event handled");
    Ok(COMPLETION_MARKER)
  }

  /// Primary pass: start the workflow, then report its outcome.
  async fn run(&self, context: InvocationContext) -> Result<InvocationContext, HookError> {
    let context = self.start_workflow(context).await?;
    self.report_status(context).await
  }

  /// Start the stack's restart workflow. A no-op for anything but Create.
  pub async fn start_workflow(
    &self,
    context: InvocationContext,
  ) -> Result<InvocationContext, HookError> {
    if context.request_type != RequestType::Create {
      debug!(request_type = %context.request_type, "skipping workflow start");
      return Ok(context);
    }

    let loop_limit = self.config.loop_limit().map_err(InvocationError::from)?;

    if let Some(request) = context.start_request(loop_limit) {
      start_workflow(&self.invoker, &request).await?;
    }

    Ok(context)
  }

  /// Send the context's current result to its callback URL.
  pub async fn report_status(
    &self,
    context: InvocationContext,
  ) -> Result<InvocationContext, HookError> {
    report_status(
      &self.callback,
      &context.callback_url,
      &context.status_document(),
    )
    .await?;

    Ok(context)
  }
}
