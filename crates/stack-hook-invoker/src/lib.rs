//! Stack Hook Invoker
//!
//! Starts the long-running restart workflow that belongs to a stack. The
//! workflow is fronted by a Lambda function named `Restart-<stack name>`;
//! this crate builds the payload for it and checks the acknowledgment.
//!
//! The [`WorkflowInvoker`] trait is the seam to the external system.
//! [`LambdaInvoker`] talks to AWS Lambda; tests substitute their own
//! implementation.

mod error;
mod lambda;
mod request;

pub use error::InvocationError;
pub use lambda::LambdaInvoker;
pub use request::{FUNCTION_PREFIX, StartWorkflow, WorkflowPayload};

use async_trait::async_trait;
use tracing::{info, warn};

/// Acknowledgment returned by the invoker for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeAck {
  /// Status code reported by the invoker.
  pub status_code: i32,

  /// Function-level error reported alongside the status, if any.
  pub function_error: Option<String>,
}

/// Something that can run a named function with a JSON payload.
#[async_trait]
pub trait WorkflowInvoker: Send + Sync {
  /// Invoke `function_name` with the encoded `payload` and wait for the
  /// acknowledgment.
  async fn invoke(
    &self,
    function_name: &str,
    payload: Vec<u8>,
  ) -> Result<InvokeAck, InvocationError>;
}

/// Start the workflow described by `request`.
///
/// Fails when the invoker errors or acknowledges with a status code of 300
/// or above. Does not wait for the workflow itself to finish.
pub async fn start_workflow<I>(invoker: &I, request: &StartWorkflow) -> Result<(), InvocationError>
where
  I: WorkflowInvoker + ?Sized,
{
  let function_name = request.function_name();
  let payload = serde_json::to_vec(&request.payload()).map_err(InvocationError::Encode)?;

  info!(function_name = %function_name, "starting workflow");

  let ack = invoker.invoke(&function_name, payload).await?;

  if ack.status_code >= 300 {
    return Err(InvocationError::Rejected {
      function_name,
      status_code: ack.status_code,
    });
  }

  if let Some(function_error) = &ack.function_error {
    warn!(
      function_name = %function_name,
      function_error = %function_error,
      "invoked function reported an error"
    );
  }

  info!(function_name = %function_name, status_code = ack.status_code, "workflow started");
  Ok(())
}
