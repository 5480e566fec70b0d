use stack_hook_config::ConfigError;
use thiserror::Error;

/// Errors that can occur while starting the workflow.
#[derive(Debug, Error)]
pub enum InvocationError {
  /// A configured value needed for the payload is unusable.
  #[error("invalid workflow configuration: {0}")]
  Config(#[from] ConfigError),

  /// The payload could not be encoded.
  #[error("failed to encode workflow payload: {0}")]
  Encode(#[source] serde_json::Error),

  /// The invoke call itself failed.
  #[error("invoke call failed: {0}")]
  Sdk(#[from] aws_sdk_lambda::Error),

  /// The invoker acknowledged with a non-success status code.
  #[error("invocation of '{function_name}' failed with status {status_code}")]
  Rejected {
    function_name: String,
    status_code: i32,
  },
}
