//! AWS Lambda implementation of [`WorkflowInvoker`].

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_lambda::Client;
use aws_sdk_lambda::primitives::Blob;
use stack_hook_config::HookConfig;

use crate::error::InvocationError;
use crate::{InvokeAck, WorkflowInvoker};

/// Invokes functions through the AWS Lambda API.
#[derive(Debug, Clone)]
pub struct LambdaInvoker {
  client: Client,
}

impl LambdaInvoker {
  /// Wrap an existing Lambda client.
  pub fn new(client: Client) -> Self {
    Self { client }
  }

  /// Build a client for the configured region, falling back to the SDK's
  /// default region chain when none is set.
  pub async fn from_config(config: &HookConfig) -> Self {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
      loader = loader.region(Region::new(region.clone()));
    }

    let sdk_config = loader.load().await;
    Self::new(Client::new(&sdk_config))
  }
}

#[async_trait]
impl WorkflowInvoker for LambdaInvoker {
  async fn invoke(
    &self,
    function_name: &str,
    payload: Vec<u8>,
  ) -> Result<InvokeAck, InvocationError> {
    let output = self
      .client
      .invoke()
      .function_name(function_name)
      .payload(Blob::new(payload))
      .send()
      .await
      .map_err(aws_sdk_lambda::Error::from)?;

    Ok(InvokeAck {
      status_code: output.status_code(),
      function_error: output.function_error().map(str::to_string),
    })
  }
}
