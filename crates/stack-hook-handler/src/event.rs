use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle phase that triggered the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
  Create,
  Update,
  Delete,
}

impl fmt::Display for RequestType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RequestType::Create => f.write_str("Create"),
      RequestType::Update => f.write_str("Update"),
      RequestType::Delete => f.write_str("Delete"),
    }
  }
}

/// Custom resource request sent by the provisioning controller.
///
/// Fields not listed here (`ServiceToken`, `OldResourceProperties`, ...) are
/// accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
  pub request_type: RequestType,

  /// Pre-signed URL the status report goes to.
  #[serde(rename = "ResponseURL")]
  pub response_url: String,

  pub stack_id: String,
  pub request_id: String,
  pub logical_resource_id: String,

  #[serde(default)]
  pub resource_type: Option<String>,

  /// Present on Update and Delete.
  #[serde(default)]
  pub physical_resource_id: Option<String>,

  #[serde(default)]
  pub resource_properties: ResourceProperties,
}

/// Properties declared on the custom resource in the stack template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceProperties {
  /// Workflow (state machine) to start on Create.
  #[serde(default)]
  pub step_function_arn: String,

  /// Name of the owning stack.
  #[serde(default)]
  pub stack_name: String,
}
