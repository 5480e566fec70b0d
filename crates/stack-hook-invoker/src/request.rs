use serde::Serialize;

/// Prefix of the function that fronts a stack's restart workflow.
pub const FUNCTION_PREFIX: &str = "Restart-";

/// A request to start the restart workflow of one stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartWorkflow {
  /// Reference (state machine ARN) of the workflow to start.
  pub workflow_ref: String,

  /// Name of the owning stack.
  pub stack_name: String,

  /// Iteration limit forwarded to the workflow.
  pub loop_limit: Option<u32>,
}

impl StartWorkflow {
  /// Name of the function to invoke.
  pub fn function_name(&self) -> String {
    format!("{}{}", FUNCTION_PREFIX, self.stack_name)
  }

  /// Payload handed to the function. The loop always starts at zero.
  pub fn payload(&self) -> WorkflowPayload {
    WorkflowPayload {
      step_function_arn: self.workflow_ref.clone(),
      loop_count: 0,
      loop_limit: self.loop_limit,
    }
  }
}

/// JSON payload received by the restart function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowPayload {
  pub step_function_arn: String,
  pub loop_count: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub loop_limit: Option<u32>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_function_name_is_prefixed_stack_name() {
    let request = StartWorkflow {
      workflow_ref: "arn".to_string(),
      stack_name: "billing-prod".to_string(),
      loop_limit: None,
    };

    assert_eq!(request.function_name(), "Restart-billing-prod");
  }

  #[test]
  fn test_payload_without_loop_limit_omits_field() {
    let request = StartWorkflow {
      workflow_ref: "arn".to_string(),
      stack_name: "billing".to_string(),
      loop_limit: None,
    };

    let value = serde_json::to_value(request.payload()).unwrap();
    assert_eq!(value, serde_json::json!({"step_function_arn": "arn", "loop_count": 0}));
  }
}
