use std::fmt;

use serde::Serialize;

/// Terminal status of a lifecycle event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
  #[default]
  Success,
  Failed,
}

impl fmt::Display for Status {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Status::Success => f.write_str("SUCCESS"),
      Status::Failed => f.write_str("FAILED"),
    }
  }
}

/// Body of the status report sent to the callback URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusDocument {
  pub status: Status,
  pub reason: String,
  pub physical_resource_id: String,
  pub stack_id: String,
  pub request_id: String,
  pub logical_resource_id: String,
  pub no_echo: bool,
  pub data: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_document_uses_wire_field_names() {
    let document = StatusDocument {
      status: Status::Failed,
      reason: "See the details in CloudWatch Log Stream: 2024/01/01/[$LATEST]abc".to_string(),
      physical_resource_id: "2024/01/01/[$LATEST]abc".to_string(),
      stack_id: "stack-1".to_string(),
      request_id: "req-1".to_string(),
      logical_resource_id: "StartRestart".to_string(),
      no_echo: false,
      data: serde_json::Map::new(),
    };

    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
      value,
      serde_json::json!({
        "Status": "FAILED",
        "Reason": "See the details in CloudWatch Log Stream: 2024/01/01/[$LATEST]abc",
        "PhysicalResourceId": "2024/01/01/[$LATEST]abc",
        "StackId": "stack-1",
        "RequestId": "req-1",
        "LogicalResourceId": "StartRestart",
        "NoEcho": false,
        "Data": {},
      })
    );
  }

  #[test]
  fn test_status_display_matches_wire_value() {
    assert_eq!(Status::Success.to_string(), "SUCCESS");
    assert_eq!(Status::Failed.to_string(), "FAILED");
    assert_eq!(Status::default(), Status::Success);
  }
}
