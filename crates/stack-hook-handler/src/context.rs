use stack_hook_callback::{Status, StatusDocument};
use stack_hook_invoker::StartWorkflow;

use crate::event::{LifecycleEvent, RequestType};

/// Prefix of the human-readable reason sent with every status report.
pub const REASON_PREFIX: &str = "See the details in CloudWatch Log Stream: ";

/// Everything one invocation needs, built once from the incoming event.
///
/// Steps take the context by value and hand it back; the only change ever
/// made is [`InvocationContext::failed`], on the error path.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationContext {
  pub log_stream_name: String,
  pub stack_id: String,
  pub request_id: String,
  pub request_type: RequestType,
  pub logical_resource_id: String,
  pub workflow_ref: String,
  pub stack_name: String,
  pub callback_url: String,
  pub result: Status,
}

impl InvocationContext {
  pub fn from_event(event: LifecycleEvent, log_stream_name: &str) -> Self {
    Self {
      log_stream_name: log_stream_name.to_string(),
      stack_id: event.stack_id,
      request_id: event.request_id,
      request_type: event.request_type,
      logical_resource_id: event.logical_resource_id,
      workflow_ref: event.resource_properties.step_function_arn,
      stack_name: event.resource_properties.stack_name,
      callback_url: event.response_url,
      result: Status::Success,
    }
  }

  /// The same context with its result flipped to FAILED.
  pub fn failed(self) -> Self {
    Self {
      result: Status::Failed,
      ..self
    }
  }

  /// Workflow start request, only for Create events.
  pub fn start_request(&self, loop_limit: Option<u32>) -> Option<StartWorkflow> {
    if self.request_type != RequestType::Create {
      return None;
    }

    Some(StartWorkflow {
      workflow_ref: self.workflow_ref.clone(),
      stack_name: self.stack_name.clone(),
      loop_limit,
    })
  }

  /// Status report describing the current result.
  pub fn status_document(&self) -> StatusDocument {
    StatusDocument {
      status: self.result,
      reason: format!("{}{}", REASON_PREFIX, self.log_stream_name),
      physical_resource_id: self.log_stream_name.clone(),
      stack_id: self.stack_id.clone(),
      request_id: self.request_id.clone(),
      logical_resource_id: self.logical_resource_id.clone(),
      no_echo: false,
      data: serde_json::Map::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::event::ResourceProperties;

  fn event(request_type: RequestType) -> LifecycleEvent {
    LifecycleEvent {
      request_type,
      response_url: "https://example.com/cb".to_string(),
      stack_id: "stack-1".to_string(),
      request_id: "req-1".to_string(),
      logical_resource_id: "StartRestart".to_string(),
      resource_type: None,
      physical_resource_id: None,
      resource_properties: ResourceProperties {
        step_function_arn: "arn:sfn".to_string(),
        stack_name: "orders".to_string(),
      },
    }
  }

  #[test]
  fn test_context_starts_successful() {
    let context = InvocationContext::from_event(event(RequestType::Create), "stream-1");

    assert_eq!(context.result, Status::Success);
    assert_eq!(context.callback_url, "https://example.com/cb");
    assert_eq!(context.workflow_ref, "arn:sfn");
  }

  #[test]
  fn test_failed_only_changes_result() {
    let context = InvocationContext::from_event(event(RequestType::Update), "stream-1");
    let failed = context.clone().failed();

    assert_eq!(failed.result, Status::Failed);
    assert_eq!(
      InvocationContext {
        result: Status::Success,
        ..failed
      },
      context
    );
  }

  #[test]
  fn test_start_request_only_on_create() {
    let create = InvocationContext::from_event(event(RequestType::Create), "s");
    let update = InvocationContext::from_event(event(RequestType::Update), "s");
    let delete = InvocationContext::from_event(event(RequestType::Delete), "s");

    let request = create.start_request(Some(5)).unwrap();
    assert_eq!(request.function_name(), "Restart-orders");
    assert_eq!(request.loop_limit, Some(5));

    assert!(update.start_request(Some(5)).is_none());
    assert!(delete.start_request(Some(5)).is_none());
  }

  #[test]
  fn test_status_document_references_log_stream() {
    let context = InvocationContext::from_event(event(RequestType::Create), "2024/01/01/[$LATEST]abc");
    let document = context.failed().status_document();

    assert_eq!(document.status, Status::Failed);
    assert_eq!(
      document.reason,
      "See the details in CloudWatch Log Stream: 2024/01/01/[$LATEST]abc"
    );
    assert_eq!(document.physical_resource_id, "2024/01/01/[$LATEST]abc");
    assert_eq!(document.stack_id, "stack-1");
    assert_eq!(document.request_id, "req-1");
    assert_eq!(document.logical_resource_id, "StartRestart");
    assert!(!document.no_echo);
    assert!(document.data.is_empty());
  }
}
