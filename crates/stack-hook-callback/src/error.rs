use thiserror::Error;

/// Errors that can occur while reporting status.
#[derive(Debug, Error)]
pub enum NotificationError {
  /// The status document could not be encoded.
  #[error("failed to encode status document: {0}")]
  Encode(#[source] serde_json::Error),

  /// The request never produced a response.
  #[error("callback request failed: {0}")]
  Transport(#[from] reqwest::Error),

  /// The callback endpoint answered with a non-success status.
  #[error("callback rejected with status {status_code}")]
  Rejected { status_code: u16 },
}

impl NotificationError {
  /// Response status code, when a response was received.
  pub fn status_code(&self) -> Option<u16> {
    match self {
      NotificationError::Rejected { status_code } => Some(*status_code),
      NotificationError::Transport(e) => e.status().map(|s| s.as_u16()),
      NotificationError::Encode(_) => None,
    }
  }
}
