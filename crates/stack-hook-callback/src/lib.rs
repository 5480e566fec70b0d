//! Stack Hook Callback
//!
//! Reports the outcome of a lifecycle event back to the provisioning
//! controller. The controller hands every request a pre-signed, single-use
//! URL; the handler answers with one JSON [`StatusDocument`] sent as an HTTP
//! PUT.
//!
//! The receiving side validates the URL signature against an empty
//! `content-type`, so the body is sent as raw bytes with that header blanked
//! rather than through a JSON helper.

mod document;
mod error;
mod http;

pub use document::{Status, StatusDocument};
pub use error::NotificationError;
pub use http::HttpCallbackClient;

use async_trait::async_trait;
use tracing::info;

/// Something that can PUT a body to a callback URL.
#[async_trait]
pub trait CallbackClient: Send + Sync {
  /// PUT `body` to `url` and return the response status code.
  async fn put(&self, url: &str, body: Vec<u8>) -> Result<u16, NotificationError>;
}

/// Send `document` to `url`.
///
/// Fails on transport errors and on any response status of 300 or above.
pub async fn report_status<C>(
  client: &C,
  url: &str,
  document: &StatusDocument,
) -> Result<(), NotificationError>
where
  C: CallbackClient + ?Sized,
{
  let body = serde_json::to_vec(document).map_err(NotificationError::Encode)?;

  info!(status = %document.status, "reporting status");

  let status_code = client.put(url, body).await?;
  if status_code >= 300 {
    return Err(NotificationError::Rejected { status_code });
  }

  info!(status = %document.status, status_code, "status reported");
  Ok(())
}
