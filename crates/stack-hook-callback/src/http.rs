use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::CallbackClient;
use crate::error::NotificationError;

/// [`CallbackClient`] backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct HttpCallbackClient {
  client: Client,
}

impl HttpCallbackClient {
  /// Wrap an existing reqwest client.
  pub fn new(client: Client) -> Self {
    Self { client }
  }
}

#[async_trait]
impl CallbackClient for HttpCallbackClient {
  async fn put(&self, url: &str, body: Vec<u8>) -> Result<u16, NotificationError> {
    let response = self
      .client
      .put(url)
      .header(CONTENT_TYPE, "")
      .body(body)
      .send()
      .await?;

    Ok(response.status().as_u16())
  }
}
