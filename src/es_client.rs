use human_bytes::human_bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::models::bulk;

#[derive(Debug, Error)]
pub enum EsError {
    #[error("failed to compress request body: {0}")]
    Compress(#[from] std::io::Error),
    #[error("failed to construct request: {0}")]
    Build(#[source] reqwest::Error),
    #[error("failed to send request: {0}")]
    Send(#[source] reqwest::Error),
    #[error("request failed with message: {0}")]
    Status(String),
}

#[derive(Debug)]
pub struct EsClient {
    base_url: String,
    api_key: String,
    http_client: Client,
}

impl EsClient {
    pub fn new(base_url: String, api_key: String, http_client: Client) -> Self {
        Self {
            base_url,
            api_key,
            http_client,
        }
    }

    /// Sends one `_bulk` POST with the given pre-formatted action lines.
    /// Prints the payload size before the request goes out; succeeds
    /// silently on any status below 300, otherwise fails with the
    /// response body text.
    pub async fn send_bulk(
        &self,
        index: &str,
        actions: &[String],
        with_gzip: bool,
    ) -> Result<(), EsError> {
        let body = if with_gzip {
            bulk::encode_gzip(actions)?
        } else {
            bulk::encode_plain(actions)
        };

        println!("Content-Length: {}KB", body.len() as f64 / 1000.0);
        debug!(
            "bulk payload: {} lines, {} on the wire, gzip={}",
            actions.len(),
            human_bytes(body.len() as f64),
            with_gzip
        );

        let mut request_builder = self
            .http_client
            .post(format!("{}/{}/_bulk", self.base_url, index))
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("ApiKey {}", self.api_key));

        if with_gzip {
            request_builder = request_builder.header(CONTENT_ENCODING, "gzip");
        }

        let response = request_builder.body(body).send().await.map_err(|err| {
            if err.is_builder() {
                EsError::Build(err)
            } else {
                EsError::Send(err)
            }
        })?;

        let status = response.status();
        if status.as_u16() >= 300 {
            let text = response.text().await.unwrap_or_default();
            return Err(EsError::Status(text));
        }

        Ok(())
    }
}
