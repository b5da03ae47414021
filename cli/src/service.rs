//! HTTP transport for the CLI.
//!
//! Mirrors the browser transport: one POST per submission, status and body
//! handed to `forms::decode_response`. No retries.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use std::time::Duration;

use forms::contact::{ContactMessage, Delivered, delivery_outcome};
use forms::{Endpoint, SubmitError, decode_response, endpoint_url};
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// A decoded outcome plus the JSON body it was decoded from.
#[derive(Debug, Clone)]
pub struct Prediction<T> {
    pub outcome: T,
    pub raw: Value,
}

pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

fn network(e: reqwest::Error) -> SubmitError {
    SubmitError::Network(e.to_string())
}

impl PredictionClient {
    /// # Errors
    ///
    /// Returns [`SubmitError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| SubmitError::Config(format!("http client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<(u16, String), SubmitError> {
        let response = self.http.post(url).json(body).send().await.map_err(network)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(network)?;
        Ok((status, text))
    }

    /// POST `request` to `E::PATH` and decode the answer.
    ///
    /// # Errors
    ///
    /// Any [`SubmitError`] produced by the transport or by decoding.
    pub async fn predict<E: Endpoint>(
        &self,
        request: &E::Request,
    ) -> Result<Prediction<E::Outcome>, SubmitError> {
        let url = endpoint_url(&self.base_url, E::PATH);
        tracing::debug!(%url, "posting form");
        let (status, body) = self.post_json(&url, request).await?;
        tracing::debug!(status, bytes = body.len(), "response received");

        let outcome = decode_response::<E>(request, status, &body)?;
        let raw = serde_json::from_str(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;
        Ok(Prediction { outcome, raw })
    }

    /// Send a contact message to `webhook_url`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Network`] or [`SubmitError::Http`].
    pub async fn deliver_contact(
        &self,
        webhook_url: &str,
        message: &ContactMessage,
        timestamp: String,
    ) -> Result<Delivered, SubmitError> {
        let payload = message.webhook_payload(timestamp);
        let response = self
            .http
            .post(webhook_url)
            .json(&payload)
            .send()
            .await
            .map_err(network)?;
        delivery_outcome(response.status().as_u16())
    }

    /// `GET /` on the prediction service.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Http`] for a non-2xx status, [`SubmitError::Decode`]
    /// for a non-JSON body.
    pub async fn ping(&self) -> Result<Value, SubmitError> {
        let url = endpoint_url(&self.base_url, "/");
        let response = self.http.get(&url).send().await.map_err(network)?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(SubmitError::Http { status });
        }
        let text = response.text().await.map_err(network)?;
        serde_json::from_str(&text).map_err(|e| SubmitError::Decode(e.to_string()))
    }
}
