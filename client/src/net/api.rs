//! HTTP calls to the prediction service and the contact webhook.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since forms are only
//! submitted from the browser.
//!
//! CONFIGURATION
//! =============
//! Both URLs are baked in at build time from `CROPIX_API_BASE_URL` and
//! `CROPIX_CONTACT_WEBHOOK_URL`. Without the first, the public service host
//! is used; without the second, contact submissions fail with a
//! configuration error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forms::contact::{ContactMessage, Delivered};
use forms::{Endpoint, SubmitError};

#[cfg(any(test, feature = "hydrate"))]
fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    non_blank(configured).unwrap_or(forms::DEFAULT_API_BASE_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn resolve_webhook_url(configured: Option<&'static str>) -> Result<&'static str, SubmitError> {
    non_blank(configured).ok_or_else(forms::contact::missing_webhook)
}

#[cfg(any(test, not(feature = "hydrate")))]
fn not_available() -> SubmitError {
    SubmitError::Network("not available on server".to_owned())
}

/// Prediction service base URL for this build.
#[cfg(feature = "hydrate")]
fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("CROPIX_API_BASE_URL"))
}

/// POST `request` to `E::PATH` and decode the response.
///
/// # Errors
///
/// Returns a [`SubmitError`] for transport failures, non-2xx statuses and
/// bodies that do not decode into `E::Response`.
pub async fn predict<E: Endpoint>(request: &E::Request) -> Result<E::Outcome, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let url = forms::endpoint_url(api_base_url(), E::PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        forms::decode_response::<E>(request, status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(not_available())
    }
}

/// Send a contact message to the configured webhook.
///
/// # Errors
///
/// Returns [`SubmitError::Config`] when no webhook is configured, otherwise
/// a transport or status error.
pub async fn deliver_contact(message: &ContactMessage) -> Result<Delivered, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let url = resolve_webhook_url(option_env!("CROPIX_CONTACT_WEBHOOK_URL"))?;
        let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
        let payload = message.webhook_payload(timestamp);
        let resp = gloo_net::http::Request::post(url)
            .json(&payload)
            .map_err(|e| SubmitError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        forms::contact::delivery_outcome(resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err(not_available())
    }
}

/// Read a picked file fully into memory.
///
/// # Errors
///
/// Returns the browser's error text if the file cannot be read.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Show a blocking browser alert.
#[cfg(feature = "hydrate")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("alert failed: {e:?}");
        }
    }
}
