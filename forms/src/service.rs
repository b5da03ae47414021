//! Prediction service addressing.

/// Public host of the prediction service.
pub const DEFAULT_API_BASE_URL: &str = "https://yamxxx1-BackendCropix.hf.space";

/// Join a base URL and an endpoint path without doubling the slash.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
