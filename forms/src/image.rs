//! Image payload encoding for disease detection.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Standard, padded base64 of raw image bytes.
#[must_use]
pub fn encode_image(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Drop a leading `data:<mime>;base64,` header, leaving bare base64.
///
/// Values without a data-URI header are returned unchanged.
#[must_use]
pub fn strip_data_uri_prefix(value: &str) -> &str {
    if !value.starts_with("data:") {
        return value;
    }
    value.split_once(',').map_or(value, |(_, payload)| payload)
}

/// Data URI for previewing picked bytes in an `<img>`.
#[must_use]
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { "application/octet-stream" } else { mime };
    format!("data:{mime};base64,{}", encode_image(bytes))
}

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;
