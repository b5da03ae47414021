//! Submission failures.
//!
//! ERROR HANDLING
//! ==============
//! Every failure after validation collapses into one `SubmitError`, whose
//! `Display` is the message shown to the user. None of them are retried; the
//! code/retryable split only feeds logging.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a submission did not produce a result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never completed (offline, DNS, CORS, timeout).
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    /// A 2xx body carried an `error` field.
    #[error("{0}")]
    Application(String),
    /// A 2xx body that is not JSON or does not match the response schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A decoded body lacks what the result view needs.
    #[error("{0}")]
    Incomplete(String),
    /// Local configuration is missing.
    #[error("{0}")]
    Config(String),
}

impl SubmitError {
    /// Stable code for structured logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Network(_) => "E_NETWORK",
            Self::Http { .. } => "E_HTTP_STATUS",
            Self::Application(_) => "E_APPLICATION",
            Self::Decode(_) => "E_DECODE",
            Self::Incomplete(_) => "E_INCOMPLETE",
            Self::Config(_) => "E_CONFIG",
        }
    }

    /// Whether trying the same request again could plausibly succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Http { status: 429 | 500..=599 })
    }
}
