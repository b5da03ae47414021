//! Shared form model and prediction-service wire schema.
//!
//! This crate owns everything the `client` pages and the `cli` have in common:
//! the field schema of each form, validation of raw input, the typed request
//! and response shape of every prediction endpoint, the per-form result state
//! machine, and the text rendering of each result. It performs no I/O; the
//! callers bring their own HTTP transport and feed status + body back in
//! through [`decode_response`].

pub mod contact;
pub mod endpoints;
pub mod error;
pub mod field;
pub mod form;
pub mod image;
pub mod remote;
pub mod render;
pub mod result;
pub mod service;

pub use error::SubmitError;
pub use field::{FieldKind, FieldSpec, FieldValue, FormSchema, ValidationError};
pub use form::{FormState, ValidatedForm};
pub use remote::{Endpoint, FormSpec, RemoteForm, RequestToken, Submission, decode_response};
pub use render::Summary;
pub use result::ResultState;
pub use service::{DEFAULT_API_BASE_URL, endpoint_url};
