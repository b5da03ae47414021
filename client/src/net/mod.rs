//! Browser networking.
//!
//! `api` posts form requests to the prediction service and contact messages
//! to the webhook. Decoding lives in `forms` so the CLI shares it.

pub mod api;
