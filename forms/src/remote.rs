//! Generic remote form: validate, submit, reduce the outcome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is the same bridge: a [`FormState`] is validated, turned into a
//! typed request, posted once, and the outcome reduced into a
//! [`ResultState`]. [`FormSpec`] supplies the schema and payload builder,
//! [`Endpoint`] adds the prediction-service path and response schema, and
//! [`RemoteForm`] owns the state machine.
//!
//! ```text
//! Idle --begin_submit--> Loading --complete(latest)--> Success | Error
//!   ^                                                        |
//!   +------------------------- dismiss ----------------------+
//! ```
//!
//! TOKENS
//! ======
//! Each accepted submission gets the next [`RequestToken`]. A completion
//! carrying any other token is dropped, so a slow response can never
//! overwrite the result of a newer submission. Submitting again while
//! `Loading` is allowed; the newer request simply wins.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SubmitError;
use crate::field::{FormSchema, ValidationError};
use crate::form::{FormState, ValidatedForm};
use crate::render::Summary;
use crate::result::ResultState;

/// Field schema, payload builder and result type of one form.
pub trait FormSpec: Send + Sync + 'static {
    /// JSON body sent on submission.
    type Request: Serialize + Clone + fmt::Debug + Send + Sync + 'static;
    /// Value stored in [`ResultState::Success`].
    type Outcome: Summary + Clone + fmt::Debug + PartialEq + Send + Sync + 'static;

    /// Clear the form after a successful submission.
    const RESET_ON_SUCCESS: bool = false;

    fn schema() -> &'static FormSchema;

    /// Build the request body from validated input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a field the body needs is absent or
    /// of the wrong kind.
    fn build_request(form: &ValidatedForm) -> Result<Self::Request, ValidationError>;
}

/// A form answered by the prediction service.
pub trait Endpoint: FormSpec {
    /// Path on the prediction service, e.g. `"/predict_crop_yield/"`.
    const PATH: &'static str;

    /// Explicit schema of a successful response body.
    type Response: DeserializeOwned;

    /// Check a decoded response and turn it into the stored outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Incomplete`] when the response lacks what the
    /// result view renders.
    fn outcome(
        request: &Self::Request,
        response: Self::Response,
    ) -> Result<Self::Outcome, SubmitError>;
}

/// Identifies one accepted submission of a [`RemoteForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A validated request ready to be sent.
#[derive(Clone, Debug)]
pub struct Submission<R> {
    pub token: RequestToken,
    pub request: R,
}

/// Form input, field errors and result state for one page.
pub struct RemoteForm<F: FormSpec> {
    form: FormState,
    result: ResultState<F::Outcome>,
    field_errors: Vec<ValidationError>,
    issued: u64,
    spec: PhantomData<fn() -> F>,
}

impl<F: FormSpec> RemoteForm<F> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            form: FormState::new(F::schema()),
            result: ResultState::Idle,
            field_errors: Vec::new(),
            issued: 0,
            spec: PhantomData,
        }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn result(&self) -> &ResultState<F::Outcome> {
        &self.result
    }

    /// Errors from the last rejected submission.
    #[must_use]
    pub fn field_errors(&self) -> &[ValidationError] {
        &self.field_errors
    }

    /// Error message for `field` from the last rejected submission.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.field_errors
            .iter()
            .find(|error| error.field() == field)
            .map(ToString::to_string)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.result.is_loading()
    }

    /// Token of the newest accepted submission, if any.
    #[cfg(test)]
    pub(crate) fn latest_token(&self) -> Option<RequestToken> {
        (self.issued > 0).then_some(RequestToken(self.issued))
    }

    /// Update one field, clearing any error previously reported for it.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !self.form.set(name, value) {
            return false;
        }
        self.field_errors.retain(|error| error.field() != name);
        true
    }

    /// Validate the form and, if valid, move to `Loading`.
    ///
    /// # Errors
    ///
    /// Returns every validation failure. The result state is left untouched
    /// and the caller must not send anything.
    pub fn begin_submit(&mut self) -> Result<Submission<F::Request>, Vec<ValidationError>> {
        let request = match self.form.validate() {
            Ok(valid) => F::build_request(&valid).map_err(|error| vec![error]),
            Err(errors) => Err(errors),
        };
        let request = match request {
            Ok(request) => request,
            Err(errors) => {
                self.field_errors.clone_from(&errors);
                return Err(errors);
            }
        };

        self.field_errors.clear();
        self.issued += 1;
        self.result = ResultState::Loading;
        Ok(Submission {
            token: RequestToken(self.issued),
            request,
        })
    }

    /// Apply the outcome of submission `token`.
    ///
    /// Returns `false` and changes nothing when `token` is not the latest.
    pub fn complete(
        &mut self,
        token: RequestToken,
        outcome: Result<F::Outcome, SubmitError>,
    ) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.result = match outcome {
            Ok(value) => {
                if F::RESET_ON_SUCCESS {
                    self.form.reset();
                }
                ResultState::Success(value)
            }
            Err(error) => ResultState::Error(error.to_string()),
        };
        true
    }

    /// Return to `Idle`, keeping field values. Any in-flight submission is
    /// invalidated.
    pub fn dismiss(&mut self) {
        self.issued += 1;
        self.result = ResultState::Idle;
    }
}

impl<F: FormSpec> Default for RemoteForm<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormSpec> Clone for RemoteForm<F> {
    fn clone(&self) -> Self {
        Self {
            form: self.form.clone(),
            result: self.result.clone(),
            field_errors: self.field_errors.clone(),
            issued: self.issued,
            spec: PhantomData,
        }
    }
}

impl<F: FormSpec> fmt::Debug for RemoteForm<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteForm")
            .field("schema", &F::schema().id)
            .field("form", &self.form)
            .field("result", &self.result)
            .field("field_errors", &self.field_errors)
            .field("issued", &self.issued)
            .finish()
    }
}

/// Reduce an HTTP status and body from `E::PATH` into an outcome.
///
/// # Errors
///
/// - [`SubmitError::Http`] for a non-2xx status.
/// - [`SubmitError::Decode`] when the body is not JSON or does not match
///   `E::Response`.
/// - [`SubmitError::Application`] when the body carries an `error` string.
/// - whatever [`Endpoint::outcome`] rejects.
pub fn decode_response<E: Endpoint>(
    request: &E::Request,
    status: u16,
    body: &str,
) -> Result<E::Outcome, SubmitError> {
    if !(200..300).contains(&status) {
        return Err(SubmitError::Http { status });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))?;
    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return Err(SubmitError::Application(message.to_owned()));
    }

    let response: E::Response =
        serde_json::from_value(value).map_err(|e| SubmitError::Decode(e.to_string()))?;
    E::outcome(request, response)
}
