//! Contact form and its chat-webhook notification.
//!
//! Unlike the prediction forms, a contact message is not posted to the
//! prediction service. It is wrapped in a single embed and sent to a
//! configured webhook; only the response status matters.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::field::{FieldKind, FieldSpec, FormSchema, ValidationError};
use crate::form::ValidatedForm;
use crate::remote::FormSpec;
use crate::render::Summary;

/// Shown after the webhook accepted the message.
pub const CONFIRMATION: &str = "Thank you for your message! We will get back to you soon.";

/// Shown for any delivery failure.
pub const FAILURE: &str = "There was an error sending your message. Please try again later.";

/// Embed accent colour (`#0099ff`).
pub const EMBED_COLOR: u32 = 0x0099ff;

pub static SCHEMA: FormSchema = FormSchema {
    id: "contact",
    title: "Contact Us",
    fields: &[
        FieldSpec::new("name", "Name", FieldKind::Text).placeholder("Your name"),
        FieldSpec::new("email", "Email", FieldKind::Email).placeholder("you@example.com"),
        FieldSpec::new("subject", "Subject", FieldKind::Text).placeholder("What is this about?"),
        FieldSpec::new("message", "Message", FieldKind::LongText)
            .placeholder("Write your message here"),
    ],
};

/// Contact form.
pub struct Contact;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// The webhook accepted the message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delivered;

/// Webhook request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<Embed>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    /// RFC 3339 UTC time of submission.
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    fn new(name: &str, value: &str, inline: bool) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            inline: inline.then_some(true),
        }
    }
}

impl ContactMessage {
    /// Wrap the message in a single embed stamped with `timestamp`.
    #[must_use]
    pub fn webhook_payload(&self, timestamp: impl Into<String>) -> WebhookPayload {
        WebhookPayload {
            embeds: vec![Embed {
                title: format!("New Contact Form Submission from {}", self.name),
                color: EMBED_COLOR,
                fields: vec![
                    EmbedField::new("Name", &self.name, true),
                    EmbedField::new("Email", &self.email, true),
                    EmbedField::new("Subject", &self.subject, false),
                    EmbedField::new("Message", &self.message, false),
                ],
                timestamp: timestamp.into(),
            }],
        }
    }
}

impl FormSpec for Contact {
    type Request = ContactMessage;
    type Outcome = Delivered;
    const RESET_ON_SUCCESS: bool = true;

    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn build_request(form: &ValidatedForm) -> Result<ContactMessage, ValidationError> {
        Ok(ContactMessage {
            name: form.text("name")?,
            email: form.text("email")?,
            subject: form.text("subject")?,
            message: form.text("message")?,
        })
    }
}

impl Summary for Delivered {
    fn headline(&self) -> String {
        CONFIRMATION.to_owned()
    }
}

/// Reduce the webhook's response status. The body is never read.
///
/// # Errors
///
/// Returns [`SubmitError::Http`] for a non-2xx status.
pub fn delivery_outcome(status: u16) -> Result<Delivered, SubmitError> {
    if (200..300).contains(&status) {
        Ok(Delivered)
    } else {
        Err(SubmitError::Http { status })
    }
}

/// Error returned when no webhook URL is configured.
#[must_use]
pub fn missing_webhook() -> SubmitError {
    SubmitError::Config("contact webhook URL is not configured".to_owned())
}
