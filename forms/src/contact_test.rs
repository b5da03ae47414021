use super::*;
use crate::remote::RemoteForm;

fn filled_form() -> RemoteForm<Contact> {
    let mut form = RemoteForm::<Contact>::new();
    form.set_field("name", "Asha");
    form.set_field("email", "asha@example.com");
    form.set_field("subject", "Soil test");
    form.set_field("message", "How do I sample my field?");
    form
}

#[test]
fn payload_wraps_message_in_single_embed() {
    let message = ContactMessage {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        subject: "Soil test".to_owned(),
        message: "How do I sample my field?".to_owned(),
    };
    let payload = message.webhook_payload("2026-10-18T09:30:00Z");
    assert_eq!(
        serde_json::to_value(&payload).expect("serialize"),
        serde_json::json!({
            "embeds": [{
                "title": "New Contact Form Submission from Asha",
                "color": 39423,
                "fields": [
                    {"name": "Name", "value": "Asha", "inline": true},
                    {"name": "Email", "value": "asha@example.com", "inline": true},
                    {"name": "Subject", "value": "Soil test"},
                    {"name": "Message", "value": "How do I sample my field?"}
                ],
                "timestamp": "2026-10-18T09:30:00Z"
            }]
        })
    );
}

#[test]
fn invalid_email_blocks_submission() {
    let mut form = filled_form();
    form.set_field("email", "asha.example.com");
    let errors = form.begin_submit().expect_err("bad email");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(), "email");
}

#[test]
fn successful_delivery_clears_form_and_confirms() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("valid");
    assert!(form.complete(submission.token, delivery_outcome(204)));
    assert_eq!(form.result().success().map(Summary::headline).as_deref(), Some(CONFIRMATION));
    assert!(form.form().iter().all(|(_, value)| value.is_empty()));
}

#[test]
fn rejected_delivery_keeps_form() {
    let mut form = filled_form();
    let submission = form.begin_submit().expect("valid");
    form.complete(submission.token, delivery_outcome(400));
    assert_eq!(form.result().error(), Some("HTTP error! status: 400"));
    assert_eq!(form.form().get("name"), "Asha");
}

#[test]
fn missing_webhook_is_config_error() {
    let error = missing_webhook();
    assert_eq!(error.error_code(), "E_CONFIG");
    assert!(!error.retryable());
}
