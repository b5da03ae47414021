use super::*;

#[test]
fn http_error_message_contains_status() {
    let err = SubmitError::Http { status: 503 };
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[test]
fn application_error_shows_service_message_verbatim() {
    let err = SubmitError::Application("Crop 'Barley' not found in historical data.".to_owned());
    assert_eq!(err.to_string(), "Crop 'Barley' not found in historical data.");
}

#[test]
fn decode_error_is_prefixed() {
    let err = SubmitError::Decode("expected value at line 1 column 1".to_owned());
    assert_eq!(err.to_string(), "unexpected response: expected value at line 1 column 1");
}

#[test]
fn error_codes_are_distinct() {
    let errors = [
        SubmitError::Network(String::new()),
        SubmitError::Http { status: 500 },
        SubmitError::Application(String::new()),
        SubmitError::Decode(String::new()),
        SubmitError::Incomplete(String::new()),
        SubmitError::Config(String::new()),
    ];
    let mut codes: Vec<_> = errors.iter().map(SubmitError::error_code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn retryable_covers_transport_and_server_side_statuses() {
    assert!(SubmitError::Network("offline".to_owned()).retryable());
    assert!(SubmitError::Http { status: 429 }.retryable());
    assert!(SubmitError::Http { status: 502 }.retryable());
    assert!(!SubmitError::Http { status: 404 }.retryable());
    assert!(!SubmitError::Application("bad image".to_owned()).retryable());
}
