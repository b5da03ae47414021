use super::*;

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[test]
fn encode_image_uses_padded_standard_alphabet() {
    assert_eq!(encode_image(PNG_HEADER), "iVBORw0KGgo=");
    assert_eq!(encode_image(&[0xfb, 0xff]), "+/8=");
}

#[test]
fn strip_removes_data_uri_header() {
    assert_eq!(strip_data_uri_prefix("data:image/png;base64,iVBORw0KGgo="), "iVBORw0KGgo=");
}

#[test]
fn strip_leaves_bare_base64_untouched() {
    assert_eq!(strip_data_uri_prefix("iVBORw0KGgo="), "iVBORw0KGgo=");
}

#[test]
fn strip_without_comma_returns_input() {
    assert_eq!(strip_data_uri_prefix("data:image/png"), "data:image/png");
}

#[test]
fn data_uri_round_trips_through_strip() {
    let uri = data_uri("image/jpeg", PNG_HEADER);
    assert!(uri.starts_with("data:image/jpeg;base64,"));
    assert_eq!(strip_data_uri_prefix(&uri), encode_image(PNG_HEADER));
}

#[test]
fn data_uri_defaults_mime() {
    assert!(data_uri("", b"x").starts_with("data:application/octet-stream;base64,"));
}
