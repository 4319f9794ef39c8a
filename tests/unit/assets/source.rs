use super::*;

use base64::Engine as _;

#[test]
fn data_url_round_trips_payload() {
    let payload = b"not really an image, but bytes";
    let url = format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(payload)
    );
    let bytes = ImageSource::DataUrl(url).read_bytes().unwrap();
    assert_eq!(bytes, payload);
}

#[test]
fn data_url_without_marker_is_rejected() {
    let err = ImageSource::DataUrl("data:image/png,abcdef".to_string())
        .read_bytes()
        .unwrap_err();
    assert!(matches!(err, FourcutError::Decode(_)));
}

#[test]
fn non_data_scheme_is_rejected() {
    let err = ImageSource::DataUrl("https://example.com/x.png".to_string())
        .read_bytes()
        .unwrap_err();
    assert!(matches!(err, FourcutError::Decode(_)));
}

#[test]
fn invalid_base64_payload_is_rejected() {
    let err = ImageSource::DataUrl("data:image/png;base64,@@@@".to_string())
        .read_bytes()
        .unwrap_err();
    assert!(matches!(err, FourcutError::Decode(_)));
}

#[test]
fn inline_bytes_pass_through() {
    let bytes = ImageSource::Bytes(vec![1, 2, 3]).read_bytes().unwrap();
    assert_eq!(bytes, vec![1, 2, 3]);
}

#[test]
fn missing_file_is_a_decode_error() {
    let err = ImageSource::Path("/definitely/not/here.png".into())
        .read_bytes()
        .unwrap_err();
    assert!(matches!(err, FourcutError::Decode(_)));
}
