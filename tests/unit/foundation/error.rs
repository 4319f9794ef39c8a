use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FourcutError::selection("x")
            .to_string()
            .contains("selection error:")
    );
    assert!(
        FourcutError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        FourcutError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        FourcutError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FourcutError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
