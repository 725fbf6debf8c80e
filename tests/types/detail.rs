use status_rail::{Detail, DetailError};

#[test]
fn type_name_is_last_url_segment() {
    let detail = Detail::new("type.googleapis.com/google.rpc.ErrorInfo", vec![]);
    assert_eq!(detail.type_name(), Some("google.rpc.ErrorInfo"));
    assert_eq!(detail.type_url(), "type.googleapis.com/google.rpc.ErrorInfo");
}

#[test]
fn bare_prefix_slash_still_names_a_type() {
    let detail = Detail::new("/acme.Quota", vec![1]);
    assert_eq!(detail.type_name(), Some("acme.Quota"));
    assert!(detail.validate().is_ok());
}

#[test]
fn url_without_type_name_is_invalid() {
    for url in ["", "acme.Quota", "type.googleapis.com/"] {
        let detail = Detail::new(url, vec![]);
        assert_eq!(detail.type_name(), None);
        assert_eq!(detail.validate(), Err(DetailError::InvalidTypeUrl(url.to_string())));
    }
}

#[test]
fn into_parts_returns_url_and_value() {
    let detail = Detail::new("/acme.Quota", vec![1, 2, 3]);
    assert_eq!(detail.value(), &[1, 2, 3]);

    let (url, value) = detail.into_parts();
    assert_eq!(url, "/acme.Quota");
    assert_eq!(value, vec![1, 2, 3]);
}

#[test]
fn detail_error_messages() {
    assert_eq!(DetailError::OkStatus.to_string(), "no error details for status with code ok");
    assert_eq!(
        DetailError::InvalidTypeUrl("x".into()).to_string(),
        "invalid detail type url: \"x\""
    );
    assert_eq!(
        DetailError::TypeMismatch { expected: "/acme.Quota".into(), actual: "/acme.Other".into() }
            .to_string(),
        "detail type mismatch: expected \"/acme.Quota\", found \"/acme.Other\""
    );
    assert_eq!(
        DetailError::Decode("truncated".into()).to_string(),
        "failed to decode status details: truncated"
    );
}

#[cfg(feature = "serde")]
#[test]
fn detail_serializes_with_serde() {
    let detail = Detail::new("/acme.Quota", vec![7]);
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["type_url"], "/acme.Quota");
    let back: Detail = serde_json::from_value(json).unwrap();
    assert_eq!(back, detail);
}
