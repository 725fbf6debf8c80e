use status_rail::Code;

#[test]
fn default_code_is_unknown() {
    assert_eq!(Code::default(), Code::Unknown);
}

#[test]
fn from_i32_matches_discriminants() {
    for code in Code::ALL {
        assert_eq!(Code::from_i32(code as i32), code);
        assert_eq!(Code::from(i32::from(code)), code);
    }
}

#[test]
fn from_i32_out_of_range_is_unknown() {
    assert_eq!(Code::from_i32(-1), Code::Unknown);
    assert_eq!(Code::from_i32(17), Code::Unknown);
    assert_eq!(Code::from_i32(i32::MAX), Code::Unknown);
}

#[test]
fn display_uses_snake_case_names() {
    assert_eq!(Code::InvalidArgument.to_string(), "invalid_argument");
    assert_eq!(Code::DeadlineExceeded.to_string(), "deadline_exceeded");
    assert_eq!(Code::Ok.to_string(), "ok");
}

#[test]
fn only_ok_is_ok() {
    assert!(Code::Ok.is_ok());
    assert_eq!(Code::ALL.iter().filter(|code| code.is_ok()).count(), 1);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_snake_case() {
    let json = serde_json::to_string(&Code::NotFound).unwrap();
    assert_eq!(json, "\"not_found\"");

    let code: Code = serde_json::from_str("\"permission_denied\"").unwrap();
    assert_eq!(code, Code::PermissionDenied);
}
