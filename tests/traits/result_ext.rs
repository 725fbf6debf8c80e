use status_rail::traits::ResultExt;
use status_rail::{extract_code, find_coded, BoxError, Code, CodedError};
use std::cell::Cell;
use std::io;

#[test]
fn code_attaches_to_err() {
    let result: Result<(), io::Error> = Err(io::Error::other("no route"));
    let err = result.code(Code::Unavailable).unwrap_err();

    assert_eq!(err.code(), Code::Unavailable);
    assert_eq!(err.to_string(), "no route");
}

#[test]
fn code_passes_ok_through() {
    let result: Result<u32, io::Error> = Ok(5);
    assert_eq!(result.code(Code::Internal).unwrap(), 5);
}

#[test]
fn code_with_classifies_by_error() {
    let classify = |e: &io::Error| match e.kind() {
        io::ErrorKind::NotFound => Code::NotFound,
        io::ErrorKind::PermissionDenied => Code::PermissionDenied,
        _ => Code::Internal,
    };

    let missing: Result<(), io::Error> = Err(io::ErrorKind::NotFound.into());
    let denied: Result<(), io::Error> = Err(io::ErrorKind::PermissionDenied.into());

    assert_eq!(missing.code_with(classify).unwrap_err().code(), Code::NotFound);
    assert_eq!(denied.code_with(classify).unwrap_err().code(), Code::PermissionDenied);
}

#[test]
fn code_with_is_lazy() {
    let called = Cell::new(false);
    let result: Result<(), io::Error> = Ok(());
    let _ = result.code_with(|_| {
        called.set(true);
        Code::Internal
    });
    assert!(!called.get());
}

#[test]
fn ctx_keeps_code_beneath() {
    let result: Result<(), CodedError> = Err(CodedError::msg(Code::NotFound, "no such place"));
    let err = result.ctx("loading place").unwrap_err();

    assert_eq!(err.to_string(), "loading place: no such place");
    assert_eq!(extract_code(&*err), Code::NotFound);
}

#[test]
fn ctx_chains() {
    fn inner() -> Result<(), BoxError> {
        Err::<(), _>("quota exceeded").code(Code::ResourceExhausted).ctx("uploading photo")
    }

    let err = inner().ctx("saving album").unwrap_err();
    assert_eq!(err.to_string(), "saving album: uploading photo: quota exceeded");
    assert_eq!(extract_code(&*err), Code::ResourceExhausted);
}

#[test]
fn ctx_over_plain_error_is_unknown() {
    let result: Result<(), io::Error> = Err(io::Error::other("boom"));
    let err = result.ctx("context").unwrap_err();

    assert_eq!(err.to_string(), "context: boom");
    assert_eq!(find_coded(&*err).map(CodedError::code), Some(Code::Unknown));
}

#[test]
fn ctx_with_is_lazy() {
    let called = Cell::new(false);
    let result: Result<u8, io::Error> = Ok(1);
    let value = result
        .ctx_with(|| {
            called.set(true);
            "never".to_string()
        })
        .unwrap();

    assert_eq!(value, 1);
    assert!(!called.get());
}

#[test]
fn ctx_with_builds_message_on_err() {
    let id = 42;
    let result: Result<(), CodedError> = Err(CodedError::msg(Code::Aborted, "conflict"));
    let err = result.ctx_with(|| format!("updating place {}", id)).unwrap_err();

    assert_eq!(err.to_string(), "updating place 42: conflict");
    assert_eq!(extract_code(&*err), Code::Aborted);
}
