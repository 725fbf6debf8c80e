use status_rail::convert::into_status;
use status_rail::{errorf, BoxError, Code, CodedError, Detail};

#[cfg(feature = "tonic")]
mod grpc;

#[test]
fn into_status_recovers_code_and_outer_text() {
    let detail = Detail::new("/acme.Hint", vec![1]);
    let err = errorf!(
        "saving review: {}",
        CodedError::msg(Code::PermissionDenied, "not the author").with_details([detail.clone()])
    );
    let status = into_status(err);

    assert_eq!(status.code(), Code::PermissionDenied);
    assert_eq!(status.message(), "saving review: not the author");
    assert_eq!(status.valid_details().cloned().collect::<Vec<_>>(), vec![detail]);
}

#[test]
fn into_status_of_plain_error() {
    let err: BoxError = "socket closed".into();
    let status = into_status(err);

    assert_eq!(status.code(), Code::Unknown);
    assert_eq!(status.message(), "socket closed");
}
