use bytes::Bytes;
use prost_types::Duration;
use status_rail::convert::into_tonic_status;
use status_rail::{errorf, extract_code, Code, CodedError, Detail, DetailError, Status};

#[test]
fn codes_map_both_ways() {
    for code in Code::ALL {
        let wire = tonic::Code::from(code);
        assert_eq!(wire as i32, code as i32);
        assert_eq!(Code::from(wire), code);
    }
}

#[test]
fn coded_error_converts_to_tonic_status() {
    let err = CodedError::msg(Code::InvalidArgument, "place id is invalid");
    let wire = tonic::Status::from(err);

    assert_eq!(wire.code(), tonic::Code::InvalidArgument);
    assert_eq!(wire.message(), "place id is invalid");
    assert!(wire.details().is_empty());
}

#[test]
fn details_round_trip_through_tonic() {
    let retry = Duration { seconds: 30, nanos: 0 };
    let err = CodedError::msg(Code::Unavailable, "try later").with_details([Detail::pack(&retry)]);

    let wire = tonic::Status::from(err);
    assert!(!wire.details().is_empty());

    let status = Status::from(&wire);
    assert_eq!(status.code(), Code::Unavailable);
    assert_eq!(status.message(), "try later");

    let details: Vec<&Detail> = status.valid_details().collect();
    assert_eq!(details.len(), 1);
    assert_eq!(details[0].unpack::<Duration>().unwrap(), retry);
}

#[test]
fn undecodable_details_become_error_entries() {
    let wire = tonic::Status::with_details(
        tonic::Code::Internal,
        "oops",
        Bytes::from_static(&[0xff, 0xff, 0xff]),
    );
    let status = Status::from(wire);

    assert_eq!(status.code(), Code::Internal);
    assert_eq!(status.details().len(), 1);
    assert!(matches!(status.details()[0], Err(DetailError::Decode(_))));
    assert_eq!(status.valid_details().count(), 0);
}

#[test]
fn tonic_status_in_chain_is_recognized() {
    let upstream = tonic::Status::not_found("no such place");
    let err = errorf!("calling places: {}", upstream);

    assert_eq!(extract_code(&*err), Code::NotFound);
    assert_eq!(err.downcast_ref::<CodedError>().unwrap().code(), Code::NotFound);
}

#[test]
fn into_tonic_status_uses_outer_text() {
    let err = errorf!("rendering page: {}", CodedError::msg(Code::NotFound, "no such place"));
    let wire = into_tonic_status(&*err);

    assert_eq!(wire.code(), tonic::Code::NotFound);
    assert_eq!(wire.message(), "rendering page: no such place");
}

#[test]
fn unpack_checks_type_url() {
    let detail = Detail::new("/acme.Other", vec![]);
    let result = detail.unpack::<Duration>();

    assert!(matches!(result, Err(DetailError::TypeMismatch { .. })));
}
