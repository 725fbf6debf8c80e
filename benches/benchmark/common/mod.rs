use criterion::Criterion;
use status_rail::{errorf, wrapf, BoxError, Code, CodedError, Detail};
use std::time::Duration;

// ============================================================================
// Test Data
// ============================================================================

pub fn field_violation() -> Detail {
    Detail::new("type.googleapis.com/google.rpc.BadRequest", vec![0x0a, 0x04, 0x0a, 0x02, 0x69, 0x64])
}

pub fn invalid_place() -> CodedError {
    CodedError::msg(Code::InvalidArgument, "place id is invalid")
}

/// Builds an error composed `depth` times over a coded root.
pub fn composed_chain(depth: usize) -> BoxError {
    let mut err: BoxError = invalid_place().with_details([field_violation()]).into();
    for i in 0..depth {
        err = errorf!("layer {}: {}", i, err);
    }
    err
}

/// Builds an error plainly wrapped `depth` times over a coded root.
pub fn plain_chain(depth: usize) -> BoxError {
    let mut err: BoxError = invalid_place().into();
    for i in 0..depth {
        err = wrapf!("layer {}: {}", i, err).into();
    }
    err
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
