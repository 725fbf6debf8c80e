//! Conversions between coded errors, statuses, and transport types.
//!
//! The transport-neutral conversions live next to their types
//! (`From<CodedError> for Status`, `From<Code> for Status`). This module adds
//! [`into_status`] for type-erased errors and, behind the `tonic` feature, the
//! adapters to `tonic::Status` and `prost_types::Any` in [`grpc`].
//!
//! # Examples
//!
//! ```
//! use status_rail::convert::into_status;
//! use status_rail::{errorf, Code, CodedError};
//!
//! let err = errorf!("saving review: {}", CodedError::msg(Code::PermissionDenied, "not the author"));
//! let status = into_status(err);
//!
//! assert_eq!(status.code(), Code::PermissionDenied);
//! assert_eq!(status.message(), "saving review: not the author");
//! ```

use crate::types::alloc_type::BoxError;
use crate::types::Status;

#[cfg(feature = "tonic")]
pub mod grpc;

#[cfg(feature = "tonic")]
pub use grpc::into_tonic_status;

/// Converts a type-erased error into the status a response serializer should send.
///
/// Equivalent to [`Status::from_error`] on the boxed value.
#[inline]
pub fn into_status(error: BoxError) -> Status {
    Status::from_error(&*error)
}
