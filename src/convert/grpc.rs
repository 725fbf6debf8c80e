//! Adapters between this crate's status model and `tonic`.
//!
//! Details travel on the wire the way gRPC servers expect: the `details` bytes of a
//! `tonic::Status` hold an encoded `google.rpc.Status` whose `details` field is a list
//! of `google.protobuf.Any` messages.
//!
//! ```
//! use status_rail::{Code, CodedError, Detail, Status};
//!
//! let err = CodedError::msg(Code::InvalidArgument, "place id is invalid")
//!     .with_details([Detail::pack(&prost_types::Duration { seconds: 30, nanos: 0 })]);
//!
//! let wire = tonic::Status::from(err);
//! assert_eq!(wire.code(), tonic::Code::InvalidArgument);
//! assert_eq!(wire.message(), "place id is invalid");
//!
//! let back = Status::from(&wire);
//! assert_eq!(back.valid_details().count(), 1);
//! ```

use crate::types::alloc_type::{String, ToOwned, ToString, Vec};
use crate::types::{Code, CodedError, Detail, DetailError, DetailResult, Status};
use bytes::Bytes;
use core::error::Error;
use prost::{Message, Name};
use prost_types::Any;

/// The `google.rpc.Status` message.
#[derive(Clone, PartialEq, Message)]
struct RpcStatus {
    #[prost(int32, tag = "1")]
    code: i32,
    #[prost(string, tag = "2")]
    message: String,
    #[prost(message, repeated, tag = "3")]
    details: Vec<Any>,
}

impl From<Code> for tonic::Code {
    #[inline]
    fn from(code: Code) -> Self {
        tonic::Code::from_i32(code as i32)
    }
}

impl From<tonic::Code> for Code {
    #[inline]
    fn from(code: tonic::Code) -> Self {
        Code::from_i32(code as i32)
    }
}

impl From<Status> for tonic::Status {
    fn from(status: Status) -> Self {
        let code = tonic::Code::from(status.code());
        let details: Vec<Any> = status.valid_details().cloned().map(Any::from).collect();
        if details.is_empty() {
            return tonic::Status::new(code, status.message());
        }

        let rpc = RpcStatus {
            code: status.code() as i32,
            message: status.message().to_owned(),
            details,
        };
        tonic::Status::with_details(code, status.message(), Bytes::from(rpc.encode_to_vec()))
    }
}

impl From<&tonic::Status> for Status {
    fn from(status: &tonic::Status) -> Self {
        let code = Code::from(status.code());
        let message = status.message().to_owned();
        let raw = status.details();
        if raw.is_empty() {
            return Status::new(code, message);
        }

        let details: Vec<DetailResult> = match RpcStatus::decode(raw) {
            Ok(rpc) => rpc.details.into_iter().map(Detail::try_from).collect(),
            Err(err) => {
                let mut entries = Vec::with_capacity(1);
                entries.push(Err(DetailError::Decode(err.to_string())));
                entries
            },
        };
        Status::from_parts(code, message, details)
    }
}

impl From<tonic::Status> for Status {
    #[inline]
    fn from(status: tonic::Status) -> Self {
        Status::from(&status)
    }
}

impl From<CodedError> for tonic::Status {
    #[inline]
    fn from(error: CodedError) -> Self {
        tonic::Status::from(error.to_status())
    }
}

/// Converts any error into a `tonic::Status`, recovering its code through the source chain.
///
/// Useful at the edge of a gRPC handler whose internals return [`BoxError`](crate::BoxError):
/// `handler().await.map_err(|e| into_tonic_status(&*e))`.
#[inline]
pub fn into_tonic_status(error: &(dyn Error + 'static)) -> tonic::Status {
    tonic::Status::from(Status::from_error(error))
}

impl From<Detail> for Any {
    #[inline]
    fn from(detail: Detail) -> Self {
        let (type_url, value) = detail.into_parts();
        Any { type_url, value }
    }
}

impl TryFrom<Any> for Detail {
    type Error = DetailError;

    fn try_from(any: Any) -> Result<Self, Self::Error> {
        let detail = Detail::new(any.type_url, any.value);
        detail.validate()?;
        Ok(detail)
    }
}

impl Detail {
    /// Encodes a protobuf message as a detail tagged with its type URL.
    #[inline]
    pub fn pack<M: Name>(message: &M) -> Self {
        Detail::new(M::type_url(), message.encode_to_vec())
    }

    /// Decodes the payload as `M`.
    ///
    /// # Errors
    ///
    /// - [`DetailError::TypeMismatch`] if the type URL is not `M`'s
    /// - [`DetailError::Decode`] if the payload is not a valid `M`
    pub fn unpack<M: Name + Default>(&self) -> Result<M, DetailError> {
        let expected = M::type_url();
        if self.type_url() != expected {
            return Err(DetailError::TypeMismatch {
                expected,
                actual: self.type_url().to_owned(),
            });
        }
        M::decode(self.value()).map_err(|err| DetailError::Decode(err.to_string()))
    }
}
