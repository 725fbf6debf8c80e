//! Error types and the transport status they convert into.
//!
//! - [`CodedError`]: an error decorated with a [`Code`] and [`Detail`]s
//! - [`Wrapped`]: a formatted error pointing at its cause
//! - [`Status`]: the code/message/details triple handed to transports
//!
//! # Examples
//!
//! ```
//! use status_rail::{Code, CodedError, Detail, Status};
//!
//! let err = CodedError::msg(Code::InvalidArgument, "place id is invalid")
//!     .with_details([Detail::new("type.googleapis.com/google.rpc.BadRequest", vec![])]);
//!
//! let status = Status::from(&err);
//! assert_eq!(status.code(), Code::InvalidArgument);
//! assert_eq!(status.message(), "place id is invalid");
//! assert_eq!(status.valid_details().count(), 1);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod code;
pub mod coded_error;
pub mod detail;
pub mod status;
pub mod wrapped;

pub use alloc_type::BoxError;
pub use code::Code;
pub use coded_error::CodedError;
pub use detail::{Detail, DetailError, DetailResult};
pub use status::Status;
pub use wrapped::Wrapped;

/// SmallVec-backed collection holding the details of a [`CodedError`].
///
/// Uses inline storage for a single detail, which covers the common case
/// of at most one detail per error without a heap allocation.
pub type DetailVec = SmallVec<[Detail; 1]>;

/// Result alias whose failures are [`CodedError`]s.
pub type CodedResult<T> = Result<T, CodedError>;

/// Result alias whose failures are type-erased, as returned by composition.
pub type BoxResult<T> = Result<T, BoxError>;
