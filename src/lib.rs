//! Status codes that survive error wrapping.
//!
//! Attach a [`Code`] (and optionally structured [`Detail`]s) to an error once, at the point
//! where the classification is known. Wrap it with as much human-readable context as you like
//! on the way up; the rendered text never shows the code, and a response serializer at the top
//! recovers it with [`Status::from_error`] or [`extract_code`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `status_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Attach a code
//!
//! ```
//! use status_rail::{extract_code, Code, CodedError};
//!
//! let err = CodedError::msg(Code::InvalidArgument, "place id is invalid");
//!
//! assert_eq!(err.to_string(), "place id is invalid");
//! assert_eq!(extract_code(&err), Code::InvalidArgument);
//! ```
//!
//! ## Add context without losing it
//!
//! ```
//! use status_rail::{errorf, extract_code, Code, CodedError};
//!
//! let err = CodedError::msg(Code::InvalidArgument, "place id is invalid");
//! let err = errorf!("failed to parse place name, {}", err);
//! let err = errorf!("handling request {}: {}", 7, err);
//!
//! assert_eq!(err.to_string(), "handling request 7: failed to parse place name, place id is invalid");
//! assert_eq!(extract_code(&*err), Code::InvalidArgument);
//! ```
//!
//! ## Hand a status to the transport
//!
//! ```
//! use status_rail::{errorf, Code, Status};
//!
//! let err = errorf!("context: {}", "boom");
//! let status = Status::from_error(&*err);
//!
//! assert_eq!(status.code(), Code::Unknown);
//! assert_eq!(status.message(), "context: boom");
//! assert!(status.details().is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Code-carrying composition, chain walking, and extraction
pub mod compose;
/// Conversions to statuses and transport types
pub mod convert;
/// Formatting macros for building and wrapping errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for `Result`
pub mod traits;
/// CodedError, Status, and supporting types
pub mod types;

/// Tower integration - Layer and Service implementations (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub use compose::*;
pub use traits::*;
pub use types::{
    BoxError, BoxResult, Code, CodedError, CodedResult, Detail, DetailError, DetailResult,
    DetailVec, Status, Wrapped,
};

#[doc(hidden)]
pub mod __private {
    #[cfg(not(feature = "std"))]
    pub use alloc::format;
    #[cfg(feature = "std")]
    pub use std::format;
}
