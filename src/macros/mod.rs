//! Formatting macros for building and wrapping errors.
//!
//! - [`macro@crate::wrapf`] - Formats a message and, by convention, treats the final
//!   argument as the cause. Produces a plain [`Wrapped`](crate::Wrapped) with no code.
//! - [`macro@crate::errorf`] - Same formatting, then [`compose`](crate::compose)s the
//!   result so the code beneath the new wrap is carried forward.
//! - [`macro@crate::coded`] - Builds a [`CodedError`](crate::CodedError) from a formatted
//!   message.
//!
//! # Examples
//!
//! ```
//! use status_rail::{coded, errorf, extract_code, Code};
//!
//! fn parse_place(id: &str) -> Result<u64, status_rail::CodedError> {
//!     id.parse().map_err(|_| coded!(Code::InvalidArgument, "place id {:?} is invalid", id))
//! }
//!
//! let err = parse_place("x1").map_err(|err| errorf!("failed to parse place name, {}", err));
//! let err = err.unwrap_err();
//!
//! assert_eq!(err.to_string(), "failed to parse place name, place id \"x1\" is invalid");
//! assert_eq!(extract_code(&*err), Code::InvalidArgument);
//! ```

/// Formats an error message whose final argument is also the error's cause.
///
/// Every argument is substituted positionally as with [`format!`]. The last argument is
/// additionally moved into the resulting [`Wrapped`](crate::Wrapped) as its direct
/// [`source`](core::error::Error::source), so it must implement
/// `Into<`[`BoxError`](crate::BoxError)`>`. With no arguments, the result has no cause.
///
/// # Examples
///
/// ```rust
/// use core::error::Error;
/// use status_rail::wrapf;
///
/// let err = wrapf!("step {} of {} failed: {}", 2, 3, "disk full");
/// assert_eq!(err.to_string(), "step 2 of 3 failed: disk full");
/// assert_eq!(err.source().unwrap().to_string(), "disk full");
///
/// let leaf = wrapf!("nothing to wrap");
/// assert!(leaf.source().is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($fmt:literal $(,)?) => {
        $crate::Wrapped::leaf($crate::__private::format!($fmt))
    };
    ($fmt:literal, $($arg:expr),+ $(,)?) => {
        $crate::__wrapf_split!($fmt; []; $($arg),+)
    };
}

/// Moves leading arguments into the accumulator until only the cause is left.
#[doc(hidden)]
#[macro_export]
macro_rules! __wrapf_split {
    ($fmt:literal; [$($done:expr),*]; $cause:expr) => {{
        let cause = $cause;
        let message = $crate::__private::format!($fmt, $($done,)* cause);
        $crate::Wrapped::new(message, cause)
    }};
    ($fmt:literal; [$($done:expr),*]; $next:expr, $($rest:expr),+) => {
        $crate::__wrapf_split!($fmt; [$($done,)* $next]; $($rest),+)
    };
}

/// Formats like [`wrapf!`] and composes the result, carrying the cause's code forward.
///
/// Expands to `compose(wrapf!(...))` and returns a [`BoxError`](crate::BoxError). The text is
/// identical to what [`wrapf!`] alone produces.
///
/// # Examples
///
/// ```rust
/// use status_rail::{errorf, extract_code, Code, CodedError};
///
/// let err = errorf!("context: {}", CodedError::msg(Code::NotFound, "no such place"));
/// assert_eq!(err.to_string(), "context: no such place");
/// assert_eq!(extract_code(&*err), Code::NotFound);
/// ```
#[macro_export]
macro_rules! errorf {
    ($($tt:tt)+) => {
        $crate::compose($crate::wrapf!($($tt)+))
    };
}

/// Builds a [`CodedError`](crate::CodedError) from a code and a formatted message.
///
/// # Examples
///
/// ```rust
/// use status_rail::{coded, Code};
///
/// let err = coded!(Code::NotFound, "place {} not found", 42);
/// assert_eq!(err.code(), Code::NotFound);
/// assert_eq!(err.to_string(), "place 42 not found");
/// ```
#[macro_export]
macro_rules! coded {
    ($code:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::CodedError::msg($code, $crate::__private::format!($fmt $(, $arg)*))
    };
}
