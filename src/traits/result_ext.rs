//! Extension trait for attaching codes and context to `Result` types.
//!
//! This module provides [`ResultExt`], which replaces `.map_err(|e| CodedError::new(..))`
//! and `.map_err(|e| errorf!(..))` chains with short method calls.
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::ResultExt;
//! use status_rail::{extract_code, BoxError, Code};
//!
//! fn load_place() -> Result<String, BoxError> {
//!     let raw: Result<String, std::io::Error> =
//!         Err(std::io::Error::new(std::io::ErrorKind::NotFound, "places.json missing"));
//!     let raw = raw.code(Code::NotFound)?;
//!     Ok(raw)
//! }
//!
//! let err = load_place().ctx("loading places").unwrap_err();
//! assert_eq!(err.to_string(), "loading places: places.json missing");
//! assert_eq!(extract_code(&*err), Code::NotFound);
//! ```

use crate::compose::compose;
use crate::types::alloc_type::{BoxError, String};
use crate::types::{Code, CodedError, Wrapped};
use core::fmt::Display;

/// Extension trait for classifying and wrapping errors on `Result` types.
///
/// The context methods render as `"{context}: {error}"` and go through [`compose`], so a code
/// attached lower down stays recoverable.
pub trait ResultExt<T, E> {
    /// Attaches `code` to the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::traits::ResultExt;
    /// use status_rail::Code;
    ///
    /// let result: Result<(), &str> = Err("place id is invalid");
    /// let err = result.code(Code::InvalidArgument).unwrap_err();
    /// assert_eq!(err.code(), Code::InvalidArgument);
    /// assert_eq!(err.to_string(), "place id is invalid");
    /// ```
    fn code(self, code: Code) -> Result<T, CodedError>;

    /// Attaches a code computed from the error. The closure only runs on `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::traits::ResultExt;
    /// use status_rail::Code;
    /// use std::io;
    ///
    /// let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
    /// let err = result
    ///     .code_with(|e| match e.kind() {
    ///         io::ErrorKind::NotFound => Code::NotFound,
    ///         _ => Code::Internal,
    ///     })
    ///     .unwrap_err();
    /// assert_eq!(err.code(), Code::NotFound);
    /// ```
    fn code_with<F>(self, f: F) -> Result<T, CodedError>
    where
        F: FnOnce(&E) -> Code;

    /// Wraps the error with a context message, keeping the code beneath.
    fn ctx<C: Display>(self, context: C) -> Result<T, BoxError>;

    /// Wraps the error with a lazily built context message, keeping the code beneath.
    ///
    /// The closure only runs on `Err`.
    fn ctx_with<F>(self, f: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn code(self, code: Code) -> Result<T, CodedError> {
        self.map_err(|e| CodedError::new(code, e))
    }

    #[inline]
    fn code_with<F>(self, f: F) -> Result<T, CodedError>
    where
        F: FnOnce(&E) -> Code,
    {
        self.map_err(|e| {
            let code = f(&e);
            CodedError::new(code, e)
        })
    }

    #[inline]
    fn ctx<C: Display>(self, context: C) -> Result<T, BoxError> {
        self.map_err(|e| wrap_with_context(context, e.into()))
    }

    #[inline]
    fn ctx_with<F>(self, f: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| wrap_with_context(f(), e.into()))
    }
}

fn wrap_with_context<C: Display>(context: C, error: BoxError) -> BoxError {
    let message = crate::__private::format!("{}: {}", context, error);
    compose(Wrapped::new(message, error))
}
