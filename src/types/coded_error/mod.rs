//! Error type that carries a status code without showing it.
//!
//! [`CodedError`] decorates any error with a [`Code`] and optional [`Detail`]s. Its
//! rendered text is exactly the text of the error it wraps, so the code stays out of
//! human-facing logs while remaining recoverable through [`extract_code`](crate::extract_code)
//! or [`Status::from_error`], no matter how many times the error is wrapped on the way up.

use crate::types::alloc_type::{BoxError, String, ToString};
use crate::types::{Code, Detail, DetailVec, Status};

mod traits;

/// An error decorated with a classification code and structured details.
///
/// # Examples
///
/// ```
/// use status_rail::{extract_code, Code, CodedError};
///
/// let err = CodedError::msg(Code::InvalidArgument, "place id is invalid");
///
/// assert_eq!(err.to_string(), "place id is invalid");
/// assert_eq!(extract_code(&err), Code::InvalidArgument);
/// ```
#[must_use]
pub struct CodedError {
    pub(crate) code: Code,
    pub(crate) cause: BoxError,
    pub(crate) details: DetailVec,
}

impl CodedError {
    /// Wraps an existing error verbatim.
    #[inline]
    pub fn new<E>(code: Code, error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { code, cause: error.into(), details: DetailVec::new() }
    }

    /// Builds a leaf error from `message` and wraps it.
    #[inline]
    pub fn msg(code: Code, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::new(code, BoxError::from(message))
    }

    /// Sets the detail list.
    ///
    /// Replaces any details set earlier; meant to be called while the error is being built.
    #[inline]
    pub fn with_details<I>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = Detail>,
    {
        self.details = details.into_iter().collect();
        self
    }

    /// Returns the code.
    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    /// Returns the attached details.
    #[inline]
    pub fn details(&self) -> &[Detail] {
        &self.details
    }

    /// Returns the wrapped error.
    #[inline]
    pub fn cause(&self) -> &(dyn core::error::Error + Send + Sync + 'static) {
        &*self.cause
    }

    /// Consumes the coded error, returning the wrapped error.
    #[inline]
    pub fn into_cause(self) -> BoxError {
        self.cause
    }

    /// Converts into a transport status.
    ///
    /// Details that cannot be attached are dropped and the status is returned without them;
    /// code and message are always kept.
    pub fn to_status(&self) -> Status {
        let status = Status::new(self.code, self.cause.to_string());
        if self.details.is_empty() {
            return status;
        }

        match status.with_details(self.details.iter().cloned()) {
            Ok(detailed) => detailed,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    code = %self.code,
                    error = %_err,
                    "dropping status details that could not be attached"
                );
                status
            },
        }
    }
}
