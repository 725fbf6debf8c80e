//! Formatted errors that keep a reference to their cause.
//!
//! [`Wrapped`] is what [`wrapf!`](crate::wrapf) produces: a message rendered with
//! `core::fmt`, optionally pointing at the error it was built from. It is the
//! plain wrapping layer; it never carries a code of its own.

use crate::types::alloc_type::{BoxError, String};
use core::fmt::{self, Debug, Display};

/// A preformatted message with an optional direct cause.
///
/// # Examples
///
/// ```
/// use core::error::Error;
/// use status_rail::Wrapped;
///
/// let inner = Wrapped::leaf("boom");
/// let outer = Wrapped::new("context: boom", inner);
///
/// assert_eq!(outer.to_string(), "context: boom");
/// assert_eq!(outer.source().map(|e| e.to_string()), Some("boom".into()));
/// ```
pub struct Wrapped {
    message: String,
    cause: Option<BoxError>,
}

impl Wrapped {
    /// Creates a formatted error whose direct cause is `cause`.
    #[inline]
    pub fn new<M, E>(message: M, cause: E) -> Self
    where
        M: Into<String>,
        E: Into<BoxError>,
    {
        Self { message: message.into(), cause: Some(cause.into()) }
    }

    /// Creates a formatted error without a cause.
    #[inline]
    pub fn leaf(message: impl Into<String>) -> Self {
        Self { message: message.into(), cause: None }
    }

    /// Returns the rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the direct cause, if any.
    #[inline]
    pub fn cause(&self) -> Option<&(dyn core::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the wrapper, returning the direct cause.
    #[inline]
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }
}

impl Display for Wrapped {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("message", &self.message)
            .field("cause", &self.cause)
            .finish()
    }
}

impl core::error::Error for Wrapped {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(&**cause),
            None => None,
        }
    }
}
