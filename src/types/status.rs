//! Transport-neutral status value.
//!
//! [`Status`] is what a response serializer turns into a wire status: a code, a
//! human-readable message and a list of detail entries. It is also the shape in which
//! composition reads the classification of an error beneath a new wrap, through
//! [`Status::recognize`].

use crate::compose::chain;
use crate::types::alloc_type::{String, ToString, Vec};
use crate::types::{Code, CodedError, Detail, DetailError, DetailResult};
use core::error::Error;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A status code, message, and detail entries.
///
/// # Examples
///
/// ```
/// use status_rail::{Code, Detail, Status};
///
/// let status = Status::new(Code::NotFound, "place not found")
///     .with_details([Detail::new("type.googleapis.com/google.rpc.ResourceInfo", vec![])])
///     .unwrap();
///
/// assert_eq!(status.code(), Code::NotFound);
/// assert_eq!(status.message(), "place not found");
/// assert_eq!(status.details().len(), 1);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: Code,
    message: String,
    details: Vec<DetailResult>,
}

impl Status {
    /// Creates a status without details.
    #[inline]
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), details: Vec::new() }
    }

    /// Creates a status from already-decoded detail entries.
    ///
    /// Transports use this when some entries failed to decode; those stay in the list as `Err`.
    #[inline]
    pub fn from_parts(code: Code, message: impl Into<String>, details: Vec<DetailResult>) -> Self {
        Self { code, message: message.into(), details }
    }

    /// Returns a copy of this status with `details` appended.
    ///
    /// # Errors
    ///
    /// - [`DetailError::OkStatus`] if the code is [`Code::Ok`]
    /// - [`DetailError::InvalidTypeUrl`] for the first detail whose type URL names no type
    pub fn with_details<I>(&self, details: I) -> Result<Status, DetailError>
    where
        I: IntoIterator<Item = Detail>,
    {
        if self.code.is_ok() {
            return Err(DetailError::OkStatus);
        }

        let mut status = self.clone();
        for detail in details {
            detail.validate()?;
            status.details.push(Ok(detail));
        }
        Ok(status)
    }

    /// Returns the status code.
    #[inline]
    pub fn code(&self) -> Code {
        self.code
    }

    /// Returns the message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the detail entries in attachment order.
    #[inline]
    pub fn details(&self) -> &[DetailResult] {
        &self.details
    }

    /// Consumes the status, returning its detail entries.
    #[inline]
    pub fn into_details(self) -> Vec<DetailResult> {
        self.details
    }

    /// Returns an iterator over the entries that are actual details, skipping failed ones.
    #[inline]
    pub fn valid_details(&self) -> impl Iterator<Item = &Detail> + '_ {
        self.details.iter().filter_map(|entry| entry.as_ref().ok())
    }

    /// Recognizes a single error value as status-bearing.
    ///
    /// Only the value itself is inspected; its sources are not. Recognized types are
    /// [`CodedError`], [`Status`], and with the `tonic` feature `tonic::Status`.
    pub fn recognize(error: &(dyn Error + 'static)) -> Option<Status> {
        if let Some(coded) = error.downcast_ref::<CodedError>() {
            return Some(coded.to_status());
        }
        if let Some(status) = error.downcast_ref::<Status>() {
            return Some(status.clone());
        }
        #[cfg(feature = "tonic")]
        if let Some(status) = error.downcast_ref::<tonic::Status>() {
            return Some(Status::from(status));
        }
        None
    }

    /// Builds the status a response serializer should send for `error`.
    ///
    /// Walks the source chain and takes the code and details of the first status-bearing
    /// link. The message is always the rendered text of `error` itself, so context added by
    /// outer wrappers is kept. Falls back to [`Code::Unknown`] when nothing is recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use status_rail::{errorf, Code, CodedError, Status};
    ///
    /// let err = errorf!("loading place: {}", CodedError::msg(Code::NotFound, "no such place"));
    /// let status = Status::from_error(&*err);
    ///
    /// assert_eq!(status.code(), Code::NotFound);
    /// assert_eq!(status.message(), "loading place: no such place");
    /// ```
    pub fn from_error(error: &(dyn Error + 'static)) -> Status {
        let message = error.to_string();
        match chain(error).find_map(Status::recognize) {
            Some(found) => Status { code: found.code, message, details: found.details },
            None => Status::new(Code::Unknown, message),
        }
    }
}

/// Renders as `status: <code>, message: "<message>"`.
///
/// Unlike [`CodedError`], the code is part of the text, so formatting a `Status` into a
/// wrapper exposes the code in the resulting message. Compose over a [`CodedError`] when the
/// text is meant for people.
impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status: {}, message: {:?}", self.code, self.message)
    }
}

impl Error for Status {}

impl From<Code> for Status {
    #[inline]
    fn from(code: Code) -> Self {
        Status::new(code, String::new())
    }
}
