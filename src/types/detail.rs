//! Structured detail payloads that travel alongside a status code.

use crate::types::alloc_type::{String, Vec};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A schema-tagged payload attached to a status for machine consumption.
///
/// The layout follows the protobuf `Any` convention: `type_url` names the schema as
/// `<prefix>/<fully.qualified.TypeName>` and `value` holds the encoded message. This crate
/// never decodes `value`; it only checks that the type URL names a type.
///
/// # Examples
///
/// ```
/// use status_rail::Detail;
///
/// let detail = Detail::new("type.googleapis.com/google.rpc.BadRequest", vec![0x0a, 0x00]);
/// assert_eq!(detail.type_name(), Some("google.rpc.BadRequest"));
/// assert!(detail.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Detail {
    type_url: String,
    value: Vec<u8>,
}

impl Detail {
    /// Creates a detail from a type URL and an already-encoded payload.
    #[inline]
    pub fn new(type_url: impl Into<String>, value: Vec<u8>) -> Self {
        Self { type_url: type_url.into(), value }
    }

    /// Returns the full type URL.
    #[inline]
    pub fn type_url(&self) -> &str {
        &self.type_url
    }

    /// Returns the fully qualified type name, the segment after the last `/`.
    ///
    /// Returns `None` when the URL has no `/` or the name segment is empty.
    pub fn type_name(&self) -> Option<&str> {
        let (_, name) = self.type_url.rsplit_once('/')?;
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }

    /// Returns the encoded payload.
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consumes the detail, returning `(type_url, value)`.
    #[inline]
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.type_url, self.value)
    }

    /// Checks that the detail can be attached to a status.
    pub fn validate(&self) -> Result<(), DetailError> {
        match self.type_name() {
            Some(_) => Ok(()),
            None => Err(DetailError::InvalidTypeUrl(self.type_url.clone())),
        }
    }
}

/// Reason a detail could not be attached to, or recovered from, a status.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DetailError {
    /// Details cannot be attached to a status whose code is [`Code::Ok`](crate::Code::Ok).
    OkStatus,
    /// The type URL does not name a type.
    InvalidTypeUrl(String),
    /// The detail holds a different type than the one requested.
    TypeMismatch {
        /// Type URL of the requested type.
        expected: String,
        /// Type URL found on the detail.
        actual: String,
    },
    /// The transport payload holding the details could not be decoded.
    Decode(String),
}

impl Display for DetailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailError::OkStatus => f.write_str("no error details for status with code ok"),
            DetailError::InvalidTypeUrl(url) => write!(f, "invalid detail type url: {:?}", url),
            DetailError::TypeMismatch { expected, actual } => {
                write!(f, "detail type mismatch: expected {:?}, found {:?}", expected, actual)
            },
            DetailError::Decode(reason) => write!(f, "failed to decode status details: {}", reason),
        }
    }
}

impl core::error::Error for DetailError {}

/// One entry of a status detail list.
///
/// Transports that decode details may fail on individual entries; those failures stay in the
/// list as `Err` so callers can tell a missing detail from an undecodable one.
pub type DetailResult = Result<Detail, DetailError>;
