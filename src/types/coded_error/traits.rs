use super::CodedError;
use crate::types::alloc_type::ToString;
use crate::types::Status;
use core::fmt::{self, Debug, Display};

impl Display for CodedError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.cause, f)
    }
}

impl Debug for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodedError")
            .field("code", &self.code)
            .field("cause", &self.cause)
            .field("details", &self.details)
            .finish()
    }
}

impl core::error::Error for CodedError {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&*self.cause)
    }
}

/// Two coded errors are equal when code, details, and rendered text all match.
///
/// The cause is compared by its text since arbitrary boxed errors have no equality.
impl PartialEq for CodedError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.details == other.details
            && self.cause.to_string() == other.cause.to_string()
    }
}

impl Eq for CodedError {}

impl From<CodedError> for Status {
    #[inline]
    fn from(error: CodedError) -> Self {
        error.to_status()
    }
}

impl From<&CodedError> for Status {
    #[inline]
    fn from(error: &CodedError) -> Self {
        error.to_status()
    }
}
