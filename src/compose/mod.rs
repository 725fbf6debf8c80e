//! Carrying codes across formatted wrapping, and reading them back.
//!
//! Call sites add human-readable context with ordinary formatting and never thread
//! the code forward by hand: [`compose`] looks beneath the newest wrap, finds the
//! status-bearing error there, and re-surfaces its code and details on a fresh
//! [`CodedError`] around the formatted text.
//!
//! ```
//! use status_rail::{errorf, extract_code, wrapf, Code, CodedError};
//!
//! let err = CodedError::msg(Code::InvalidArgument, "place id is invalid");
//! let wrapped = errorf!("failed to parse place name, {}", err);
//!
//! assert_eq!(wrapped.to_string(), "failed to parse place name, place id is invalid");
//! assert_eq!(extract_code(&*wrapped), Code::InvalidArgument);
//!
//! // Plain formatting keeps the same text but does not re-surface the code.
//! let err = CodedError::msg(Code::InvalidArgument, "place id is invalid");
//! let plain = wrapf!("failed to parse place name, {}", err);
//! assert_eq!(plain.to_string(), wrapped.to_string());
//! ```

use crate::types::alloc_type::BoxError;
use crate::types::{Code, CodedError, DetailVec, Status};
use core::error::Error;

mod chain;
mod config;

pub use chain::{chain, chain_contains, Chain};
pub use config::{ChainWalk, ComposeConfig, DEFAULT_MAX_DEPTH};

/// Wraps an already formatted error in a [`CodedError`] carrying the code found beneath it.
///
/// Uses the default [`ComposeConfig`], which inspects only the direct cause.
///
/// - If `formatted` has no source, it is returned unchanged and no [`CodedError`] is produced.
/// - If its direct cause is status-bearing (see [`Status::recognize`]), that code is used and
///   its detail entries are copied, dropping the entries that are errors.
/// - Otherwise the result carries [`Code::Unknown`] and no details.
///
/// The rendered text is always exactly the text of `formatted`.
#[inline]
pub fn compose<E>(formatted: E) -> BoxError
where
    E: Into<BoxError>,
{
    ComposeConfig::new().compose(formatted)
}

impl ComposeConfig {
    /// Composes with this configuration. See [`compose`].
    pub fn compose<E>(&self, formatted: E) -> BoxError
    where
        E: Into<BoxError>,
    {
        let formatted: BoxError = formatted.into();
        let found = match formatted.source() {
            Some(unwrapped) => self.find_status(unwrapped),
            None => return formatted,
        };

        let (code, details) = match found {
            Some(status) => {
                let code = status.code();
                let details: DetailVec =
                    status.into_details().into_iter().filter_map(Result::ok).collect();
                (code, details)
            },
            None => (Code::Unknown, DetailVec::new()),
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(%code, details = details.len(), "carrying status code across wrap");

        BoxError::from(CodedError { code, cause: formatted, details })
    }

    fn find_status(&self, unwrapped: &(dyn Error + 'static)) -> Option<Status> {
        match self.walk {
            ChainWalk::Shallow => Status::recognize(unwrapped),
            ChainWalk::Deep => {
                chain(unwrapped).take(self.max_depth.max(1)).find_map(Status::recognize)
            },
        }
    }
}

/// Returns the code of the first status-bearing error in the chain of `error`.
///
/// The chain is walked one [`Error::source`] step at a time starting at `error` itself;
/// links of other types are stepped over. Returns [`Code::Unknown`] when none is found.
///
/// # Examples
///
/// ```
/// use status_rail::{extract_code, wrapf, Code, CodedError};
///
/// let err = wrapf!("outer: {}", wrapf!("inner: {}", CodedError::msg(Code::NotFound, "gone")));
/// assert_eq!(extract_code(&err), Code::NotFound);
///
/// let plain = wrapf!("outer: {}", "boom");
/// assert_eq!(extract_code(&plain), Code::Unknown);
/// ```
pub fn extract_code(error: &(dyn Error + 'static)) -> Code {
    chain(error).find_map(status_code).unwrap_or_default()
}

/// Returns the first [`CodedError`] in the chain of `error`.
pub fn find_coded<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a CodedError> {
    chain(error).find_map(|link| link.downcast_ref::<CodedError>())
}

fn status_code(error: &(dyn Error + 'static)) -> Option<Code> {
    if let Some(coded) = error.downcast_ref::<CodedError>() {
        return Some(coded.code());
    }
    if let Some(status) = error.downcast_ref::<Status>() {
        return Some(status.code());
    }
    #[cfg(feature = "tonic")]
    if let Some(status) = error.downcast_ref::<tonic::Status>() {
        return Some(Code::from(status.code()));
    }
    None
}
