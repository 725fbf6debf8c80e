//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use status_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`coded!`], [`errorf!`], [`wrapf!`]
//! - **Types**: [`Code`], [`CodedError`], [`Detail`], [`Status`]
//! - **Functions**: [`extract_code`]
//! - **Traits**: [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use status_rail::prelude::*;
//!
//! fn find_place(id: u64) -> BoxResult<String> {
//!     Err(coded!(Code::NotFound, "place {} does not exist", id).into())
//! }
//!
//! fn handler() -> BoxResult<String> {
//!     find_place(7).ctx("rendering place page")
//! }
//!
//! let status = Status::from_error(&*handler().unwrap_err());
//! assert_eq!(status.code(), Code::NotFound);
//! assert_eq!(status.message(), "rendering place page: place 7 does not exist");
//! ```

// Macros
pub use crate::{coded, errorf, wrapf};

// Core types
pub use crate::types::{BoxError, BoxResult, Code, CodedError, Detail, Status};

// Functions
pub use crate::compose::extract_code;

// Traits
pub use crate::traits::ResultExt;
