//! Extension traits for working with coded errors.
//!
//! - [`ResultExt`]: attach a [`Code`](crate::Code) or composed context to any `Result`
//!
//! # Examples
//!
//! ```
//! use status_rail::traits::ResultExt;
//! use status_rail::{find_coded, Code};
//!
//! let result: Result<(), &str> = Err("quota exceeded");
//! let err = result.code(Code::ResourceExhausted).ctx("uploading photo").unwrap_err();
//!
//! let coded = find_coded(&*err).unwrap();
//! assert_eq!(coded.code(), Code::ResourceExhausted);
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
