#[cfg(feature = "std")]
pub type Box<T> = std::boxed::Box<T>;
#[cfg(not(feature = "std"))]
pub type Box<T> = alloc::boxed::Box<T>;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub use std::{borrow::ToOwned, string::ToString};
#[cfg(not(feature = "std"))]
pub use alloc::{borrow::ToOwned, string::ToString};

/// Type-erased, thread-safe error value used as the cause of every wrapper in this crate.
#[cfg(feature = "std")]
pub type BoxError = std::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;
#[cfg(not(feature = "std"))]
pub type BoxError = alloc::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;
