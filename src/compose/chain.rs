use core::error::Error;
use core::iter::FusedIterator;

/// Iterator over an error and its sources, outermost first.
///
/// Each step is one call to [`Error::source`], so any wrapper that reports its
/// cause takes part, whether or not it comes from this crate.
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Chain<'a> {
    /// Starts a chain at `error`.
    #[inline]
    pub fn new(error: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(error) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Returns an iterator over `error` and every error beneath it.
///
/// # Examples
///
/// ```
/// use status_rail::{chain, wrapf};
///
/// let err = wrapf!("outer: {}", wrapf!("inner: {}", "root"));
/// let texts: Vec<String> = chain(&err).map(|e| e.to_string()).collect();
///
/// assert_eq!(texts, ["outer: inner: root", "inner: root", "root"]);
/// ```
#[inline]
pub fn chain<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain::new(error)
}

/// Returns `true` if some link of the chain is a `T` equal to `target`.
///
/// # Examples
///
/// ```
/// use status_rail::{chain_contains, errorf, Code, CodedError};
///
/// let original = || CodedError::msg(Code::InvalidArgument, "place id is invalid");
/// let err = errorf!("failed to parse place name, {}", original());
///
/// assert!(chain_contains(&*err, &original()));
/// ```
pub fn chain_contains<T>(error: &(dyn Error + 'static), target: &T) -> bool
where
    T: Error + PartialEq + 'static,
{
    chain(error).filter_map(|link| link.downcast_ref::<T>()).any(|link| link == target)
}
