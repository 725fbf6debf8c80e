/// Default bound on the number of links inspected by a [`ChainWalk::Deep`] search.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// How far below the newest wrap composition looks for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainWalk {
    /// Inspect only the direct cause of the formatted error.
    ///
    /// A code sitting two or more plain wrappers down is not found and the result is
    /// [`Code::Unknown`](crate::Code::Unknown).
    #[default]
    Shallow,
    /// Follow the source chain from the direct cause until a status-bearing error is found
    /// or `max_depth` links have been inspected. The direct cause is always inspected, so a
    /// bound of `0` behaves like `1`.
    Deep,
}

/// Configuration for [`compose`](crate::compose).
///
/// # Examples
///
/// ```
/// use status_rail::{extract_code, wrapf, ChainWalk, Code, CodedError, ComposeConfig};
///
/// let coded = CodedError::msg(Code::NotFound, "no such place");
/// let plain = wrapf!("lookup: {}", coded);
/// let formatted = wrapf!("handler: {}", plain);
///
/// let config = ComposeConfig::new().walk(ChainWalk::Deep);
/// let err = config.compose(formatted);
///
/// assert_eq!(extract_code(&*err), Code::NotFound);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeConfig {
    pub(crate) walk: ChainWalk,
    pub(crate) max_depth: usize,
}

impl ComposeConfig {
    /// Shallow walk with [`DEFAULT_MAX_DEPTH`].
    #[inline]
    pub const fn new() -> Self {
        Self { walk: ChainWalk::Shallow, max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Shorthand for `ComposeConfig::new().walk(ChainWalk::Deep)`.
    #[inline]
    pub const fn deep() -> Self {
        Self { walk: ChainWalk::Deep, max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Sets the walk strategy.
    #[must_use]
    #[inline]
    pub const fn walk(mut self, walk: ChainWalk) -> Self {
        self.walk = walk;
        self
    }

    /// Sets the bound for deep walks. Ignored by [`ChainWalk::Shallow`].
    ///
    /// Values below `1` still inspect the direct cause.
    #[must_use]
    #[inline]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Returns the walk strategy.
    #[inline]
    pub const fn chain_walk(&self) -> ChainWalk {
        self.walk
    }

    /// Returns the deep-walk bound.
    #[inline]
    pub const fn depth_limit(&self) -> usize {
        self.max_depth
    }
}

impl Default for ComposeConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
