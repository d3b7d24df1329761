//! Resource limits applied while running generic algorithms.

/// Limits bounding nested dispatch and positional spreading.
///
/// Derived defaults reduce operations to one another (`fold_left` to
/// `unpack`, `sum` to `fold_left`, ...). A misbehaving user descriptor can
/// turn such a reduction into unbounded recursion; the depth limit turns it
/// into [`Error::RecursionLimit`](super::Error::RecursionLimit) instead.
///
/// With the `serde` feature the configuration can be deserialized; missing
/// fields take their default value.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::ResolutionConfig;
///
/// let config = ResolutionConfig::default().with_max_depth(64);
/// assert_eq!(config.max_depth, 64);
/// assert_eq!(config.max_arguments, ResolutionConfig::DEFAULT_MAX_ARGUMENTS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolutionConfig {
    /// Maximum number of nested dispatches.
    pub max_depth: usize,
    /// Maximum number of arguments spread into a single call.
    pub max_arguments: usize,
}

impl ResolutionConfig {
    /// Default for [`max_depth`](Self::max_depth).
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Default for [`max_arguments`](Self::max_arguments).
    pub const DEFAULT_MAX_ARGUMENTS: usize = 4096;

    /// Sets the maximum dispatch depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum number of spread arguments.
    #[must_use]
    pub const fn with_max_arguments(mut self, max_arguments: usize) -> Self {
        self.max_arguments = max_arguments;
        self
    }
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_arguments: Self::DEFAULT_MAX_ARGUMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_uses_the_documented_limits() {
        let config = ResolutionConfig::default();
        assert_eq!(config.max_depth, 256);
        assert_eq!(config.max_arguments, 4096);
    }

    #[rstest]
    fn builders_override_single_fields() {
        let config = ResolutionConfig::default().with_max_arguments(8);
        assert_eq!(config.max_arguments, 8);
        assert_eq!(config.max_depth, ResolutionConfig::DEFAULT_MAX_DEPTH);
    }
}
