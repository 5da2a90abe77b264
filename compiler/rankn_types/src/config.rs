//! Checker configuration.

/// Environment variable overriding [`CheckerConfig::max_depth`].
pub const MAX_DEPTH_ENV: &str = "RANKN_MAX_DEPTH";

/// Limits applied to a checking run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CheckerConfig {
    /// Maximum number of nested judgments (`check`, `synthesize`,
    /// `is_subtype`, instantiation) before the run aborts.
    ///
    /// Nested `∀` inputs make checking cost grow exponentially; this bounds
    /// the work a single run can do.
    pub max_depth: usize,
}

impl CheckerConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 4096;

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Read overrides from the environment.
    ///
    /// Unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let max_depth = std::env::var(MAX_DEPTH_ENV).ok();
        Self::from_overrides(max_depth.as_deref())
    }

    fn from_overrides(max_depth: Option<&str>) -> Self {
        let config = Self::default();
        match max_depth.map(|raw| raw.trim().parse::<usize>()) {
            Some(Ok(max_depth)) if max_depth > 0 => config.with_max_depth(max_depth),
            Some(_) => {
                tracing::warn!(
                    value = max_depth,
                    "ignoring invalid {}, using {}",
                    MAX_DEPTH_ENV,
                    Self::DEFAULT_MAX_DEPTH
                );
                config
            }
            None => config,
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
