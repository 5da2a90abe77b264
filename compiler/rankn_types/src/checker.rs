//! The judgment driver.
//!
//! `Checker` owns the run configuration and the current nesting depth. The
//! judgments themselves are implemented across sibling modules as
//! `impl Checker` blocks:
//!
//! ```text
//! Checker
//! ├── check                   (check.rs)
//! ├── synthesize              (synthesize.rs)
//! ├── synthesize_application  (synthesize.rs)
//! ├── is_subtype              (subtype.rs)
//! └── instantiate_subtype /
//!     instantiate_supertype   (instantiate.rs)
//! ```
//!
//! Every judgment takes the context as `&mut Context` and follows the
//! clone-then-commit discipline described in [`crate::context`].

use crate::stack::ensure_sufficient_stack;
use crate::{CheckerConfig, TypeError, TypeResult};

/// Drives the mutually recursive judgments under a nesting budget.
#[derive(Debug)]
pub struct Checker {
    config: CheckerConfig,
    depth: usize,
}

impl Checker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config, depth: 0 }
    }

    #[inline]
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Current judgment nesting depth (zero between runs).
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Run one judgment step one level deeper.
    ///
    /// Fails with [`TypeError::DepthLimitExceeded`] instead of recursing past
    /// the configured limit, and grows the native stack when it runs low.
    pub(crate) fn nested<T>(
        &mut self,
        step: impl FnOnce(&mut Self) -> TypeResult<T>,
    ) -> TypeResult<T> {
        if self.depth >= self.config.max_depth {
            tracing::error!(limit = self.config.max_depth, "judgment depth limit exceeded");
            return Err(TypeError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }

        self.depth += 1;
        let result = ensure_sufficient_stack(|| step(self));
        self.depth -= 1;
        result
    }
}

/// A checker configured from the environment (see [`CheckerConfig::from_env`]).
impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckerConfig::from_env())
    }
}
