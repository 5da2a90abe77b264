//! Invariant violations that abort a checking run.
//!
//! Ordinary negative outcomes (mismatches, unbound references, failed
//! subtyping or instantiation) are not errors: judgments report them as
//! `Ok(false)` / `Ok(None)`. A `TypeError` means the run cannot continue
//! without risking a verdict against an inconsistent context.

use rankn_ir::{Term, Type, TypeId};

use crate::context::MarkerId;

/// Error that aborts a checking run.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TypeError {
    /// A placeholder expected to be unsolved in the context is not there.
    #[error("placeholder `^{}` is not an unsolved entry of the context", .0.label())]
    MissingPlaceholder(TypeId),

    /// A scope marker disappeared before its scope ended.
    #[error("scope marker {0} is missing from the context")]
    MissingMarker(MarkerId),

    /// An annotation mentions variables or placeholders that are not in scope.
    #[error("annotation `{annotation}` is not well-formed in the current context")]
    IllFormedAnnotation { annotation: Type },

    /// An annotated term does not check against its own annotation.
    #[error("`{term}` does not check against its annotation `{annotation}`")]
    AnnotationMismatch { term: Term, annotation: Type },

    /// Judgments nested deeper than the configured limit.
    #[error("judgment nesting exceeded the limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}

impl TypeError {
    /// Whether the error comes from a user-written annotation rather than a
    /// corrupted context or an exhausted budget.
    ///
    /// A compiler front end reports these as ordinary diagnostics.
    pub fn is_annotation_error(&self) -> bool {
        matches!(
            self,
            TypeError::IllFormedAnnotation { .. } | TypeError::AnnotationMismatch { .. }
        )
    }
}

/// Result of a judgment that may hit an invariant violation.
pub type TypeResult<T> = Result<T, TypeError>;
