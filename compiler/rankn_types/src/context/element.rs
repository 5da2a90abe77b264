//! Entries of the ordered context.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use rankn_ir::{BindingId, Type, TypeId};

static NEXT_MARKER_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a scope boundary pushed by [`Context::in_child_scope`].
///
/// [`Context::in_child_scope`]: crate::Context::in_child_scope
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MarkerId(u32);

impl MarkerId {
    pub(crate) fn fresh() -> Self {
        MarkerId(NEXT_MARKER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One fact in the context.
///
/// Position is semantic: a variable or placeholder may only be mentioned by
/// entries (and solutions) that come after its declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ContextElement {
    /// A rigid variable in scope.
    Variable(TypeId),

    /// An unsolved placeholder.
    Placeholder(TypeId),

    /// A placeholder with its (monotype) solution, in the slot where it was
    /// declared.
    SolvedPlaceholder { id: TypeId, solution: Type },

    /// The type of a term binding.
    Annotation { binding: BindingId, ty: Type },

    /// Scope boundary.
    Marker(MarkerId),
}
