//! The ordered context threaded through every judgment.
//!
//! A `Context` is a sequence of [`ContextElement`]s. Elements are appended
//! and truncated at the tail; the only in-place edit is solving a
//! placeholder, which replaces its slot without moving it.
//!
//! # Transactions
//!
//! Judgments never leave a context half-modified. Any step that may fail
//! runs on a clone, and the clone replaces the original only on success:
//!
//! ```text
//! let mut child = ctx.clone();
//! if checker.is_subtype(&mut child, &sub, &sup)? {
//!     ctx.commit(child);
//! }
//! ```
//!
//! Cloning is O(n) in the context length, which stays small for the terms
//! this checker sees.

mod element;

pub use element::{ContextElement, MarkerId};

use rankn_ir::{BindingId, Type, TypeId};

use crate::{TypeError, TypeResult};

/// The ordered sequence of scope facts.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Context {
    elements: Vec<ContextElement>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// All elements, oldest first.
    #[inline]
    pub fn elements(&self) -> &[ContextElement] {
        &self.elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Replace this context with the contents of a successful clone.
    pub fn commit(&mut self, child: Context) {
        *self = child;
    }

    /// Append an element.
    pub fn push(&mut self, element: ContextElement) {
        self.elements.push(element);
    }

    // ========================================
    // Type variables
    // ========================================

    /// Declare a rigid variable at the end of the context.
    pub fn declare_type_variable(&mut self, id: TypeId) -> Type {
        self.push(ContextElement::Variable(id.clone()));
        Type::Variable(id)
    }

    // ========================================
    // Placeholders
    // ========================================

    /// Declare a fresh unsolved placeholder at the end of the context.
    pub fn introduce_placeholder(&mut self, label: &str) -> TypeId {
        let id = TypeId::fresh(label);
        self.push(ContextElement::Placeholder(id.clone()));
        id
    }

    /// Index of an unsolved placeholder.
    ///
    /// A missing placeholder means the context was corrupted or a solved
    /// placeholder was passed where an unsolved one is required.
    pub fn find_placeholder_index(&self, placeholder: &TypeId) -> TypeResult<usize> {
        self.elements
            .iter()
            .position(|element| matches!(element, ContextElement::Placeholder(id) if id == placeholder))
            .ok_or_else(|| {
                tracing::error!(placeholder = ?placeholder, "placeholder missing from context");
                TypeError::MissingPlaceholder(placeholder.clone())
            })
    }

    /// Whether `placeholder` is declared and still unsolved.
    pub fn is_unsolved_placeholder(&self, placeholder: &TypeId) -> bool {
        self.elements
            .iter()
            .any(|element| matches!(element, ContextElement::Placeholder(id) if id == placeholder))
    }

    /// Solve an unsolved placeholder in place.
    pub fn solve_placeholder(&mut self, placeholder: &TypeId, solution: Type) -> TypeResult<()> {
        let index = self.find_placeholder_index(placeholder)?;
        tracing::debug!(placeholder = ?placeholder, %solution, "solved placeholder");
        self.elements[index] = ContextElement::SolvedPlaceholder {
            id: placeholder.clone(),
            solution,
        };
        Ok(())
    }

    /// The solution recorded for `placeholder`, if it has been solved.
    pub fn placeholder_solution(&self, placeholder: &TypeId) -> Option<&Type> {
        self.elements.iter().find_map(|element| match element {
            ContextElement::SolvedPlaceholder { id, solution } if id == placeholder => {
                Some(solution)
            }
            _ => None,
        })
    }

    /// Insert a new unsolved placeholder directly before `existing`.
    ///
    /// The new placeholder lands inside the same scope as `existing`, so it is
    /// discarded together with it.
    pub fn insert_placeholder_before(
        &mut self,
        placeholder: TypeId,
        existing: &TypeId,
    ) -> TypeResult<()> {
        let index = self.find_placeholder_index(existing)?;
        self.elements
            .insert(index, ContextElement::Placeholder(placeholder));
        Ok(())
    }

    /// Drop `placeholder` and everything declared after it.
    ///
    /// What remains is the context as it was when `placeholder` was declared,
    /// which is what a solution for it may depend on.
    pub fn discard_from_placeholder(&mut self, placeholder: &TypeId) -> TypeResult<()> {
        let index = self.find_placeholder_index(placeholder)?;
        self.elements.truncate(index);
        Ok(())
    }

    // ========================================
    // Term bindings
    // ========================================

    /// Record the type of a term binding.
    pub fn bind_type(&mut self, binding: BindingId, ty: Type) {
        self.push(ContextElement::Annotation { binding, ty });
    }

    /// The type of `binding`, searching from the most recent entry.
    pub fn lookup_binding_type(&self, binding: &BindingId) -> Option<&Type> {
        self.elements.iter().rev().find_map(|element| match element {
            ContextElement::Annotation { binding: id, ty } if id == binding => Some(ty),
            _ => None,
        })
    }

    // ========================================
    // Scopes
    // ========================================

    /// Run `body` in a child scope.
    ///
    /// Everything `body` appends is discarded when it returns, whether it
    /// succeeded or not. Solutions written into placeholders that existed
    /// before the scope began are retained.
    pub fn in_child_scope<T, F>(&mut self, body: F) -> TypeResult<T>
    where
        F: FnOnce(&mut Self) -> TypeResult<T>,
    {
        let marker = MarkerId::fresh();
        self.push(ContextElement::Marker(marker));

        let result = body(self);

        let index = self
            .elements
            .iter()
            .position(|element| matches!(element, ContextElement::Marker(id) if *id == marker))
            .ok_or_else(|| {
                tracing::error!(%marker, "scope marker missing from context");
                TypeError::MissingMarker(marker)
            })?;
        self.elements.truncate(index);

        result
    }
}
