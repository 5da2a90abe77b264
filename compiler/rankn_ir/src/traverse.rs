//! Type traversal traits.
//!
//! - [`TypeFolder`] rebuilds a type, letting implementors replace individual
//!   variants (substitution, context application).
//! - [`TypeVisitor`] inspects a type without rebuilding it and can stop early
//!   (occurs-check, well-formedness).
//!
//! Both dispatch through one `match` on [`Type`], so adding a variant is a
//! compile error in exactly one place per trait.

use std::ops::ControlFlow;

use crate::{Type, TypeId};

/// Trait for transforming types via structural recursion.
///
/// Override specific `fold_*` methods to customize behavior for particular
/// variants; the defaults rebuild the type unchanged.
///
/// # Example
///
/// ```text
/// struct Rename<'a> {
///     from: &'a TypeId,
///     to: &'a TypeId,
/// }
///
/// impl TypeFolder for Rename<'_> {
///     fn fold_variable(&mut self, id: &TypeId) -> Type {
///         let id = if id == self.from { self.to } else { id };
///         Type::Variable(id.clone())
///     }
/// }
/// ```
pub trait TypeFolder {
    /// Fold a type by dispatching to variant-specific methods.
    fn fold(&mut self, ty: &Type) -> Type {
        match ty {
            Type::Void => Type::Void,
            Type::Variable(id) => self.fold_variable(id),
            Type::Placeholder(id) => self.fold_placeholder(id),
            Type::ForAll { quantified, body } => self.fold_for_all(quantified, body),
            Type::Function { parameter, result } => self.fold_function(parameter, result),
        }
    }

    fn fold_variable(&mut self, id: &TypeId) -> Type {
        Type::Variable(id.clone())
    }

    fn fold_placeholder(&mut self, id: &TypeId) -> Type {
        Type::Placeholder(id.clone())
    }

    fn fold_for_all(&mut self, quantified: &TypeId, body: &Type) -> Type {
        Type::for_all(quantified.clone(), self.fold(body))
    }

    fn fold_function(&mut self, parameter: &Type, result: &Type) -> Type {
        Type::function(self.fold(parameter), self.fold(result))
    }
}

/// Trait for inspecting types via structural recursion.
///
/// Returning `ControlFlow::Break` from any method stops the traversal.
pub trait TypeVisitor {
    /// Visit a type by dispatching to variant-specific methods.
    fn visit(&mut self, ty: &Type) -> ControlFlow<()> {
        match ty {
            Type::Void => ControlFlow::Continue(()),
            Type::Variable(id) => self.visit_variable(id),
            Type::Placeholder(id) => self.visit_placeholder(id),
            Type::ForAll { quantified, body } => self.visit_for_all(quantified, body),
            Type::Function { parameter, result } => self.visit_function(parameter, result),
        }
    }

    fn visit_variable(&mut self, _id: &TypeId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn visit_placeholder(&mut self, _id: &TypeId) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn visit_for_all(&mut self, _quantified: &TypeId, body: &Type) -> ControlFlow<()> {
        self.visit(body)
    }

    fn visit_function(&mut self, parameter: &Type, result: &Type) -> ControlFlow<()> {
        self.visit(parameter)?;
        self.visit(result)
    }
}
