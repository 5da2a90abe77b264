//! Substitution and the occurs-check.
//!
//! Every bound name is globally unique, so substitution never needs to
//! rename to avoid capture.

use std::ops::ControlFlow;

use crate::{Type, TypeFolder, TypeId, TypeVisitor};

/// Replaces one rigid variable by a type.
struct SubstituteVariable<'a> {
    variable: &'a TypeId,
    replacement: &'a Type,
}

impl TypeFolder for SubstituteVariable<'_> {
    fn fold_variable(&mut self, id: &TypeId) -> Type {
        if id == self.variable {
            self.replacement.clone()
        } else {
            Type::Variable(id.clone())
        }
    }
}

/// Replace every occurrence of the rigid variable `variable` in `ty`.
///
/// Used to open a `ForAll` by replacing its quantified variable with a fresh
/// placeholder. Placeholders with the same id are left alone.
pub fn substitute_type_references(ty: &Type, variable: &TypeId, replacement: &Type) -> Type {
    SubstituteVariable {
        variable,
        replacement,
    }
    .fold(ty)
}

/// Stops at the first occurrence of a placeholder.
struct FindPlaceholder<'a> {
    placeholder: &'a TypeId,
}

impl TypeVisitor for FindPlaceholder<'_> {
    fn visit_placeholder(&mut self, id: &TypeId) -> ControlFlow<()> {
        if id == self.placeholder {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

/// Occurs-check: does `placeholder` appear anywhere in `ty`?
///
/// Only syntactic occurrences count; apply the context first if solved
/// placeholders should be looked through.
pub fn type_references(ty: &Type, placeholder: &TypeId) -> bool {
    FindPlaceholder { placeholder }.visit(ty).is_break()
}
