//! Substituting solved placeholders into a type.

use rankn_ir::{Type, TypeFolder, TypeId};

use crate::Context;

/// Replaces solved placeholders by their solutions, chasing chains.
struct ApplyContext<'ctx> {
    context: &'ctx Context,
}

impl TypeFolder for ApplyContext<'_> {
    fn fold_placeholder(&mut self, id: &TypeId) -> Type {
        match self.context.placeholder_solution(id) {
            // The solution may itself mention solved placeholders.
            Some(solution) => self.fold(solution),
            None => Type::Placeholder(id.clone()),
        }
    }
}

/// Resolve every solved placeholder in `ty` against `context`.
///
/// Unsolved placeholders, variables and `Void` are returned unchanged. Once
/// every placeholder `ty` touches is solved the result is a fixed point:
/// applying the context again changes nothing.
pub fn apply_context(context: &Context, ty: &Type) -> Type {
    ApplyContext { context }.fold(ty)
}
