//! The subtyping judgment.

use rankn_ir::{substitute_type_references, type_references, Type};

use crate::{apply_context, Checker, Context, TypeResult};

impl Checker {
    /// Is `sub` a subtype of `sup`?
    ///
    /// On success `context` gains whatever placeholder solutions the
    /// judgment needed; on failure it is left untouched.
    ///
    /// Rules, tried in order:
    ///
    /// | sub            | sup            | rule                                   |
    /// |----------------|----------------|----------------------------------------|
    /// | `^a` / `a`     | same id        | reflexive                              |
    /// | `void`         | `void`         | reflexive                              |
    /// | `A1 -> A2`     | `B1 -> B2`     | `B1 <: A1` then `A2 <: B2`             |
    /// | `∀a. A`        | any            | open `a` as a placeholder in `A`       |
    /// | any            | `∀b. B`        | declare `b` rigidly, check against `B` |
    /// | unsolved `^a`  | `B` without it | `instantiate_subtype`                  |
    /// | `A` without it | unsolved `^b`  | `instantiate_supertype`                |
    ///
    /// Both sides are resolved against `context` first, so a solved
    /// placeholder is compared by its solution. The first three rows decide
    /// outright. The `∀` rows fall through to the rows below them when they
    /// fail.
    #[tracing::instrument(level = "trace", skip_all, fields(%sub, %sup))]
    pub fn is_subtype(&mut self, context: &mut Context, sub: &Type, sup: &Type) -> TypeResult<bool> {
        self.nested(|this| this.subtype(context, sub, sup))
    }

    fn subtype(&mut self, context: &mut Context, sub: &Type, sup: &Type) -> TypeResult<bool> {
        // Solved placeholders are looked through before any rule applies, so
        // the occurs-checks below also catch cycles hidden behind a solution.
        let sub = apply_context(context, sub);
        let sup = apply_context(context, sup);

        match (&sub, &sup) {
            (Type::Placeholder(a), Type::Placeholder(b)) | (Type::Variable(a), Type::Variable(b))
                if a == b =>
            {
                return Ok(true);
            }
            (Type::Void, Type::Void) => return Ok(true),
            (
                Type::Function {
                    parameter: sub_parameter,
                    result: sub_result,
                },
                Type::Function {
                    parameter: sup_parameter,
                    result: sup_result,
                },
            ) => {
                let mut child = context.clone();
                if !self.is_subtype(&mut child, sup_parameter, sub_parameter)? {
                    return Ok(false);
                }
                let success = self.is_subtype(&mut child, sub_result, sup_result)?;
                if success {
                    context.commit(child);
                }
                return Ok(success);
            }
            _ => {}
        }

        if let Type::ForAll { quantified, body } = &sub {
            let mut child = context.clone();
            let success = child.in_child_scope(|scope| {
                let opened = scope.introduce_placeholder(quantified.label());
                let body = substitute_type_references(body, quantified, &Type::Placeholder(opened));
                self.is_subtype(scope, &body, &sup)
            })?;
            if success {
                context.commit(child);
                return Ok(true);
            }
        }

        if let Type::ForAll { quantified, body } = &sup {
            let mut child = context.clone();
            let success = child.in_child_scope(|scope| {
                scope.declare_type_variable(quantified.clone());
                self.is_subtype(scope, &sub, body)
            })?;
            if success {
                context.commit(child);
                return Ok(true);
            }
        }

        if let Type::Placeholder(placeholder) = &sub {
            if context.is_unsolved_placeholder(placeholder) && !type_references(&sup, placeholder) {
                let mut child = context.clone();
                if self.instantiate_subtype(&mut child, placeholder, &sup)? {
                    context.commit(child);
                    return Ok(true);
                }
            }
        }

        if let Type::Placeholder(placeholder) = &sup {
            if context.is_unsolved_placeholder(placeholder) && !type_references(&sub, placeholder) {
                let mut child = context.clone();
                if self.instantiate_supertype(&mut child, placeholder, &sub)? {
                    context.commit(child);
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests;
