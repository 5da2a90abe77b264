//! The checking judgment.

use rankn_ir::{Term, Type};

use crate::{apply_context, Checker, Context, TypeResult};

impl Checker {
    /// Does `term` check against `ty`?
    ///
    /// Rules are tried in order and the first one that succeeds wins; a rule
    /// whose premises fail falls through to the next:
    ///
    /// 1. `()` checks against `void`.
    /// 2. Against `∀a. A`: declare `a` rigidly in a child scope, check against `A`.
    /// 3. `λx. e` against `A -> B`: bind `x : A` in a child scope, check `e` against `B`.
    /// 4. Subsumption: synthesize the term's type and require it to be a
    ///    subtype of `ty`.
    ///
    /// On success `context` gains the placeholder solutions produced; on
    /// failure it is left untouched.
    #[tracing::instrument(level = "trace", skip_all, fields(%ty, %term))]
    pub fn check(&mut self, context: &mut Context, ty: &Type, term: &Term) -> TypeResult<bool> {
        self.nested(|this| this.check_term(context, ty, term))
    }

    fn check_term(&mut self, context: &mut Context, ty: &Type, term: &Term) -> TypeResult<bool> {
        if let (Term::Void, Type::Void) = (term, ty) {
            return Ok(true);
        }

        if let Type::ForAll { quantified, body } = ty {
            let mut child = context.clone();
            let success = child.in_child_scope(|scope| {
                scope.declare_type_variable(quantified.clone());
                self.check(scope, body, term)
            })?;
            if success {
                context.commit(child);
                return Ok(true);
            }
        }

        if let (Term::Lambda { argument, body }, Type::Function { parameter, result }) = (term, ty) {
            let mut child = context.clone();
            let success = child.in_child_scope(|scope| {
                scope.bind_type(argument.clone(), (**parameter).clone());
                self.check(scope, result, body)
            })?;
            if success {
                context.commit(child);
                return Ok(true);
            }
        }

        let mut child = context.clone();
        let Some(synthesized) = self.synthesize(&mut child, term)? else {
            return Ok(false);
        };
        let synthesized = apply_context(&child, &synthesized);
        let expected = apply_context(&child, ty);
        if self.is_subtype(&mut child, &synthesized, &expected)? {
            context.commit(child);
            return Ok(true);
        }

        Ok(false)
    }
}
