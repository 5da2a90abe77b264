//! The synthesis judgment and application synthesis.

use rankn_ir::{substitute_type_references, Term, Type};

use crate::{
    apply_context, articulate_placeholder, type_well_formed, Checker, Context, TypeError,
    TypeResult,
};

impl Checker {
    /// What type does `term` have?
    ///
    /// Returns `Ok(None)` when no type can be given (an unbound reference, a
    /// lambda whose body does not check, a failed application). An annotation
    /// that is ill-formed, or that its term does not check against, is an
    /// error.
    ///
    /// The returned type may mention placeholders solved in `context`; apply
    /// the context to see it resolved.
    #[tracing::instrument(level = "trace", skip_all, fields(%term))]
    pub fn synthesize(&mut self, context: &mut Context, term: &Term) -> TypeResult<Option<Type>> {
        self.nested(|this| this.synthesize_term(context, term))
    }

    fn synthesize_term(&mut self, context: &mut Context, term: &Term) -> TypeResult<Option<Type>> {
        match term {
            Term::Void => Ok(Some(Type::Void)),

            Term::Annotation { term, annotation } => {
                if !type_well_formed(context, annotation) {
                    tracing::error!(%annotation, "ill-formed annotation");
                    return Err(TypeError::IllFormedAnnotation {
                        annotation: annotation.clone(),
                    });
                }

                let mut child = context.clone();
                if !self.check(&mut child, annotation, term)? {
                    tracing::error!(%term, %annotation, "term does not check against its annotation");
                    return Err(TypeError::AnnotationMismatch {
                        term: (**term).clone(),
                        annotation: annotation.clone(),
                    });
                }
                context.commit(child);
                Ok(Some(annotation.clone()))
            }

            Term::Reference(binding) => Ok(context.lookup_binding_type(binding).cloned()),

            Term::Lambda { argument, body } => {
                let mut child = context.clone();
                let parameter = Type::Placeholder(child.introduce_placeholder(argument.label()));
                let result = Type::Placeholder(
                    child.introduce_placeholder(&format!("{}-result", argument.label())),
                );

                // The placeholders outlive the scope: the synthesized type
                // mentions them. Only the argument binding is scope-local.
                let success = child.in_child_scope(|scope| {
                    scope.bind_type(argument.clone(), parameter.clone());
                    self.check(scope, &result, body)
                })?;
                if !success {
                    return Ok(None);
                }
                context.commit(child);
                Ok(Some(Type::function(parameter, result)))
            }

            Term::Application { function, argument } => {
                let mut child = context.clone();
                let Some(function_type) = self.synthesize(&mut child, function)? else {
                    return Ok(None);
                };
                let function_type = apply_context(&child, &function_type);
                let result = self.synthesize_application(&mut child, &function_type, argument)?;
                if result.is_some() {
                    context.commit(child);
                }
                Ok(result)
            }
        }
    }

    /// The result type of applying a function of type `function_type` to
    /// `argument`.
    ///
    /// - `A -> B`: check `argument` against `A`, giving `B`.
    /// - `∀a. A`: open `a` as a fresh placeholder and retry. The placeholder
    ///   stays in the context since the result may mention it.
    /// - `^f`: articulate `^f` into `^p -> ^r`, check `argument` against `^p`,
    ///   giving `^r`. This is how a lambda argument used as a function gets
    ///   its shape.
    /// - Anything else cannot be applied.
    #[tracing::instrument(level = "trace", skip_all, fields(%function_type, %argument))]
    pub fn synthesize_application(
        &mut self,
        context: &mut Context,
        function_type: &Type,
        argument: &Term,
    ) -> TypeResult<Option<Type>> {
        self.nested(|this| this.synthesize_application_of(context, function_type, argument))
    }

    fn synthesize_application_of(
        &mut self,
        context: &mut Context,
        function_type: &Type,
        argument: &Term,
    ) -> TypeResult<Option<Type>> {
        match function_type {
            Type::Function { parameter, result } => {
                let mut child = context.clone();
                if !self.check(&mut child, parameter, argument)? {
                    return Ok(None);
                }
                context.commit(child);
                Ok(Some((**result).clone()))
            }

            Type::ForAll { quantified, body } => {
                let mut child = context.clone();
                let opened = child.introduce_placeholder(quantified.label());
                let body = substitute_type_references(body, quantified, &Type::Placeholder(opened));
                let result = self.synthesize_application(&mut child, &body, argument)?;
                if result.is_some() {
                    context.commit(child);
                }
                Ok(result)
            }

            Type::Placeholder(placeholder) => {
                let mut child = context.clone();
                let (parameter, result) = articulate_placeholder(&mut child, placeholder)?;
                if !self.check(&mut child, &Type::Placeholder(parameter), argument)? {
                    return Ok(None);
                }
                context.commit(child);
                Ok(Some(Type::Placeholder(result)))
            }

            Type::Void | Type::Variable(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests;
