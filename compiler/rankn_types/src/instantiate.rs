//! Solving placeholders against subtype constraints.
//!
//! `instantiate_subtype(P, A)` solves `P <: A`; `instantiate_supertype(P, A)`
//! solves `A <: P`. Both try, in order:
//!
//! 1. **Monotype**: if `A` is not a `∀` and only mentions names declared
//!    before `P`, solve `P := A`. If `A` is itself a later unsolved
//!    placeholder, solve it to `P` instead.
//! 2. **Function**: articulate `P` into `^p -> ^r` and instantiate the parts,
//!    the parameter with flipped variance.
//! 3. **ForAll**: for `P <: ∀a. B` declare `a` rigidly; for `∀a. B <: P`
//!    open `a` as a fresh placeholder. Either way in a child scope.
//!
//! Instantiating a placeholder against itself holds without solving it, and
//! against a type that mentions it (once solutions are applied) fails.
//!
//! Solutions are always monotypes. Opening `∀a. B` with one fresh placeholder
//! is the predicative approximation of solving `P` to the polymorphic type
//! itself.

use rankn_ir::{substitute_type_references, type_references, Type, TypeId};

use crate::{
    apply_context, articulate_placeholder, type_well_formed, Checker, Context, TypeResult,
};

/// Direction of a constraint on the placeholder being solved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Variance {
    /// `P <: A`
    Covariant,
    /// `A <: P`
    Contravariant,
}

impl Variance {
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Variance::Covariant => Variance::Contravariant,
            Variance::Contravariant => Variance::Covariant,
        }
    }
}

impl Checker {
    /// Solve `placeholder <: ty`.
    #[tracing::instrument(level = "trace", skip_all, fields(placeholder = ?placeholder, %ty))]
    pub fn instantiate_subtype(
        &mut self,
        context: &mut Context,
        placeholder: &TypeId,
        ty: &Type,
    ) -> TypeResult<bool> {
        self.nested(|this| this.instantiate(Variance::Covariant, context, placeholder, ty))
    }

    /// Solve `ty <: placeholder`.
    #[tracing::instrument(level = "trace", skip_all, fields(placeholder = ?placeholder, %ty))]
    pub fn instantiate_supertype(
        &mut self,
        context: &mut Context,
        placeholder: &TypeId,
        ty: &Type,
    ) -> TypeResult<bool> {
        self.nested(|this| this.instantiate(Variance::Contravariant, context, placeholder, ty))
    }

    fn instantiate_with(
        &mut self,
        variance: Variance,
        context: &mut Context,
        placeholder: &TypeId,
        ty: &Type,
    ) -> TypeResult<bool> {
        match variance {
            Variance::Covariant => self.instantiate_subtype(context, placeholder, ty),
            Variance::Contravariant => self.instantiate_supertype(context, placeholder, ty),
        }
    }

    fn instantiate(
        &mut self,
        variance: Variance,
        context: &mut Context,
        placeholder: &TypeId,
        ty: &Type,
    ) -> TypeResult<bool> {
        let ty = apply_context(context, ty);
        if ty.as_placeholder() == Some(placeholder) {
            return Ok(true);
        }
        if type_references(&ty, placeholder) {
            tracing::debug!(placeholder = ?placeholder, %ty, "occurs-check failed");
            return Ok(false);
        }

        if instantiate_monotype(context, placeholder, &ty)? {
            return Ok(true);
        }

        match &ty {
            Type::Function { parameter, result } => {
                self.instantiate_function(variance, context, placeholder, parameter, result)
            }
            Type::ForAll { quantified, body } => {
                let mut child = context.clone();
                let success = child.in_child_scope(|scope| match variance {
                    Variance::Covariant => {
                        scope.declare_type_variable(quantified.clone());
                        self.instantiate_subtype(scope, placeholder, body)
                    }
                    Variance::Contravariant => {
                        let opened = scope.introduce_placeholder(quantified.label());
                        let body = substitute_type_references(
                            body,
                            quantified,
                            &Type::Placeholder(opened),
                        );
                        self.instantiate_supertype(scope, placeholder, &body)
                    }
                })?;
                if success {
                    context.commit(child);
                }
                Ok(success)
            }
            Type::Void | Type::Variable(_) | Type::Placeholder(_) => Ok(false),
        }
    }

    /// Articulate `placeholder` and instantiate both halves against
    /// `parameter -> result`.
    ///
    /// The parameter is instantiated with the flipped variance. If it fails,
    /// the whole step fails without touching `context`.
    fn instantiate_function(
        &mut self,
        variance: Variance,
        context: &mut Context,
        placeholder: &TypeId,
        parameter: &Type,
        result: &Type,
    ) -> TypeResult<bool> {
        let mut child = context.clone();
        let (parameter_placeholder, result_placeholder) =
            articulate_placeholder(&mut child, placeholder)?;

        if !self.instantiate_with(variance.flip(), &mut child, &parameter_placeholder, parameter)? {
            return Ok(false);
        }

        let result = apply_context(&child, result);
        let success = self.instantiate_with(variance, &mut child, &result_placeholder, &result)?;
        if success {
            context.commit(child);
        }
        Ok(success)
    }
}

/// Solve `placeholder` directly when `ty` is a monotype it may depend on.
///
/// `ty` qualifies when it is well-formed in the context as it was when
/// `placeholder` was declared. Otherwise, if `ty` is an unsolved placeholder
/// declared later, that placeholder is solved to `placeholder` instead, so the
/// later one always points at the earlier one.
///
/// `placeholder` against itself holds and solves nothing.
///
/// Returns `false` (and leaves `context` alone) when neither applies.
pub fn instantiate_monotype(
    context: &mut Context,
    placeholder: &TypeId,
    ty: &Type,
) -> TypeResult<bool> {
    if ty.as_placeholder() == Some(placeholder) {
        return Ok(true);
    }
    if !ty.is_monotype() {
        return Ok(false);
    }

    let mut declared_before = context.clone();
    declared_before.discard_from_placeholder(placeholder)?;

    if type_well_formed(&declared_before, ty) {
        context.solve_placeholder(placeholder, ty.clone())?;
        return Ok(true);
    }

    if let Type::Placeholder(later) = ty {
        if context.is_unsolved_placeholder(later) {
            context.solve_placeholder(later, Type::Placeholder(placeholder.clone()))?;
            return Ok(true);
        }
    }

    Ok(false)
}
