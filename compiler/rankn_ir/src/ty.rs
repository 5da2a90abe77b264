//! The type algebra.

use crate::TypeId;

/// A type of the calculus.
///
/// Types are immutable values. Structural equality compares ids by identity,
/// so two types built from the same ids are equal regardless of labels.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// The trivial type.
    Void,

    /// A rigid (skolem) variable, opaque within its declaring scope.
    Variable(TypeId),

    /// An existential unknown, solved at most once while it is in scope.
    Placeholder(TypeId),

    /// Universal quantification: `∀quantified. body`.
    ForAll {
        quantified: TypeId,
        body: Box<Type>,
    },

    /// Function type: `parameter -> result`.
    Function {
        parameter: Box<Type>,
        result: Box<Type>,
    },
}

impl Type {
    /// Build `parameter -> result`.
    pub fn function(parameter: Type, result: Type) -> Self {
        Type::Function {
            parameter: Box::new(parameter),
            result: Box::new(result),
        }
    }

    /// Build `∀quantified. body` from an existing id.
    pub fn for_all(quantified: TypeId, body: Type) -> Self {
        Type::ForAll {
            quantified,
            body: Box::new(body),
        }
    }

    /// Build a quantified type with a freshly minted variable.
    ///
    /// The builder receives the quantified variable so the body can refer to it:
    ///
    /// ```text
    /// let identity = Type::new_for_all("a", |a| Type::function(a.clone(), a));
    /// ```
    pub fn new_for_all(label: &str, body: impl FnOnce(Type) -> Type) -> Self {
        let quantified = TypeId::fresh(label);
        let body = body(Type::Variable(quantified.clone()));
        Type::for_all(quantified, body)
    }

    /// A rigid variable with a freshly minted id (not declared anywhere).
    pub fn fresh_variable(label: &str) -> Self {
        Type::Variable(TypeId::fresh(label))
    }

    /// A placeholder with a freshly minted id (not declared anywhere).
    pub fn fresh_placeholder(label: &str) -> Self {
        Type::Placeholder(TypeId::fresh(label))
    }

    /// Anything but a top-level `ForAll`.
    #[inline]
    pub fn is_monotype(&self) -> bool {
        !matches!(self, Type::ForAll { .. })
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, Type::Function { .. })
    }

    /// The placeholder id, if this is a placeholder.
    pub fn as_placeholder(&self) -> Option<&TypeId> {
        match self {
            Type::Placeholder(id) => Some(id),
            _ => None,
        }
    }
}

