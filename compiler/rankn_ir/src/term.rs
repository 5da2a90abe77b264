//! The term language: the minimal calculus the checker works over.

use crate::{BindingId, Type};

/// A term of the calculus.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Term {
    /// The unit value, of type `Void`.
    Void,

    /// Reference to a lambda-bound argument.
    Reference(BindingId),

    /// `λargument. body`
    Lambda {
        argument: BindingId,
        body: Box<Term>,
    },

    /// `function argument`
    Application {
        function: Box<Term>,
        argument: Box<Term>,
    },

    /// `(term : annotation)`
    Annotation {
        term: Box<Term>,
        annotation: Type,
    },
}

impl Term {
    pub fn reference(binding: &BindingId) -> Self {
        Term::Reference(binding.clone())
    }

    pub fn lambda(argument: BindingId, body: Term) -> Self {
        Term::Lambda {
            argument,
            body: Box::new(body),
        }
    }

    /// Build a lambda with a freshly minted argument.
    ///
    /// The builder receives a reference to the argument:
    ///
    /// ```text
    /// let identity = Term::new_lambda("x", |x| x);
    /// ```
    pub fn new_lambda(label: &str, body: impl FnOnce(Term) -> Term) -> Self {
        let argument = BindingId::fresh(label);
        let body = body(Term::Reference(argument.clone()));
        Term::lambda(argument, body)
    }

    pub fn application(function: Term, argument: Term) -> Self {
        Term::Application {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }

    pub fn annotate(term: Term, annotation: Type) -> Self {
        Term::Annotation {
            term: Box::new(term),
            annotation,
        }
    }
}
