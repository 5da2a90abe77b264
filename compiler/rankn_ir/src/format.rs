//! Rendering of types and terms for debugging, tracing and error messages.
//!
//! ```text
//! ∀a. a -> a
//! (^x -> ^y) -> void
//! (λx. x : ∀a. a -> a) ()
//! ```
//!
//! Placeholders are prefixed with `^`. Arrows associate to the right, so only
//! function and forall parameters need parentheses.

use std::fmt;

use crate::{Term, Type};

impl Type {
    /// Format a type into an existing string buffer.
    pub fn format_into(&self, buf: &mut String) {
        match self {
            Type::Void => buf.push_str("void"),
            Type::Variable(id) => buf.push_str(id.label()),
            Type::Placeholder(id) => {
                buf.push('^');
                buf.push_str(id.label());
            }
            Type::ForAll { quantified, body } => {
                buf.push('∀');
                buf.push_str(quantified.label());
                buf.push_str(". ");
                body.format_into(buf);
            }
            Type::Function { parameter, result } => {
                if parameter.is_monotype() && !parameter.is_function() {
                    parameter.format_into(buf);
                } else {
                    buf.push('(');
                    parameter.format_into(buf);
                    buf.push(')');
                }
                buf.push_str(" -> ");
                result.format_into(buf);
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.format_into(&mut buf);
        f.write_str(&buf)
    }
}

impl Term {
    /// Format a term into an existing string buffer.
    pub fn format_into(&self, buf: &mut String) {
        match self {
            Term::Void => buf.push_str("()"),
            Term::Reference(binding) => buf.push_str(binding.label()),
            Term::Lambda { argument, body } => {
                buf.push('λ');
                buf.push_str(argument.label());
                buf.push_str(". ");
                body.format_into(buf);
            }
            Term::Application { function, argument } => {
                if matches!(**function, Term::Lambda { .. }) {
                    buf.push('(');
                    function.format_into(buf);
                    buf.push(')');
                } else {
                    function.format_into(buf);
                }
                buf.push(' ');
                if matches!(**argument, Term::Lambda { .. } | Term::Application { .. }) {
                    buf.push('(');
                    argument.format_into(buf);
                    buf.push(')');
                } else {
                    argument.format_into(buf);
                }
            }
            Term::Annotation { term, annotation } => {
                buf.push('(');
                term.format_into(buf);
                buf.push_str(" : ");
                annotation.format_into(buf);
                buf.push(')');
            }
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.format_into(&mut buf);
        f.write_str(&buf)
    }
}
