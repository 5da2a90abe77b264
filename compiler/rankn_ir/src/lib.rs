//! Core data structures for the rank-n checker.
//!
//! This crate contains the values the checker consumes:
//! - Globally unique identifiers for type variables, placeholders and bindings
//! - The `Type` algebra (void, rigid variables, placeholders, `∀`, `->`)
//! - The `Term` language (void, references, lambdas, applications, annotations)
//! - Structural traversal, substitution and the occurs-check
//!
//! # Design Philosophy
//!
//! - **Identity by id**: ids compare by their raw value, never by label
//! - **Closed sums**: every traversal is an exhaustive `match`
//! - **No capture**: bound names are unique, so substitution never renames
//!
//! Parsing concrete syntax into these values is the caller's job.

mod format;
mod id;
mod substitute;
mod term;
mod traverse;
mod ty;

pub use id::{BindingId, TypeId};
pub use substitute::{substitute_type_references, type_references};
pub use term::Term;
pub use traverse::{TypeFolder, TypeVisitor};
pub use ty::Type;
