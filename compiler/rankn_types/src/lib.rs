//! Bidirectional type checking with higher-rank polymorphism.
//!
//! This crate decides, for a small lambda calculus with `∀` types, whether a
//! term checks against a type, what type a term synthesizes, and whether one
//! type is a subtype of ("at least as polymorphic as") another.
//!
//! # Architecture
//!
//! - [`Context`]: the ordered context of variables, placeholders, term
//!   bindings and scope markers, threaded through every judgment
//! - [`Checker`]: runs the mutually recursive judgments under a depth budget
//! - [`apply_context`], [`type_well_formed`], [`articulate_placeholder`]:
//!   context-level helpers the judgments share
//!
//! # Outcomes
//!
//! A judgment that does not hold returns `Ok(false)` or `Ok(None)` and leaves
//! the context as it found it. `Err(TypeError)` is reserved for runs that
//! cannot continue: a corrupted context, a bad annotation, an exhausted
//! depth budget.
//!
//! The free functions below run a [`Checker::default`], whose depth budget
//! honors the `RANKN_MAX_DEPTH` environment variable.
//!
//! # Usage
//!
//! ```text
//! let identity = Term::annotate(
//!     Term::new_lambda("x", |x| x),
//!     Type::new_for_all("a", |a| Type::function(a.clone(), a)),
//! );
//! let mut context = Context::new();
//! let ty = rankn_types::synthesize(&mut context, &Term::application(identity, Term::Void))?;
//! assert_eq!(ty.map(|ty| apply_context(&context, &ty)), Some(Type::Void));
//! ```
//!
//! # Tracing
//!
//! Judgments emit `trace` spans, placeholder solutions are logged at `debug`
//! and invariant violations at `error`. Call [`init_tracing`] and set
//! `RUST_LOG=rankn_types=trace` to see a derivation as an indented tree.

mod apply;
mod articulate;
mod check;
mod checker;
mod config;
pub mod context;
mod error;
mod instantiate;
mod stack;
mod subtype;
mod synthesize;
mod well_formed;


use std::sync::Once;

pub use apply::apply_context;
pub use articulate::articulate_placeholder;
pub use checker::Checker;
pub use config::{CheckerConfig, MAX_DEPTH_ENV};
pub use context::{Context, ContextElement, MarkerId};
pub use error::{TypeError, TypeResult};
pub use instantiate::{instantiate_monotype, Variance};
pub use well_formed::type_well_formed;

pub use rankn_ir::{BindingId, Term, Type, TypeId};

/// Does `term` check against `ty`? Runs with the default configuration.
pub fn check(context: &mut Context, ty: &Type, term: &Term) -> TypeResult<bool> {
    Checker::default().check(context, ty, term)
}

/// Synthesize the type of `term`. Runs with the default configuration.
pub fn synthesize(context: &mut Context, term: &Term) -> TypeResult<Option<Type>> {
    Checker::default().synthesize(context, term)
}

/// The result type of applying `function_type` to `argument`.
pub fn synthesize_application(
    context: &mut Context,
    function_type: &Type,
    argument: &Term,
) -> TypeResult<Option<Type>> {
    Checker::default().synthesize_application(context, function_type, argument)
}

/// Is `sub` a subtype of `sup`?
pub fn is_subtype(context: &mut Context, sub: &Type, sup: &Type) -> TypeResult<bool> {
    Checker::default().is_subtype(context, sub, sup)
}

/// Solve `placeholder <: ty`.
pub fn instantiate_subtype(
    context: &mut Context,
    placeholder: &TypeId,
    ty: &Type,
) -> TypeResult<bool> {
    Checker::default().instantiate_subtype(context, placeholder, ty)
}

/// Solve `ty <: placeholder`.
pub fn instantiate_supertype(
    context: &mut Context,
    placeholder: &TypeId,
    ty: &Type,
) -> TypeResult<bool> {
    Checker::default().instantiate_supertype(context, placeholder, ty)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Set `RUST_LOG` to enable, e.g. `RUST_LOG=rankn_types=debug`. Spans are
/// rendered as an indented tree that mirrors the judgment derivation. Safe
/// to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .init();
        }
    });
}
