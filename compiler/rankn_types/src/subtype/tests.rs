use super::*;
use pretty_assertions::assert_eq;
use rankn_ir::TypeId;

use crate::is_subtype;

/// `void -> void`
fn large() -> Type {
    Type::function(Type::Void, Type::Void)
}

/// `∀a. a -> a`, a subtype of [`large`].
fn small() -> Type {
    Type::new_for_all("a", |a| Type::function(a.clone(), a))
}

/// Assert that `sub <: sup` fails and leaves the context alone.
fn assert_rejected(context: &mut Context, sub: &Type, sup: &Type) {
    let before = context.clone();
    assert_eq!(is_subtype(context, sub, sup), Ok(false), "{sub} <: {sup}");
    assert_eq!(*context, before);
}

#[test]
fn rejects_disparate_types() {
    let mut context = Context::new();
    assert_rejected(&mut context, &Type::Void, &large());
    assert_rejected(&mut context, &large(), &Type::Void);
}

#[test]
fn accepts_void() {
    let mut context = Context::new();
    assert_eq!(is_subtype(&mut context, &Type::Void, &Type::Void), Ok(true));
}

#[test]
fn accepts_identical_variables() {
    let mut context = Context::new();
    let variable = context.declare_type_variable(TypeId::fresh("foo"));
    assert_eq!(is_subtype(&mut context, &variable, &variable), Ok(true));
}

#[test]
fn accepts_identical_placeholders() {
    let mut context = Context::new();
    let placeholder = Type::Placeholder(context.introduce_placeholder("foo"));
    assert_eq!(
        is_subtype(&mut context, &placeholder, &placeholder),
        Ok(true)
    );
    assert!(placeholder
        .as_placeholder()
        .is_some_and(|id| context.is_unsolved_placeholder(id)));
}

#[test]
fn rejects_different_variables() {
    let mut context = Context::new();
    let foo = context.declare_type_variable(TypeId::fresh("foo"));
    let bar = context.declare_type_variable(TypeId::fresh("bar"));
    assert_rejected(&mut context, &foo, &bar);
}

#[test]
fn accepts_matching_function() {
    let mut context = Context::new();
    assert_eq!(is_subtype(&mut context, &large(), &large()), Ok(true));
}

#[test]
fn parameter_is_contravariant() {
    let mut context = Context::new();
    let sub = Type::function(large(), Type::Void);
    let sup = Type::function(small(), Type::Void);
    assert_eq!(is_subtype(&mut context, &sub, &sup), Ok(true));
    assert_rejected(&mut context, &sup, &sub);
}

#[test]
fn result_is_covariant() {
    let mut context = Context::new();
    let sub = Type::function(Type::Void, small());
    let sup = Type::function(Type::Void, large());
    assert_eq!(is_subtype(&mut context, &sub, &sup), Ok(true));
    assert_rejected(&mut context, &sup, &sub);
}

#[test]
fn accepts_trivial_for_all_subtype() {
    let mut context = Context::new();
    let polymorphic = Type::for_all(TypeId::fresh("t"), Type::Void);
    assert_eq!(
        is_subtype(&mut context, &polymorphic, &Type::Void),
        Ok(true)
    );
}

#[test]
fn instantiates_polymorphic_function() {
    let mut context = Context::new();
    assert_eq!(is_subtype(&mut context, &small(), &large()), Ok(true));
    assert!(context.is_empty());
}

#[test]
fn rejects_mismatching_for_all_body() {
    let mut context = Context::new();
    let polymorphic = Type::for_all(TypeId::fresh("t"), Type::Void);
    assert_rejected(&mut context, &polymorphic, &large());
}

#[test]
fn accepts_trivial_for_all_supertype() {
    let mut context = Context::new();
    let polymorphic = Type::for_all(TypeId::fresh("t"), Type::Void);
    assert_eq!(
        is_subtype(&mut context, &Type::Void, &polymorphic),
        Ok(true)
    );
}

#[test]
fn rejects_polymorphic_supertype() {
    let mut context = Context::new();
    assert_rejected(&mut context, &large(), &small());
}

#[test]
fn solves_placeholder_as_supertype_of_polymorphic_function() {
    // Predicatively, `^foo := ∀a. a -> a` is approximated by `^p -> ^p`.
    let mut context = Context::new();
    let placeholder = context.introduce_placeholder("foo");

    assert_eq!(
        is_subtype(&mut context, &small(), &Type::Placeholder(placeholder.clone())),
        Ok(true)
    );

    let solved = apply_context(&context, &Type::Placeholder(placeholder));
    let Type::Function { parameter, result } = &solved else {
        panic!("expected a function, got {solved}");
    };
    assert!(parameter.as_placeholder().is_some());
    assert_eq!(parameter, result);
}

#[test]
fn solves_placeholder_as_subtype() {
    let mut context = Context::new();
    let a = context.declare_type_variable(TypeId::fresh("a"));
    let placeholder = context.introduce_placeholder("foo");

    assert_eq!(
        is_subtype(&mut context, &Type::Placeholder(placeholder.clone()), &a),
        Ok(true)
    );
    assert_eq!(context.placeholder_solution(&placeholder), Some(&a));
}

#[test]
fn accepts_equivalent_for_alls() {
    let mut context = Context::new();
    let sub = Type::new_for_all("sub", |a| Type::function(a.clone(), a));
    let sup = Type::new_for_all("super", |b| Type::function(b.clone(), b));
    assert_eq!(is_subtype(&mut context, &sub, &sup), Ok(true));
    assert!(context.is_empty());
}

#[test]
fn rejects_differing_for_alls() {
    let mut context = Context::new();
    let sub = Type::new_for_all("sub", |a| Type::function(a, Type::Void));
    let sup = Type::new_for_all("super", |b| Type::function(b.clone(), b));
    assert_rejected(&mut context, &sub, &sup);
}

#[test]
fn occurs_check_rejects_cycle() {
    let mut context = Context::new();
    let placeholder = Type::Placeholder(context.introduce_placeholder("foo"));
    let cyclic = Type::function(placeholder.clone(), Type::Void);
    assert_rejected(&mut context, &placeholder, &cyclic);
    assert_rejected(&mut context, &cyclic, &placeholder);
}

#[test]
fn occurs_check_looks_through_solutions() {
    let mut context = Context::new();
    let foo = context.introduce_placeholder("foo");
    let bar = context.introduce_placeholder("bar");
    assert_eq!(
        context.solve_placeholder(&bar, Type::function(Type::Placeholder(foo.clone()), Type::Void)),
        Ok(())
    );
    assert_rejected(&mut context, &Type::Placeholder(foo), &Type::Placeholder(bar));
}

#[test]
fn compares_solved_placeholders_by_solution() {
    let mut context = Context::new();
    let foo = context.introduce_placeholder("foo");
    let bar = context.introduce_placeholder("bar");
    assert_eq!(
        context.solve_placeholder(&bar, Type::Placeholder(foo.clone())),
        Ok(())
    );
    let before = context.clone();

    let foo = Type::Placeholder(foo);
    let bar = Type::Placeholder(bar);
    assert_eq!(is_subtype(&mut context, &foo, &bar), Ok(true));
    assert_eq!(is_subtype(&mut context, &bar, &foo), Ok(true));
    assert_eq!(context, before);
}

#[test]
fn solved_placeholder_matches_its_function_solution() {
    let mut context = Context::new();
    let placeholder = context.introduce_placeholder("foo");
    assert_eq!(context.solve_placeholder(&placeholder, large()), Ok(()));

    let solved = Type::Placeholder(placeholder);
    assert_eq!(is_subtype(&mut context, &solved, &large()), Ok(true));
    assert_eq!(is_subtype(&mut context, &small(), &solved), Ok(true));
    assert_rejected(&mut context, &solved, &Type::Void);
}
