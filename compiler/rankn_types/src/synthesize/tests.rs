use super::*;
use pretty_assertions::assert_eq;
use rankn_ir::{BindingId, TypeId};

use crate::{synthesize, synthesize_application};

/// `∀a. a -> a`
fn identity_type() -> Type {
    Type::new_for_all("a", |a| Type::function(a.clone(), a))
}

/// `λx. x`
fn identity() -> Term {
    Term::new_lambda("x", |x| x)
}

/// Synthesize `term` and resolve the result against the context.
fn synthesize_applied(context: &mut Context, term: &Term) -> TypeResult<Option<Type>> {
    let ty = synthesize(context, term)?;
    Ok(ty.map(|ty| apply_context(context, &ty)))
}

#[test]
fn void_for_void() {
    let mut context = Context::new();
    assert_eq!(synthesize(&mut context, &Term::Void), Ok(Some(Type::Void)));
}

#[test]
fn bound_reference() {
    let mut context = Context::new();
    let x = BindingId::fresh("x");
    context.bind_type(x.clone(), Type::Void);
    assert_eq!(
        synthesize(&mut context, &Term::reference(&x)),
        Ok(Some(Type::Void))
    );
}

#[test]
fn unbound_reference() {
    let mut context = Context::new();
    let x = Term::reference(&BindingId::fresh("x"));
    assert_eq!(synthesize(&mut context, &x), Ok(None));
}

#[test]
fn annotated_term() {
    let mut context = Context::new();
    let term = Term::annotate(Term::Void, Type::Void);
    assert_eq!(synthesize(&mut context, &term), Ok(Some(Type::Void)));
}

#[test]
fn identity_function() {
    let mut context = Context::new();
    let Ok(Some(Type::Function { parameter, result })) = synthesize(&mut context, &identity())
    else {
        panic!("identity should synthesize a function type");
    };
    let parameter = apply_context(&context, &parameter);
    assert!(parameter.as_placeholder().is_some());
    assert_eq!(parameter, apply_context(&context, &result));
}

#[test]
fn lambda_with_unchecked_body() {
    let mut context = Context::new();
    let invalid = Term::reference(&BindingId::fresh("invalid"));
    let term = Term::new_lambda("x", |_| invalid);
    assert_eq!(synthesize(&mut context, &term), Ok(None));
    assert!(context.is_empty());
}

#[test]
fn lambda_using_argument_as_function() {
    // λf. f () : (void -> ^r) -> ^r
    let mut context = Context::new();
    let term = Term::new_lambda("f", |f| Term::application(f, Term::Void));
    let ty = synthesize_applied(&mut context, &term);

    let Ok(Some(Type::Function { parameter, result })) = &ty else {
        panic!("expected a function type, got {ty:?}");
    };
    let Type::Function {
        parameter: inner_parameter,
        result: inner_result,
    } = &**parameter
    else {
        panic!("argument should be articulated into a function, got {parameter}");
    };
    assert_eq!(**inner_parameter, Type::Void);
    assert!(inner_result.as_placeholder().is_some());
    assert_eq!(inner_result, result);
}

#[test]
fn identity_application() {
    let mut context = Context::new();
    let term = Term::application(identity(), Term::Void);
    assert_eq!(synthesize_applied(&mut context, &term), Ok(Some(Type::Void)));
}

#[test]
fn polymorphic_identity_application() {
    let mut context = Context::new();
    let term = Term::application(Term::annotate(identity(), identity_type()), Term::Void);
    assert_eq!(synthesize_applied(&mut context, &term), Ok(Some(Type::Void)));
}

#[test]
fn application_of_mismatched_annotation_aborts() {
    let mut context = Context::new();
    let function = Term::annotate(Term::Void, Type::function(Type::Void, Type::Void));
    let term = Term::application(function, Term::Void);
    assert_eq!(
        synthesize(&mut context, &term),
        Err(TypeError::AnnotationMismatch {
            term: Term::Void,
            annotation: Type::function(Type::Void, Type::Void),
        })
    );
}

#[test]
fn application_of_non_function() {
    let mut context = Context::new();
    let term = Term::application(Term::Void, Term::Void);
    assert_eq!(synthesize(&mut context, &term), Ok(None));
}

#[test]
fn application_of_unbound_function() {
    let mut context = Context::new();
    let function = Term::reference(&BindingId::fresh("f"));
    let term = Term::application(function, Term::Void);
    assert_eq!(synthesize(&mut context, &term), Ok(None));
}

#[test]
fn mismatching_application() {
    let mut context = Context::new();
    let a = context.declare_type_variable(TypeId::fresh("a"));
    let function = Term::annotate(identity(), Type::function(a.clone(), a));
    let term = Term::application(function, Term::Void);
    let before = context.clone();

    assert_eq!(synthesize(&mut context, &term), Ok(None));
    assert_eq!(context, before);
}

#[test]
fn ill_formed_annotation_aborts() {
    let mut context = Context::new();
    let undeclared = Type::fresh_variable("a");
    let term = Term::annotate(Term::Void, undeclared.clone());
    let result = synthesize(&mut context, &term);
    assert_eq!(
        result,
        Err(TypeError::IllFormedAnnotation {
            annotation: undeclared
        })
    );
    assert!(result.is_err_and(|error| error.is_annotation_error()));
}

// Application synthesis

#[test]
fn application_of_function_type() {
    let mut context = Context::new();
    let function = Type::function(Type::Void, Type::Void);
    assert_eq!(
        synthesize_application(&mut context, &function, &Term::Void),
        Ok(Some(Type::Void))
    );
}

#[test]
fn application_rejects_unchecked_argument() {
    let mut context = Context::new();
    let a = context.declare_type_variable(TypeId::fresh("a"));
    let function = Type::function(a, Type::Void);
    assert_eq!(
        synthesize_application(&mut context, &function, &Term::Void),
        Ok(None)
    );
}

#[test]
fn application_of_polymorphic_type() {
    let mut context = Context::new();
    let result = synthesize_application(&mut context, &identity_type(), &Term::Void);
    let Ok(Some(result)) = &result else {
        panic!("expected a result type, got {result:?}");
    };
    assert_eq!(apply_context(&context, result), Type::Void);
}

#[test]
fn application_of_polymorphic_type_rejects_unchecked_argument() {
    let mut context = Context::new();
    let a = context.declare_type_variable(TypeId::fresh("a"));
    let function = Type::new_for_all("b", |b| Type::function(a, b));
    let before = context.clone();

    assert_eq!(
        synthesize_application(&mut context, &function, &Term::Void),
        Ok(None)
    );
    assert_eq!(context, before);
}

#[test]
fn application_articulates_placeholder() {
    let mut context = Context::new();
    let placeholder = context.introduce_placeholder("a");
    let result =
        synthesize_application(&mut context, &Type::Placeholder(placeholder.clone()), &Term::Void);

    let Ok(Some(result)) = &result else {
        panic!("expected a result type, got {result:?}");
    };
    let result = apply_context(&context, result);
    assert!(result.as_placeholder().is_some());

    let solved = context
        .placeholder_solution(&placeholder)
        .map(|solution| apply_context(&context, solution));
    assert_eq!(solved, Some(Type::function(Type::Void, result)));
}

#[test]
fn application_of_variable() {
    let mut context = Context::new();
    let a = context.declare_type_variable(TypeId::fresh("a"));
    assert_eq!(
        synthesize_application(&mut context, &a, &Term::Void),
        Ok(None)
    );
}
