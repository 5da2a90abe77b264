//! Well-formedness of types against the context.

use std::ops::ControlFlow;

use rankn_ir::{Type, TypeId, TypeVisitor};
use rustc_hash::FxHashSet;

use crate::{Context, ContextElement};

/// Checks every name in a type against the declarations in scope.
struct WellFormed<'ctx> {
    variables: FxHashSet<&'ctx TypeId>,
    placeholders: FxHashSet<&'ctx TypeId>,
    /// Variables bound by enclosing `ForAll`s of the type being visited.
    quantified: Vec<TypeId>,
}

impl<'ctx> WellFormed<'ctx> {
    fn new(context: &'ctx Context) -> Self {
        let mut variables = FxHashSet::default();
        let mut placeholders = FxHashSet::default();
        for element in context.elements() {
            match element {
                ContextElement::Variable(id) => {
                    variables.insert(id);
                }
                ContextElement::Placeholder(id) | ContextElement::SolvedPlaceholder { id, .. } => {
                    placeholders.insert(id);
                }
                ContextElement::Annotation { .. } | ContextElement::Marker(_) => {}
            }
        }
        Self {
            variables,
            placeholders,
            quantified: Vec::new(),
        }
    }
}

impl TypeVisitor for WellFormed<'_> {
    fn visit_variable(&mut self, id: &TypeId) -> ControlFlow<()> {
        if self.variables.contains(id) || self.quantified.contains(id) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    fn visit_placeholder(&mut self, id: &TypeId) -> ControlFlow<()> {
        if self.placeholders.contains(id) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }

    fn visit_for_all(&mut self, quantified: &TypeId, body: &Type) -> ControlFlow<()> {
        self.quantified.push(quantified.clone());
        let flow = self.visit(body);
        self.quantified.pop();
        flow
    }
}

/// Is every variable and placeholder in `ty` declared in `context`?
///
/// A `ForAll` brings its quantified variable into scope for its body only,
/// as if declared in a disposable child scope.
pub fn type_well_formed(context: &Context, ty: &Type) -> bool {
    WellFormed::new(context).visit(ty).is_continue()
}
