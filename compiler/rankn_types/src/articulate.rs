//! Giving an unknown a function shape.

use rankn_ir::{Type, TypeId};

use crate::{Context, TypeResult};

/// Solve `placeholder` to `^param -> ^result` for two fresh placeholders.
///
/// The new placeholders are inserted directly before `placeholder`, so they
/// are in scope for its solution and sit inside the same scope: when that
/// scope ends they are discarded along with it.
///
/// Returns the `(param, result)` placeholder ids.
pub fn articulate_placeholder(
    context: &mut Context,
    placeholder: &TypeId,
) -> TypeResult<(TypeId, TypeId)> {
    let parameter = TypeId::fresh(format!("{}-param", placeholder.label()));
    let result = TypeId::fresh(format!("{}-result", placeholder.label()));

    // Parameter first so the slots read `^param, ^result, ^placeholder`.
    context.insert_placeholder_before(parameter.clone(), placeholder)?;
    context.insert_placeholder_before(result.clone(), placeholder)?;

    tracing::debug!(placeholder = ?placeholder, "articulated placeholder");
    context.solve_placeholder(
        placeholder,
        Type::function(
            Type::Placeholder(parameter.clone()),
            Type::Placeholder(result.clone()),
        ),
    )?;

    Ok((parameter, result))
}
