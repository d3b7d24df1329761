//! Building blocks shared by the derived defaults and the instances.

pub mod variadic;

use crate::dispatch::{Context, Dispatch, Function, Operation, Tag};

/// Wraps a dispatch of `operation` into a [`Function`] value.
///
/// The function forwards its arguments unchanged, so it can be handed to
/// `fold_left` (`plus`, `mult`), to `unpack` (`make`) or to `chain` (`lift`).
pub fn operation(context: &Context, operation: Operation, parameter: Option<Tag>) -> Function {
    let context = context.clone();
    Function::new(operation.name(), move |arguments| {
        context.dispatch(operation, parameter, arguments)
    })
}
