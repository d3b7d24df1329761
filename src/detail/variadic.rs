//! Folds over positional argument lists.
//!
//! These are the bodies of the functions handed to `unpack` by the derived
//! defaults: `unpack` spreads the elements of a structure as arguments, and
//! the helpers below reduce those arguments with a binary [`Function`].

use crate::dispatch::{Arguments, Context, Error, Function, Result, Value};

/// `f(...f(f(state, x1), x2)..., xn)`.
///
/// # Errors
///
/// Propagates the first error returned by `f`.
pub fn foldl(context: &Context, f: &Function, state: Value, arguments: Arguments) -> Result<Value> {
    arguments
        .into_iter()
        .try_fold(state, |accumulator, element| {
            context.call(f, vec![accumulator, element])
        })
}

/// [`foldl`] seeded with the first argument.
///
/// # Errors
///
/// Returns [`Error::ContractViolation`] with `message` when `arguments` is
/// empty, and otherwise propagates the first error returned by `f`.
pub fn foldl1(
    context: &Context,
    f: &Function,
    arguments: Arguments,
    message: &'static str,
) -> Result<Value> {
    let mut elements = arguments.into_iter();
    let first = elements.next().ok_or(Error::ContractViolation(message))?;
    elements.try_fold(first, |accumulator, element| {
        context.call(f, vec![accumulator, element])
    })
}

/// `f(x1, f(x2, ...f(xn, state)...))`.
///
/// # Errors
///
/// Propagates the first error returned by `f`.
pub fn foldr(context: &Context, f: &Function, state: Value, arguments: Arguments) -> Result<Value> {
    arguments
        .into_iter()
        .rev()
        .try_fold(state, |accumulator, element| {
            context.call(f, vec![element, accumulator])
        })
}

/// [`foldr`] seeded with the last argument.
///
/// # Errors
///
/// Returns [`Error::ContractViolation`] with `message` when `arguments` is
/// empty, and otherwise propagates the first error returned by `f`.
pub fn foldr1(
    context: &Context,
    f: &Function,
    arguments: Arguments,
    message: &'static str,
) -> Result<Value> {
    let mut elements = arguments.into_iter().rev();
    let last = elements.next().ok_or(Error::ContractViolation(message))?;
    elements.try_fold(last, |accumulator, element| {
        context.call(f, vec![element, accumulator])
    })
}

/// Calls `f` once per argument, in order.
///
/// # Errors
///
/// Stops at and returns the first error returned by `f`.
pub fn for_each(context: &Context, f: &Function, arguments: Arguments) -> Result<()> {
    for element in arguments {
        context.call(f, vec![element])?;
    }
    Ok(())
}
