//! Monadic folds derived from the plain folds.
//!
//! `monadic_fold_left<M>(xs, s, f)` threads the accumulator through the
//! monad `M`: every step `f(acc, x)` returns an `M`-value and the next step
//! is chained onto it. The derivation folds the monadic accumulator itself,
//! chaining one step per element:
//!
//! ```text
//! monadic_fold_left<M>(xs, s, f)  = fold_left(xs, lift<M>(s), |m, x| chain(m, |z| f(z, x)))
//! monadic_fold_right<M>(xs, s, f) = fold_right(xs, lift<M>(s), |x, m| chain(m, |z| f(x, z)))
//! ```
//!
//! By the associativity law of `chain` this is the continuation form
//! `chain(f(s, x1), |z| chain(f(z, x2), ...))`. Every `chain` returns to the
//! fold loop before the next one starts, so neither the native stack nor the
//! dispatch depth grows with the length of `xs`.
//!
//! The stateless variants seed the fold with an explicit empty [`Slot`] and
//! unwrap it at the end. A monad that short-circuits (such as `Nothing`)
//! never reaches the unwrap step, so its short-circuit value is returned
//! as is.

use crate::detail;
use crate::dispatch::{
    Call, Context, Descriptor, Dispatch, Error, Function, Operation, Result, Tag, Value,
};

use super::foldable::derived;

/// Error message of `monadic_fold_left<M>(xs, f)` on an empty structure.
pub const MONADIC_FOLD_LEFT_NON_EMPTY: &str =
    "monadic_fold_left(xs, f) requires xs to be non-empty";

/// Error message of `monadic_fold_right<M>(xs, f)` on an empty structure.
pub const MONADIC_FOLD_RIGHT_NON_EMPTY: &str =
    "monadic_fold_right(xs, f) requires xs to be non-empty";

/// Accumulator of the stateless monadic folds.
#[derive(Debug, Clone)]
enum Slot {
    End,
    Element(Value),
}

#[derive(Clone, Copy)]
enum Direction {
    Left,
    Right,
}

impl Direction {
    const fn operation(self) -> Operation {
        match self {
            Self::Left => Operation::MonadicFoldLeft,
            Self::Right => Operation::MonadicFoldRight,
        }
    }

    const fn non_empty(self) -> &'static str {
        match self {
            Self::Left => MONADIC_FOLD_LEFT_NON_EMPTY,
            Self::Right => MONADIC_FOLD_RIGHT_NON_EMPTY,
        }
    }
}

pub(crate) fn defaults() -> Vec<Descriptor> {
    vec![
        derived(Operation::MonadicFoldLeft, |context, call| {
            monadic_fold(context, call, Direction::Left)
        }),
        derived(Operation::MonadicFoldRight, |context, call| {
            monadic_fold(context, call, Direction::Right)
        }),
    ]
}

fn monadic_fold(context: &Context, call: Call, direction: Direction) -> Result<Value> {
    let monad = call.parameter()?;
    if call.arguments.len() == 3 {
        let [xs, state, f] = call.into_arguments()?;
        with_state(context, monad, direction, xs, state, &f.function()?)
    } else {
        let [xs, f] = call.into_arguments()?;
        stateless(context, monad, direction, xs, f.function()?)
    }
}

fn with_state(
    context: &Context,
    monad: Tag,
    direction: Direction,
    xs: Value,
    state: Value,
    f: &Function,
) -> Result<Value> {
    let start = context.dispatch(Operation::Lift, Some(monad), vec![state])?;
    let inner = context.clone();
    let f = f.clone();
    let step = Function::binary(direction.operation().name(), move |first, second| {
        let (monadic, element) = match direction {
            Direction::Left => (first, second),
            Direction::Right => (second, first),
        };
        let next = continuation(&inner, &f, element, direction);
        inner.dispatch(Operation::Chain, None, vec![monadic, next.into_value()])
    });
    let fold = match direction {
        Direction::Left => Operation::FoldLeft,
        Direction::Right => Operation::FoldRight,
    };
    context.dispatch(fold, None, vec![xs, start, step.into_value()])
}

/// `|z| f(z, x)` for a left fold, `|z| f(x, z)` for a right fold.
fn continuation(
    context: &Context,
    f: &Function,
    element: Value,
    direction: Direction,
) -> Function {
    let context = context.clone();
    let f = f.clone();
    Function::unary(direction.operation().name(), move |accumulator| {
        let arguments = match direction {
            Direction::Left => vec![accumulator, element.clone()],
            Direction::Right => vec![element.clone(), accumulator],
        };
        context.call(&f, arguments)
    })
}

fn stateless(
    context: &Context,
    monad: Tag,
    direction: Direction,
    xs: Value,
    f: Function,
) -> Result<Value> {
    let lift = detail::operation(context, Operation::Lift, Some(monad));
    let inner = context.clone();
    let wrap = lift.clone();
    let step = Function::binary(direction.operation().name(), move |first, second| {
        // A right fold passes the element first and the slot second.
        let (slot, element) = match direction {
            Direction::Left => (first, second),
            Direction::Right => (second, first),
        };
        match slot.get::<Slot>()? {
            Slot::End => wrap.call(vec![Value::new(Slot::Element(element))]),
            Slot::Element(previous) => {
                let arguments = match direction {
                    Direction::Left => vec![previous.clone(), element],
                    Direction::Right => vec![element, previous.clone()],
                };
                let result = inner.call(&f, arguments)?;
                let rewrap = wrap.clone();
                let element_of = Function::unary("element", move |value| {
                    rewrap.call(vec![Value::new(Slot::Element(value))])
                });
                inner.dispatch(
                    Operation::Chain,
                    None,
                    vec![result, element_of.into_value()],
                )
            }
        }
    });

    let folded = context.dispatch(
        direction.operation(),
        Some(monad),
        vec![xs, Value::new(Slot::End), step.into_value()],
    )?;

    let message = direction.non_empty();
    let unwrap = Function::unary("unwrap", move |slot| match slot.get::<Slot>()? {
        Slot::Element(value) => lift.call(vec![value.clone()]),
        Slot::End => Err(Error::ContractViolation(message)),
    });
    context.dispatch(Operation::Chain, None, vec![folded, unwrap.into_value()])
}
