//! Foldable type class - folding over data structures.
//!
//! A data type models `Foldable` by supplying either `fold_left` or `unpack`.
//! Every other operation is derived: `fold_left` from `unpack`, `unpack`
//! from `fold_left`, and the generic algorithms (`fold_right`, `length`,
//! `sum`, `count_if`, ...) from `fold_left`. A data type may still supply any
//! of them to override the derived version.
//!
//! # Laws
//!
//! ## Consistency of the stateless folds
//!
//! ```text
//! fold_left1(xs, f) == fold_left(tail(xs), head(xs), f)   // xs non-empty
//! ```
//!
//! ## Consistency of `unpack` and `fold_left`
//!
//! ```text
//! unpack(xs, f) == fold_left(xs, f, partial)()
//! ```
//!
//! ## Length
//!
//! ```text
//! length(xs) == count_if(xs, const true)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{Function, Registry, Value};
//! use tagclass::typeclass::FoldableOps;
//!
//! let registry = Registry::standard().unwrap();
//! let numbers = Value::new(vec![1_i64, 2, 3]);
//!
//! let add = Function::binary("add", |left, right| {
//!     Ok(Value::new(left.cloned::<i64>()? + right.cloned::<i64>()?))
//! });
//! let total = registry.fold_left(numbers.clone(), Value::new(0_i64), &add).unwrap();
//! assert_eq!(total.cloned::<i64>().unwrap(), 6);
//!
//! assert_eq!(registry.length(numbers.clone()).unwrap(), 3);
//! assert_eq!(registry.count(numbers, Value::new(2_i64)).unwrap(), 1);
//! ```

use crate::detail::{self, variadic};
use crate::dispatch::{
    Call, Context, Descriptor, Dispatch, Function, Guard, Operation, Result, Tag, Target,
    Typeclass, Value,
};

/// Error message of `fold_left(xs, f)` on an empty structure.
pub const FOLD_LEFT_NON_EMPTY: &str = "fold_left(xs, f) requires xs to be non-empty";

/// Error message of `fold_right(xs, f)` on an empty structure.
pub const FOLD_RIGHT_NON_EMPTY: &str = "fold_right(xs, f) requires xs to be non-empty";

/// Generic algorithms over `Foldable` data types.
///
/// Implemented for every [`Dispatch`]er, that is for
/// [`Registry`](crate::dispatch::Registry) and
/// [`Context`](crate::dispatch::Context).
pub trait FoldableOps: Dispatch {
    /// Left-associative fold: `f(...f(f(state, x1), x2)..., xn)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `xs` does not model Foldable, and propagates errors of `f`.
    fn fold_left(&self, xs: Value, state: Value, f: &Function) -> Result<Value> {
        self.dispatch(
            Operation::FoldLeft,
            None,
            vec![xs, state, f.clone().into_value()],
        )
    }

    /// Left-associative fold seeded with the first element.
    ///
    /// # Errors
    ///
    /// Returns a contract violation ([`FOLD_LEFT_NON_EMPTY`]) when `xs` is
    /// empty.
    fn fold_left1(&self, xs: Value, f: &Function) -> Result<Value> {
        self.dispatch(Operation::FoldLeft, None, vec![xs, f.clone().into_value()])
    }

    /// Right-associative fold: `f(x1, f(x2, ...f(xn, state)...))`.
    ///
    /// # Errors
    ///
    /// Same as [`fold_left`](Self::fold_left).
    fn fold_right(&self, xs: Value, state: Value, f: &Function) -> Result<Value> {
        self.dispatch(
            Operation::FoldRight,
            None,
            vec![xs, state, f.clone().into_value()],
        )
    }

    /// Right-associative fold seeded with the last element.
    ///
    /// # Errors
    ///
    /// Returns a contract violation ([`FOLD_RIGHT_NON_EMPTY`]) when `xs` is
    /// empty.
    fn fold_right1(&self, xs: Value, f: &Function) -> Result<Value> {
        self.dispatch(Operation::FoldRight, None, vec![xs, f.clone().into_value()])
    }

    /// Calls `f` with the elements of `xs` as positional arguments.
    ///
    /// # Errors
    ///
    /// Same as [`fold_left`](Self::fold_left).
    fn unpack(&self, xs: Value, f: &Function) -> Result<Value> {
        self.dispatch(Operation::Unpack, None, vec![xs, f.clone().into_value()])
    }

    /// Left fold whose step returns a value of the monad `monad`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `xs` is not Foldable or `monad` is not a Monad.
    fn monadic_fold_left(&self, monad: Tag, xs: Value, state: Value, f: &Function) -> Result<Value> {
        self.dispatch(
            Operation::MonadicFoldLeft,
            Some(monad),
            vec![xs, state, f.clone().into_value()],
        )
    }

    /// Monadic left fold seeded with the first element.
    ///
    /// # Errors
    ///
    /// Returns a contract violation when `xs` is empty.
    fn monadic_fold_left1(&self, monad: Tag, xs: Value, f: &Function) -> Result<Value> {
        self.dispatch(
            Operation::MonadicFoldLeft,
            Some(monad),
            vec![xs, f.clone().into_value()],
        )
    }

    /// Right fold whose step returns a value of the monad `monad`.
    ///
    /// # Errors
    ///
    /// Same as [`monadic_fold_left`](Self::monadic_fold_left).
    fn monadic_fold_right(
        &self,
        monad: Tag,
        xs: Value,
        state: Value,
        f: &Function,
    ) -> Result<Value> {
        self.dispatch(
            Operation::MonadicFoldRight,
            Some(monad),
            vec![xs, state, f.clone().into_value()],
        )
    }

    /// Monadic right fold seeded with the last element.
    ///
    /// # Errors
    ///
    /// Returns a contract violation when `xs` is empty.
    fn monadic_fold_right1(&self, monad: Tag, xs: Value, f: &Function) -> Result<Value> {
        self.dispatch(
            Operation::MonadicFoldRight,
            Some(monad),
            vec![xs, f.clone().into_value()],
        )
    }

    /// Calls `f` on every element, left to right.
    ///
    /// # Errors
    ///
    /// Stops at the first error of `f`.
    fn for_each(&self, xs: Value, f: &Function) -> Result<()> {
        self.dispatch(Operation::ForEach, None, vec![xs, f.clone().into_value()])
            .map(|_| ())
    }

    /// The number of elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `xs` is not Foldable.
    fn length(&self, xs: Value) -> Result<usize> {
        self.dispatch(Operation::Length, None, vec![xs])?.cloned()
    }

    /// The least element according to `less`.
    ///
    /// # Errors
    ///
    /// Returns a contract violation when `xs` is empty.
    fn minimum(&self, xs: Value) -> Result<Value> {
        self.dispatch(Operation::Minimum, None, vec![xs])
    }

    /// The least element according to `predicate`, a strict "less than".
    ///
    /// # Errors
    ///
    /// Returns a contract violation when `xs` is empty.
    fn minimum_by(&self, xs: Value, predicate: &Function) -> Result<Value> {
        self.dispatch(
            Operation::Minimum,
            None,
            vec![xs, predicate.clone().into_value()],
        )
    }

    /// The greatest element according to `less`.
    ///
    /// # Errors
    ///
    /// Returns a contract violation when `xs` is empty.
    fn maximum(&self, xs: Value) -> Result<Value> {
        self.dispatch(Operation::Maximum, None, vec![xs])
    }

    /// The greatest element according to `predicate`, a strict "less than".
    ///
    /// # Errors
    ///
    /// Returns a contract violation when `xs` is empty.
    fn maximum_by(&self, xs: Value, predicate: &Function) -> Result<Value> {
        self.dispatch(
            Operation::Maximum,
            None,
            vec![xs, predicate.clone().into_value()],
        )
    }

    /// Sums the elements with the monoid `monoid`; `zero` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `monoid` is not a Monoid.
    fn sum(&self, monoid: Tag, xs: Value) -> Result<Value> {
        self.dispatch(Operation::Sum, Some(monoid), vec![xs])
    }

    /// Multiplies the elements with the ring `ring`; `one` when empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `ring` is not a Ring.
    fn product(&self, ring: Tag, xs: Value) -> Result<Value> {
        self.dispatch(Operation::Product, Some(ring), vec![xs])
    }

    /// The number of elements satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Propagates errors of `predicate`, which must return a `bool`.
    fn count_if(&self, xs: Value, predicate: &Function) -> Result<usize> {
        self.dispatch(
            Operation::CountIf,
            None,
            vec![xs, predicate.clone().into_value()],
        )?
        .cloned()
    }

    /// The number of elements `equal` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if the elements are not Comparable.
    fn count(&self, xs: Value, value: Value) -> Result<usize> {
        self.dispatch(Operation::Count, None, vec![xs, value])?
            .cloned()
    }
}

impl<D: Dispatch + ?Sized> FoldableOps for D {}

// =============================================================================
// Derived defaults
// =============================================================================

/// The fallback descriptors of every Foldable operation.
pub(crate) fn defaults() -> Vec<Descriptor> {
    [
        derived(Operation::FoldLeft, fold_left_via_unpack),
        derived(Operation::FoldRight, fold_right_via_unpack),
        derived(Operation::Unpack, unpack_via_fold_left),
        derived(Operation::ForEach, for_each),
        derived(Operation::Length, length),
        derived(Operation::Minimum, minimum),
        derived(Operation::Maximum, maximum),
        derived(Operation::Sum, sum),
        derived(Operation::Product, product),
        derived(Operation::CountIf, count_if),
        derived(Operation::Count, count),
    ]
    .into()
}

/// A universal fallback applying to every data type that models Foldable.
pub(crate) fn derived<F>(operation: Operation, implementation: F) -> Descriptor
where
    F: Fn(&Context, Call) -> Result<Value> + Send + Sync + 'static,
{
    Descriptor::new(operation, Target::Any, implementation)
        .guarded(Guard::models(Typeclass::Foldable))
        .as_default()
}

/// Splits `[xs, state, f]` or `[xs, f]`.
pub(crate) fn fold_arguments(call: Call) -> Result<(Value, Option<Value>, Function)> {
    if call.arguments.len() == 3 {
        let [xs, state, f] = call.into_arguments()?;
        Ok((xs, Some(state), f.function()?))
    } else {
        let [xs, f] = call.into_arguments()?;
        Ok((xs, None, f.function()?))
    }
}

fn fold_left_via_unpack(context: &Context, call: Call) -> Result<Value> {
    let (xs, state, f) = fold_arguments(call)?;
    let inner = context.clone();
    let body = match state {
        Some(state) => Function::new("fold_left", move |arguments| {
            variadic::foldl(&inner, &f, state.clone(), arguments)
        }),
        None => Function::new("fold_left", move |arguments| {
            variadic::foldl1(&inner, &f, arguments, FOLD_LEFT_NON_EMPTY)
        }),
    };
    context.dispatch(Operation::Unpack, None, vec![xs, body.into_value()])
}

fn fold_right_via_unpack(context: &Context, call: Call) -> Result<Value> {
    let (xs, state, f) = fold_arguments(call)?;
    let inner = context.clone();
    let body = match state {
        Some(state) => Function::new("fold_right", move |arguments| {
            variadic::foldr(&inner, &f, state.clone(), arguments)
        }),
        None => Function::new("fold_right", move |arguments| {
            variadic::foldr1(&inner, &f, arguments, FOLD_RIGHT_NON_EMPTY)
        }),
    };
    context.dispatch(Operation::Unpack, None, vec![xs, body.into_value()])
}

fn unpack_via_fold_left(context: &Context, call: Call) -> Result<Value> {
    let [xs, f] = call.into_arguments()?;
    let apply = Function::binary("partial", |accumulated, element| {
        let function = accumulated.into_inner::<Function>()?;
        Ok(function.into_partial(vec![element]).into_value())
    });
    let saturated = context.dispatch(Operation::FoldLeft, None, vec![xs, f, apply.into_value()])?;
    context.call(&saturated.function()?, Vec::new())
}

fn for_each(context: &Context, call: Call) -> Result<Value> {
    let [xs, f] = call.into_arguments()?;
    let f = f.function()?;
    let tag = context.tag_of(&xs);
    let inner = context.clone();

    if context.is_supplied(Operation::Unpack, tag) {
        let visit = Function::new("for_each", move |arguments| {
            variadic::for_each(&inner, &f, arguments).map(|()| Value::unit())
        });
        context.dispatch(Operation::Unpack, None, vec![xs, visit.into_value()])
    } else {
        let visit = Function::binary("for_each", move |_, element| {
            inner.call(&f, vec![element])?;
            Ok(Value::unit())
        });
        context.dispatch(
            Operation::FoldLeft,
            None,
            vec![xs, Value::unit(), visit.into_value()],
        )?;
        Ok(Value::unit())
    }
}

fn length(context: &Context, call: Call) -> Result<Value> {
    let [xs] = call.into_arguments()?;
    let argn = Function::new("argn", |arguments| Ok(Value::new(arguments.len())));
    context.dispatch(Operation::Unpack, None, vec![xs, argn.into_value()])
}

/// Splits `[xs]` or `[xs, predicate]`, defaulting the predicate to `less`.
fn extremum_arguments(context: &Context, call: Call) -> Result<(Value, Function)> {
    if call.arguments.len() == 2 {
        let [xs, predicate] = call.into_arguments()?;
        Ok((xs, predicate.function()?))
    } else {
        let [xs] = call.into_arguments()?;
        Ok((xs, detail::operation(context, Operation::Less, None)))
    }
}

fn minimum(context: &Context, call: Call) -> Result<Value> {
    let (xs, predicate) = extremum_arguments(context, call)?;
    let inner = context.clone();
    let keep = Function::binary("minimum", move |least, element| {
        let keeps_least = inner
            .call(&predicate, vec![least.clone(), element.clone()])?
            .truth()?;
        Ok(if keeps_least { least } else { element })
    });
    context.dispatch(Operation::FoldLeft, None, vec![xs, keep.into_value()])
}

fn maximum(context: &Context, call: Call) -> Result<Value> {
    let (xs, predicate) = extremum_arguments(context, call)?;
    let inner = context.clone();
    let keep = Function::binary("maximum", move |greatest, element| {
        let replaces = inner
            .call(&predicate, vec![greatest.clone(), element.clone()])?
            .truth()?;
        Ok(if replaces { element } else { greatest })
    });
    context.dispatch(Operation::FoldLeft, None, vec![xs, keep.into_value()])
}

fn sum(context: &Context, call: Call) -> Result<Value> {
    let monoid = call.parameter()?;
    let [xs] = call.into_arguments()?;
    let zero = context.dispatch(Operation::Zero, Some(monoid), Vec::new())?;
    let plus = detail::operation(context, Operation::Plus, None);
    context.dispatch(Operation::FoldLeft, None, vec![xs, zero, plus.into_value()])
}

fn product(context: &Context, call: Call) -> Result<Value> {
    let ring = call.parameter()?;
    let [xs] = call.into_arguments()?;
    let one = context.dispatch(Operation::One, Some(ring), Vec::new())?;
    let mult = detail::operation(context, Operation::Mult, None);
    context.dispatch(Operation::FoldLeft, None, vec![xs, one, mult.into_value()])
}

fn count_if(context: &Context, call: Call) -> Result<Value> {
    let [xs, predicate] = call.into_arguments()?;
    let predicate = predicate.function()?;
    let inner = context.clone();
    let step = Function::binary("count_if", move |count, element| {
        if inner.call(&predicate, vec![element])?.truth()? {
            inner.dispatch(Operation::Succ, None, vec![count])
        } else {
            Ok(count)
        }
    });
    context.dispatch(
        Operation::FoldLeft,
        None,
        vec![xs, Value::new(0_usize), step.into_value()],
    )
}

fn count(context: &Context, call: Call) -> Result<Value> {
    let [xs, value] = call.into_arguments()?;
    let equal = detail::operation(context, Operation::Equal, None).partial(vec![value]);
    context.dispatch(Operation::CountIf, None, vec![xs, equal.into_value()])
}
