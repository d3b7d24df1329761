//! Variadic functions used as arguments of generic algorithms.
//!
//! A [`Function`] receives its arguments positionally as a `Vec<Value>`. This
//! is what allows `unpack` to spread the elements of a structure, whatever
//! their Rust types, as distinct arguments of a single call.
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{Function, Value};
//!
//! let add = Function::binary("add", |left, right| {
//!     Ok(Value::new(left.cloned::<i64>()? + right.cloned::<i64>()?))
//! });
//!
//! let add_one = add.partial(vec![Value::new(1_i64)]);
//! let result = add_one.call(vec![Value::new(41_i64)]).unwrap();
//! assert_eq!(result.cloned::<i64>().unwrap(), 42);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::error::{Error, Result};
use super::tag::{DataType, Tag};
use super::value::Value;

/// Positional arguments of a call.
pub type Arguments = Vec<Value>;

type Body = dyn Fn(Arguments) -> Result<Value> + Send + Sync;

/// A named, variadic, cheaply clonable function value.
///
/// Partial application never nests: a partially applied function keeps the
/// body of its root function and the flat list of fixed leading arguments.
#[derive(Clone)]
pub struct Function {
    name: &'static str,
    body: Arc<Body>,
    fixed: Arguments,
}

impl Function {
    /// Creates a function receiving all of its arguments at once.
    pub fn new<F>(name: &'static str, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name,
            body: Arc::new(body),
            fixed: Vec::new(),
        }
    }

    /// Creates a function of exactly one argument.
    pub fn unary<F>(name: &'static str, body: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, move |arguments| {
            let [argument] = spread(name, arguments)?;
            body(argument)
        })
    }

    /// Creates a function of exactly two arguments.
    pub fn binary<F>(name: &'static str, body: F) -> Self
    where
        F: Fn(Value, Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, move |arguments| {
            let [first, second] = spread(name, arguments)?;
            body(first, second)
        })
    }

    /// Returns the name given at construction.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The number of leading arguments fixed by partial application.
    #[must_use]
    pub const fn fixed_arguments(&self) -> usize {
        self.fixed.len()
    }

    /// Calls the function.
    ///
    /// # Errors
    ///
    /// Propagates any error of the function body.
    pub fn call(&self, arguments: Arguments) -> Result<Value> {
        if self.fixed.is_empty() {
            return (self.body)(arguments);
        }
        let mut all = Vec::with_capacity(self.fixed.len() + arguments.len());
        all.extend(self.fixed.iter().cloned());
        all.extend(arguments);
        (self.body)(all)
    }

    /// Fixes the leading arguments of the function.
    ///
    /// The returned function prepends `fixed` to the arguments it receives.
    #[must_use]
    pub fn partial(&self, fixed: Arguments) -> Self {
        self.clone().into_partial(fixed)
    }

    /// Like [`partial`](Self::partial), reusing the already fixed arguments
    /// in place.
    #[must_use]
    pub fn into_partial(mut self, fixed: Arguments) -> Self {
        self.fixed.extend(fixed);
        self
    }

    /// Curries the function to `arity` arguments.
    ///
    /// Calling the result with fewer than `arity` arguments returns (as a
    /// value) a function waiting for the remaining ones; calling it with
    /// exactly `arity` arguments calls the original function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tagclass::dispatch::{Function, Value};
    ///
    /// let sum3 = Function::new("sum3", |arguments| {
    ///     let mut total = 0_i64;
    ///     for argument in &arguments {
    ///         total += argument.cloned::<i64>()?;
    ///     }
    ///     Ok(Value::new(total))
    /// })
    /// .curry(3);
    ///
    /// let waiting = sum3.call(vec![Value::new(1_i64), Value::new(2_i64)]).unwrap();
    /// let result = waiting.function().unwrap().call(vec![Value::new(3_i64)]).unwrap();
    /// assert_eq!(result.cloned::<i64>().unwrap(), 6);
    /// ```
    #[must_use]
    pub fn curry(self, arity: usize) -> Self {
        let name = self.name;
        Self::new(name, move |arguments| {
            let found = arguments.len();
            match found.cmp(&arity) {
                Ordering::Equal => self.call(arguments),
                Ordering::Less => Ok(self.partial(arguments).curry(arity - found).into_value()),
                Ordering::Greater => Err(Error::Arity {
                    callee: name,
                    expected: arity,
                    found,
                }),
            }
        })
    }

    /// Wraps the function into a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::new(self)
    }
}

impl DataType for Function {
    const TAG: Tag = Tag::FUNCTION;
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fixed.is_empty() {
            write!(formatter, "Function({})", self.name)
        } else {
            write!(formatter, "Function({}, {} fixed)", self.name, self.fixed.len())
        }
    }
}

/// Destructures exactly `N` positional arguments.
///
/// # Errors
///
/// Returns [`Error::Arity`] naming `callee` when the count differs.
pub fn spread<const N: usize>(callee: &'static str, arguments: Arguments) -> Result<[Value; N]> {
    let found = arguments.len();
    arguments.try_into().map_err(|_: Arguments| Error::Arity {
        callee,
        expected: N,
        found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn concat() -> Function {
        Function::new("concat", |arguments| {
            let mut text = String::new();
            for argument in &arguments {
                text.push_str(argument.get::<&'static str>()?);
            }
            Ok(Value::new(text))
        })
    }

    fn strings(values: &[&'static str]) -> Arguments {
        values.iter().copied().map(Value::new).collect()
    }

    #[rstest]
    fn call_receives_arguments_in_order() {
        let result = concat().call(strings(&["a", "b", "c"])).unwrap();
        assert_eq!(result.cloned::<String>().unwrap(), "abc");
    }

    #[rstest]
    fn partial_prepends_fixed_arguments() {
        let partially = concat().partial(strings(&["x", "y"]));
        let result = partially.call(strings(&["z"])).unwrap();
        assert_eq!(result.cloned::<String>().unwrap(), "xyz");
    }

    #[rstest]
    fn partial_can_be_called_repeatedly() {
        let partially = concat().partial(strings(&["x"]));
        assert_eq!(
            partially.call(strings(&["1"])).unwrap().cloned::<String>().unwrap(),
            "x1"
        );
        assert_eq!(
            partially.call(strings(&["2"])).unwrap().cloned::<String>().unwrap(),
            "x2"
        );
    }

    #[rstest]
    fn partial_of_a_partial_stays_flat() {
        let mut partially = concat();
        for letter in ["a", "b", "c", "d"] {
            partially = partially.into_partial(strings(&[letter]));
        }
        assert_eq!(partially.fixed_arguments(), 4);
        assert_eq!(
            partially.call(strings(&["e"])).unwrap().cloned::<String>().unwrap(),
            "abcde"
        );
    }

    #[rstest]
    fn deep_partial_application_does_not_grow_the_stack() {
        let count = Function::new("count", |arguments| Ok(Value::new(arguments.len())));
        let saturated = (0..50_000_i64).fold(count, |function, index| {
            function.into_partial(vec![Value::new(index)])
        });
        let result = saturated.call(Vec::new()).unwrap();
        assert_eq!(result.cloned::<usize>().unwrap(), 50_000);
    }

    #[rstest]
    fn curry_collects_arguments_across_calls() {
        let curried = concat().curry(3);
        let first = curried.call(strings(&["a"])).unwrap().function().unwrap();
        let second = first.call(strings(&["b"])).unwrap().function().unwrap();
        let result = second.call(strings(&["c"])).unwrap();
        assert_eq!(result.cloned::<String>().unwrap(), "abc");
    }

    #[rstest]
    fn curry_rejects_surplus_arguments() {
        let curried = concat().curry(1);
        let error = curried.call(strings(&["a", "b"])).unwrap_err();
        assert_eq!(
            error,
            Error::Arity {
                callee: "concat",
                expected: 1,
                found: 2,
            }
        );
    }

    #[rstest]
    fn binary_checks_arity() {
        let pair = Function::binary("pair", |first, _| Ok(first));
        assert!(pair.call(strings(&["only"])).is_err());
        assert!(pair.call(strings(&["a", "b"])).is_ok());
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn spread_reports_the_found_count(#[case] count: usize) {
        let arguments: Arguments = (0..count).map(Value::new).collect();
        let error = spread::<1>("single", arguments).unwrap_err();
        assert_eq!(
            error,
            Error::Arity {
                callee: "single",
                expected: 1,
                found: count,
            }
        );
    }
}
