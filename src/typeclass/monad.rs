//! Monad type class - sequencing computations within a context.
//!
//! A data type models `Monad` by supplying both `lift` and `chain`. `lift` is
//! dispatched on its explicit data type parameter, `chain` on the tag of its
//! first argument.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! chain(lift<M>(a), f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! chain(m, lift<M>) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! chain(chain(m, f), g) == chain(m, |x| chain(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{DataType, Function, Registry, Value};
//! use tagclass::instances::Optional;
//! use tagclass::typeclass::MonadOps;
//!
//! let registry = Registry::standard().unwrap();
//! let halve = Function::unary("halve", |value| {
//!     let number = value.cloned::<i64>()?;
//!     Ok(Value::new(if number % 2 == 0 {
//!         Optional::Just(Value::new(number / 2))
//!     } else {
//!         Optional::Nothing
//!     }))
//! });
//!
//! let lifted = registry.lift(Optional::TAG, Value::new(8_i64)).unwrap();
//! let halved = registry.chain(lifted, &halve).unwrap();
//! assert!(matches!(halved.get::<Optional>().unwrap(), Optional::Just(_)));
//! ```

use crate::dispatch::{Dispatch, Function, Operation, Result, Tag, Value};

/// Operations of the `Monad` type class.
pub trait MonadOps: Dispatch {
    /// Wraps `value` into the monad `monad`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `monad` does not model Monad.
    fn lift(&self, monad: Tag, value: Value) -> Result<Value> {
        self.dispatch(Operation::Lift, Some(monad), vec![value])
    }

    /// Feeds the content of `m` to `f`, which returns a value of the same
    /// monad.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `m` is not a monadic value, and propagates errors of `f`.
    fn chain(&self, m: Value, f: &Function) -> Result<Value> {
        self.dispatch(Operation::Chain, None, vec![m, f.clone().into_value()])
    }
}

impl<D: Dispatch + ?Sized> MonadOps for D {}
