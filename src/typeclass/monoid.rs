//! Monoid and Ring type classes.
//!
//! A `Monoid` supplies an associative `plus` and its identity `zero`; a
//! `Ring` is a monoid that additionally supplies an associative `mult` and
//! its identity `one`. `zero` and `one` take no argument, so they are
//! dispatched on an explicit data type parameter.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! plus(zero<M>(), a) == a == plus(a, zero<M>())
//! mult(one<R>(), a)  == a == mult(a, one<R>())
//! ```
//!
//! ## Associativity
//!
//! ```text
//! plus(plus(a, b), c) == plus(a, plus(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{Registry, Tag, Value};
//! use tagclass::typeclass::{MonoidOps, RingOps};
//!
//! let registry = Registry::standard().unwrap();
//! let zero = registry.zero(Tag::new("i32")).unwrap();
//! let seven = registry.plus(zero, Value::new(7_i32)).unwrap();
//! let fourteen = registry.mult(seven, Value::new(2_i32)).unwrap();
//! assert_eq!(fourteen.cloned::<i32>().unwrap(), 14);
//! ```

use crate::dispatch::{Dispatch, Operation, Result, Tag, Value};

/// Operations of the `Monoid` type class.
pub trait MonoidOps: Dispatch {
    /// The identity of `plus` for `monoid`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `monoid` does not model Monoid.
    fn zero(&self, monoid: Tag) -> Result<Value> {
        self.dispatch(Operation::Zero, Some(monoid), Vec::new())
    }

    /// The monoid operation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `left` is not a monoid value.
    fn plus(&self, left: Value, right: Value) -> Result<Value> {
        self.dispatch(Operation::Plus, None, vec![left, right])
    }
}

impl<D: Dispatch + ?Sized> MonoidOps for D {}

/// Operations of the `Ring` type class.
pub trait RingOps: Dispatch {
    /// The identity of `mult` for `ring`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `ring` does not model Ring.
    fn one(&self, ring: Tag) -> Result<Value> {
        self.dispatch(Operation::One, Some(ring), Vec::new())
    }

    /// The ring multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `left` is not a ring value.
    fn mult(&self, left: Value, right: Value) -> Result<Value> {
        self.dispatch(Operation::Mult, None, vec![left, right])
    }
}

impl<D: Dispatch + ?Sized> RingOps for D {}
