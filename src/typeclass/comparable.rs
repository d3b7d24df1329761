//! Comparable, Orderable and Enumerable type classes.
//!
//! Each of them has a single-operation minimal definition: `equal`, `less`
//! and `succ` respectively. The generic algorithms use them through
//! dispatch: `count` compares with `equal`, `minimum` and `maximum` order
//! with `less`, and `count_if` counts with `succ`.

use crate::dispatch::{Dispatch, Operation, Result, Value};

/// Operations of the `Comparable` type class.
pub trait ComparableOps: Dispatch {
    /// Whether `left` and `right` are equal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `left` is not Comparable.
    fn equal(&self, left: Value, right: Value) -> Result<bool> {
        self.dispatch(Operation::Equal, None, vec![left, right])?
            .truth()
    }
}

impl<D: Dispatch + ?Sized> ComparableOps for D {}

/// Operations of the `Orderable` type class.
pub trait OrderableOps: Dispatch {
    /// Whether `left` is strictly less than `right`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `left` is not Orderable.
    fn less(&self, left: Value, right: Value) -> Result<bool> {
        self.dispatch(Operation::Less, None, vec![left, right])?
            .truth()
    }
}

impl<D: Dispatch + ?Sized> OrderableOps for D {}

/// Operations of the `Enumerable` type class.
pub trait EnumerableOps: Dispatch {
    /// The successor of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`](crate::dispatch::Error::NotConforming)
    /// if `value` is not Enumerable.
    fn succ(&self, value: Value) -> Result<Value> {
        self.dispatch(Operation::Succ, None, vec![value])
    }
}

impl<D: Dispatch + ?Sized> EnumerableOps for D {}
