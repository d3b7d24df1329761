//! # tagclass
//!
//! Type classes for dynamically tagged values, with generic algorithms that
//! derive everything from a minimal set of primitives.
//!
//! ## Overview
//!
//! Every value belongs to a *data type*, identified by a [`Tag`](dispatch::Tag).
//! A data type conforms to a type class (Foldable, Monad, Monoid, Ring,
//! Orderable, Comparable, Enumerable, Sequence) by supplying one of the type
//! class's minimal definitions; every other operation is derived. A Foldable,
//! for instance, only supplies `fold_left` *or* `unpack`, and receives
//! `fold_right`, the monadic folds, `length`, `sum`, `product`, `minimum`,
//! `maximum`, `count`, `count_if` and `for_each` for free.
//!
//! Implementations are registered as descriptors in a
//! [`RegistryBuilder`](dispatch::RegistryBuilder). Building the registry
//! resolves, once, the most specific descriptor of every operation for every
//! data type and rejects ambiguous or incomplete registrations.
//!
//! - [`dispatch`]: tags, values, descriptors and the registry
//! - [`typeclass`]: the type class surfaces and generic algorithms
//! - [`instances`]: reference instances for numbers, tuples, lists, arrays
//!   and `Optional`
//!
//! ## Feature Flags
//!
//! - `serde`: (de)serialization of [`ResolutionConfig`](dispatch::ResolutionConfig)
//! - `derive`: `#[derive(DataType)]`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tagclass::prelude::*;
//!
//! const PAIR: Tag = Tag::new("pair");
//!
//! #[derive(Clone)]
//! struct Pair(i64, i64);
//!
//! // A pair supplies `unpack` only.
//! let registry = Registry::builder()
//!     .with(tagclass::instances::standard)
//!     .associate::<Pair>(PAIR)
//!     .define(Operation::Unpack, PAIR, |context, call| {
//!         let [pair, f] = call.into_arguments()?;
//!         let Pair(first, second) = pair.cloned::<Pair>()?;
//!         context.call(&f.function()?, vec![Value::new(first), Value::new(second)])
//!     })
//!     .build()
//!     .unwrap();
//!
//! let pair = Value::new(Pair(4, 7));
//! assert_eq!(registry.length(pair.clone()).unwrap(), 2);
//! assert_eq!(registry.sum(Tag::new("i64"), pair.clone()).unwrap().cloned::<i64>().unwrap(), 11);
//! assert_eq!(registry.maximum(pair).unwrap().cloned::<i64>().unwrap(), 7);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the dispatch types and every extension trait.
///
/// # Usage
///
/// ```rust
/// use tagclass::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dispatch::{
        Call, Context, DataType, Descriptor, Dispatch, Error, Function, Guard, Operation,
        Registry, RegistryBuilder, Result, Tag, Target, Typeclass, Value,
    };
    pub use crate::instances::{Optional, Tuple};
    pub use crate::typeclass::*;
}

mod detail;
pub mod dispatch;
pub mod instances;
pub mod typeclass;
