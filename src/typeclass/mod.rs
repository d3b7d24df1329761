//! Type class surfaces and the generic algorithms built on them.
//!
//! Each type class is exposed as an extension trait implemented for every
//! [`Dispatch`](crate::dispatch::Dispatch)er, so the operations can be
//! called on a [`Registry`](crate::dispatch::Registry) as well as on the
//! [`Context`](crate::dispatch::Context) handed to a descriptor:
//!
//! - [`FoldableOps`]: `fold_left`, `fold_right`, `unpack`, monadic folds,
//!   `for_each`, `length`, `minimum`, `maximum`, `sum`, `product`,
//!   `count_if`, `count`
//! - [`MonadOps`]: `lift`, `chain`
//! - [`MonoidOps`] and [`RingOps`]: `zero`, `plus`, `one`, `mult`
//! - [`ComparableOps`], [`OrderableOps`], [`EnumerableOps`]: `equal`,
//!   `less`, `succ`
//! - [`SequenceOps`]: `make`, `to`, `is_embedding`
//!
//! Only the Foldable operations have derived defaults; every other type
//! class is defined entirely by its instances.

mod comparable;
pub mod foldable;
mod monad;
pub mod monadic_fold;
mod monoid;
mod sequence;

pub use comparable::{ComparableOps, EnumerableOps, OrderableOps};
pub use foldable::FoldableOps;
pub use monad::MonadOps;
pub use monoid::{MonoidOps, RingOps};
pub use sequence::SequenceOps;
