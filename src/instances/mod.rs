//! Reference instances of the type classes.
//!
//! Instances are installer functions `fn(RegistryBuilder) -> RegistryBuilder`
//! that associate Rust types with tags and register their descriptors. They
//! are meant to be passed to [`RegistryBuilder::with`]:
//!
//! ```rust
//! use tagclass::dispatch::Registry;
//! use tagclass::instances::{install_optional, install_vec, numeric};
//!
//! let registry = Registry::builder()
//!     .with(numeric)
//!     .with(install_optional)
//!     .with(install_vec::<i64>)
//!     .build()
//!     .unwrap();
//! # let _ = registry;
//! ```
//!
//! | Data type | Supplies | Models |
//! |---|---|---|
//! | `i32`, `i64`, `u32`, `u64`, `usize`, `f64` | `zero`, `plus`, `one`, `mult`, `less`, `equal`, `succ` | Monoid, Ring, Orderable, Comparable, Enumerable |
//! | `bool`, `()` | `equal` | Comparable |
//! | [`Tuple`] | `unpack`, `make`, `equal` | Foldable, Sequence, Comparable |
//! | `Vec<T>` | `fold_left`, `make`, `equal` | Foldable, Sequence, Comparable |
//! | `[T; N]` | `unpack`, `make`, `equal` | Foldable, Sequence, Comparable |
//! | [`Optional`] | `lift`, `chain`, `unpack`, `equal` | Monad, Foldable, Comparable |

mod array;
mod list;
mod logical;
mod numeric;
mod optional;
mod tuple;

pub use array::{array_tag, install_array};
pub use list::{install_vec, vec_tag};
pub use logical::{install_bool, install_unit};
pub use numeric::{
    Number, install_f64, install_i32, install_i64, install_number, install_u32, install_u64,
    install_usize, numeric,
};
pub use optional::{Optional, install_optional};
pub use tuple::{Tuple, install_tuple};

use crate::dispatch::{Function, RegistryBuilder};

/// Instances every registry needs: unit, `bool`, `usize` (the counter of
/// `length` and `count_if`) and functions.
#[must_use]
pub fn prelude(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .data_type::<Function>()
        .with(install_unit)
        .with(install_bool)
        .with(install_usize)
}

/// Every reference instance on top of the prelude.
#[must_use]
pub fn standard(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .with(numeric)
        .with(install_tuple)
        .with(install_optional)
        .with(install_vec::<i32>)
        .with(install_vec::<i64>)
        .with(install_vec::<u32>)
        .with(install_vec::<u64>)
        .with(install_vec::<usize>)
        .with(install_vec::<f64>)
        .with(install_vec::<bool>)
}
