//! Tag-based dispatch of type class operations.
//!
//! This module holds the machinery shared by every generic algorithm:
//!
//! - [`Tag`] and [`TagResolver`]: which data type a value belongs to;
//! - [`Value`] and [`Function`]: dynamically typed values and variadic
//!   functions, so that heterogeneous structures can be spread positionally;
//! - [`Operation`] and [`Typeclass`]: the catalogue of operations and the
//!   minimal definitions of each type class;
//! - [`Descriptor`] and [`Guard`]: registered implementations and the
//!   conditions under which they apply;
//! - [`RegistryBuilder`] and [`Registry`]: build-time resolution of every
//!   (operation, tag) pair;
//! - [`Dispatch`] and [`Context`]: invoking resolved operations.
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{Dispatch, Operation, Registry, Tag, Value};
//!
//! let registry = Registry::standard().unwrap();
//! let sum = registry
//!     .dispatch(Operation::Plus, None, vec![Value::new(2_i64), Value::new(3_i64)])
//!     .unwrap();
//! assert_eq!(sum.cloned::<i64>().unwrap(), 5);
//! assert_eq!(registry.tag_of(&Value::new(1_i64)), Tag::new("i64"));
//! ```

mod class;
mod config;
mod context;
mod descriptor;
mod error;
mod function;
mod membership;
mod operation;
mod registry;
mod tag;
mod value;

pub use class::Typeclass;
pub use config::ResolutionConfig;
pub use context::{Context, Dispatch};
pub use descriptor::{Call, Condition, Descriptor, Guard, Implementation, Origin, Requirement, Target};
pub use error::{Error, Result};
pub use function::{Arguments, Function, spread};
pub use membership::Membership;
pub use operation::Operation;
pub use registry::{Registry, RegistryBuilder};
pub use tag::{DataType, Tag, TagResolver};
pub use value::Value;

#[cfg(feature = "derive")]
pub use tagclass_derive::DataType;
