//! Homogeneous lists backed by `Vec<T>`.
//!
//! The list instance supplies `fold_left` and `make` only. `unpack`, the
//! right folds and every generic algorithm are derived.

use std::any::{Any, type_name};

use crate::detail::variadic;
use crate::dispatch::{Operation, RegistryBuilder, Tag, Value};
use crate::typeclass::foldable::{FOLD_LEFT_NON_EMPTY, fold_arguments};

/// The tag of `Vec<T>`, named after the Rust type.
#[must_use]
pub fn vec_tag<T: Any>() -> Tag {
    Tag::new(type_name::<Vec<T>>())
}

/// Installs the `Vec<T>` instance.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::{Registry, Typeclass};
/// use tagclass::instances::{install_vec, vec_tag};
///
/// let registry = Registry::builder()
///     .with(install_vec::<char>)
///     .build()
///     .unwrap();
/// assert!(registry.models(Typeclass::Sequence, vec_tag::<char>()));
/// ```
#[must_use]
pub fn install_vec<T>(builder: RegistryBuilder) -> RegistryBuilder
where
    T: Any + Clone + PartialEq + Send + Sync,
{
    let tag = vec_tag::<T>();
    builder
        .associate::<Vec<T>>(tag)
        .define(Operation::FoldLeft, tag, |context, call| {
            let (list, state, f) = fold_arguments(call)?;
            let elements: Vec<Value> = list
                .get::<Vec<T>>()?
                .iter()
                .cloned()
                .map(Value::new)
                .collect();
            match state {
                Some(state) => variadic::foldl(context, &f, state, elements),
                None => variadic::foldl1(context, &f, elements, FOLD_LEFT_NON_EMPTY),
            }
        })
        .define(Operation::Make, tag, |_, call| {
            let elements = call
                .arguments
                .iter()
                .map(Value::cloned::<T>)
                .collect::<Result<Vec<T>, _>>()?;
            Ok(Value::new(elements))
        })
        .define(Operation::Equal, tag, |_, call| {
            let [left, right] = call.into_arguments()?;
            Ok(Value::new(left.get::<Vec<T>>()? == right.get::<Vec<T>>()?))
        })
}
