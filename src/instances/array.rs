//! Fixed-size arrays `[T; N]`.
//!
//! Arrays get a bespoke `unpack` that walks the indices `0..N` and forwards
//! every element as a distinct positional argument, plus `make`, which
//! requires exactly `N` elements.

use std::any::{Any, type_name};

use crate::dispatch::{Error, Operation, RegistryBuilder, Tag, Value, spread};

/// The tag of `[T; N]`, named after the Rust type.
#[must_use]
pub fn array_tag<T: Any, const N: usize>() -> Tag {
    Tag::new(type_name::<[T; N]>())
}

/// Installs the `[T; N]` instance.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::{Function, Registry, Value};
/// use tagclass::instances::install_array;
/// use tagclass::typeclass::FoldableOps;
///
/// let registry = Registry::builder()
///     .with(install_array::<i64, 3>)
///     .build()
///     .unwrap();
/// let last = Function::new("last", |arguments| {
///     arguments.last().cloned().ok_or(tagclass::dispatch::Error::Custom("empty".into()))
/// });
/// let result = registry.unpack(Value::new([4_i64, 5, 6]), &last).unwrap();
/// assert_eq!(result.cloned::<i64>().unwrap(), 6);
/// ```
#[must_use]
pub fn install_array<T, const N: usize>(builder: RegistryBuilder) -> RegistryBuilder
where
    T: Any + Clone + PartialEq + Send + Sync,
{
    let tag = array_tag::<T, N>();
    builder
        .associate::<[T; N]>(tag)
        .define(Operation::Unpack, tag, |context, call| {
            let [array, f] = call.into_arguments()?;
            let array = array.get::<[T; N]>()?;
            let arguments: [Value; N] =
                std::array::from_fn(|index| Value::new(array[index].clone()));
            context.call(&f.function()?, Vec::from(arguments))
        })
        .define(Operation::Make, tag, |_, call| {
            let elements: [Value; N] = spread(Operation::Make.name(), call.arguments)?;
            let mut values = Vec::with_capacity(N);
            for element in &elements {
                values.push(element.cloned::<T>()?);
            }
            let array: [T; N] = values.try_into().map_err(|_: Vec<T>| Error::Arity {
                callee: Operation::Make.name(),
                expected: N,
                found: elements.len(),
            })?;
            Ok(Value::new(array))
        })
        .define(Operation::Equal, tag, |_, call| {
            let [left, right] = call.into_arguments()?;
            Ok(Value::new(left.get::<[T; N]>()? == right.get::<[T; N]>()?))
        })
}
