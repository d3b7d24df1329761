//! `bool` and unit instances. Both are Comparable only.

use crate::dispatch::{DataType, Operation, RegistryBuilder, Tag, Value};

impl DataType for bool {
    const TAG: Tag = Tag::new("bool");
}

/// Installs the `bool` instance.
#[must_use]
pub fn install_bool(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .data_type::<bool>()
        .define(Operation::Equal, bool::TAG, |_, call| {
            let [left, right] = call.into_arguments()?;
            Ok(Value::new(left.truth()? == right.truth()?))
        })
}

/// Installs the unit instance: every unit value equals every other.
#[must_use]
pub fn install_unit(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .data_type::<()>()
        .define(Operation::Equal, Tag::UNIT, |_, call| {
            let [left, right] = call.into_arguments()?;
            left.get::<()>()?;
            right.get::<()>()?;
            Ok(Value::new(true))
        })
}
