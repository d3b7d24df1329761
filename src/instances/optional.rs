//! The `Optional` data type: a Monad, a Foldable of at most one element and
//! a Comparable.

use std::any::Any;

use crate::dispatch::{DataType, Dispatch, Operation, RegistryBuilder, Tag, Value};

/// A value that may be absent.
///
/// `chain` short-circuits on [`Nothing`](Self::Nothing), which makes
/// `Optional` the natural monad for folds that may fail.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::{Function, Registry, Value};
/// use tagclass::instances::Optional;
/// use tagclass::typeclass::{FoldableOps, MonadOps};
///
/// let registry = Registry::standard().unwrap();
/// let nothing = Value::new(Optional::Nothing);
/// let never = Function::unary("never", |_| unreachable!());
///
/// let chained = registry.chain(nothing.clone(), &never).unwrap();
/// assert!(chained.get::<Optional>().unwrap().is_nothing());
/// assert_eq!(registry.length(nothing).unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub enum Optional {
    /// A present value.
    Just(Value),
    /// An absent value.
    Nothing,
}

impl Optional {
    /// Wraps a present value.
    #[must_use]
    pub fn just<T: Any + Send + Sync>(value: T) -> Self {
        Self::Just(Value::new(value))
    }

    /// Returns `true` for [`Nothing`](Self::Nothing).
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// The present value, if any.
    #[must_use]
    pub fn into_option(self) -> Option<Value> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }
}

impl DataType for Optional {
    const TAG: Tag = Tag::new("optional");
}

/// Installs the `Optional` instance.
#[must_use]
pub fn install_optional(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .data_type::<Optional>()
        .define(Operation::Lift, Optional::TAG, |_, call| {
            let [value] = call.into_arguments()?;
            Ok(Value::new(Optional::Just(value)))
        })
        .define(Operation::Chain, Optional::TAG, |context, call| {
            let [optional, f] = call.into_arguments()?;
            match optional.get::<Optional>()? {
                Optional::Just(value) => context.call(&f.function()?, vec![value.clone()]),
                Optional::Nothing => Ok(optional.clone()),
            }
        })
        .define(Operation::Unpack, Optional::TAG, |context, call| {
            let [optional, f] = call.into_arguments()?;
            let arguments: Vec<Value> = optional
                .get::<Optional>()?
                .clone()
                .into_option()
                .into_iter()
                .collect();
            context.call(&f.function()?, arguments)
        })
        .define(Operation::Equal, Optional::TAG, |context, call| {
            let [left, right] = call.into_arguments()?;
            let equal = match (left.get::<Optional>()?, right.get::<Optional>()?) {
                (Optional::Nothing, Optional::Nothing) => true,
                (Optional::Just(left), Optional::Just(right)) => context
                    .dispatch(Operation::Equal, None, vec![left.clone(), right.clone()])?
                    .truth()?,
                _ => false,
            };
            Ok(Value::new(equal))
        })
}
