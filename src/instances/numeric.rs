//! Numeric instances: Monoid, Ring, Orderable, Comparable and Enumerable.
//!
//! Integers use wrapping arithmetic so that `plus`, `mult` and `succ` are
//! total. `f64` uses IEEE arithmetic; `equal` and `less` follow
//! `PartialEq`/`PartialOrd`, so `NaN` is neither equal nor less than
//! anything.

use paste::paste;

use crate::dispatch::{Call, Context, DataType, Operation, RegistryBuilder, Result, Tag, Value};

/// A primitive number registered by [`install_number`].
pub trait Number: DataType + Copy + PartialEq + PartialOrd {
    /// Identity of [`plus`](Self::plus).
    const ZERO: Self;
    /// Identity of [`mult`](Self::mult).
    const ONE: Self;

    /// Addition.
    #[must_use]
    fn plus(self, other: Self) -> Self;

    /// Multiplication.
    #[must_use]
    fn mult(self, other: Self) -> Self;

    /// The next value.
    #[must_use]
    fn succ(self) -> Self {
        self.plus(Self::ONE)
    }
}

macro_rules! integer_instances {
    ($($ty:ident),* $(,)?) => {
        paste! {
            $(
                impl DataType for $ty {
                    const TAG: Tag = Tag::new(stringify!($ty));
                }

                impl Number for $ty {
                    const ZERO: Self = 0;
                    const ONE: Self = 1;

                    #[inline]
                    fn plus(self, other: Self) -> Self {
                        self.wrapping_add(other)
                    }

                    #[inline]
                    fn mult(self, other: Self) -> Self {
                        self.wrapping_mul(other)
                    }
                }

                #[doc = "Installs the `" $ty "` instance."]
                #[must_use]
                pub fn [<install_ $ty>](builder: RegistryBuilder) -> RegistryBuilder {
                    install_number::<$ty>(builder)
                }
            )*
        }
    };
}

integer_instances!(i32, i64, u32, u64, usize);

impl DataType for f64 {
    const TAG: Tag = Tag::new("f64");
}

impl Number for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn plus(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn mult(self, other: Self) -> Self {
        self * other
    }
}

/// Installs the `f64` instance.
#[must_use]
pub fn install_f64(builder: RegistryBuilder) -> RegistryBuilder {
    install_number::<f64>(builder)
}

/// Installs every numeric instance except `usize`, which is part of the
/// prelude.
#[must_use]
pub fn numeric(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .with(install_i32)
        .with(install_i64)
        .with(install_u32)
        .with(install_u64)
        .with(install_f64)
}

/// Registers the operations of a [`Number`].
#[must_use]
pub fn install_number<T: Number>(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .data_type::<T>()
        .define(Operation::Zero, T::TAG, |_, _| Ok(Value::new(T::ZERO)))
        .define(Operation::One, T::TAG, |_, _| Ok(Value::new(T::ONE)))
        .define(Operation::Plus, T::TAG, arithmetic::<T>(T::plus))
        .define(Operation::Mult, T::TAG, arithmetic::<T>(T::mult))
        .define(Operation::Less, T::TAG, comparison::<T>(|left, right| left < right))
        .define(Operation::Equal, T::TAG, comparison::<T>(|left, right| left == right))
        .define(Operation::Succ, T::TAG, |_, call: Call| {
            let [value] = call.into_arguments()?;
            Ok(Value::new(value.cloned::<T>()?.succ()))
        })
}

fn arithmetic<T: Number>(
    operator: fn(T, T) -> T,
) -> impl Fn(&Context, Call) -> Result<Value> + Send + Sync + 'static {
    move |_, call| {
        let [left, right] = call.into_arguments()?;
        Ok(Value::new(operator(left.cloned::<T>()?, right.cloned::<T>()?)))
    }
}

fn comparison<T: Number>(
    relation: fn(&T, &T) -> bool,
) -> impl Fn(&Context, Call) -> Result<Value> + Send + Sync + 'static {
    move |_, call| {
        let [left, right] = call.into_arguments()?;
        Ok(Value::new(relation(left.get::<T>()?, right.get::<T>()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Registry, Typeclass};
    use crate::typeclass::{EnumerableOps, MonoidOps, RingOps};
    use rstest::rstest;

    #[rstest]
    #[case(i32::TAG)]
    #[case(i64::TAG)]
    #[case(u32::TAG)]
    #[case(u64::TAG)]
    #[case(usize::TAG)]
    #[case(f64::TAG)]
    fn numbers_model_every_arithmetic_class(#[case] tag: Tag) {
        let registry = Registry::standard().unwrap();
        for typeclass in [
            Typeclass::Monoid,
            Typeclass::Ring,
            Typeclass::Orderable,
            Typeclass::Comparable,
            Typeclass::Enumerable,
        ] {
            assert!(registry.models(typeclass, tag), "{tag} should model {typeclass}");
        }
        assert!(!registry.models(Typeclass::Foldable, tag));
    }

    #[rstest]
    fn integer_arithmetic_wraps() {
        let registry = Registry::standard().unwrap();
        let sum = registry.plus(Value::new(u32::MAX), Value::new(1_u32)).unwrap();
        assert_eq!(sum.cloned::<u32>().unwrap(), 0);
        let next = registry.succ(Value::new(i32::MAX)).unwrap();
        assert_eq!(next.cloned::<i32>().unwrap(), i32::MIN);
    }

    #[rstest]
    fn float_identities() {
        let registry = Registry::standard().unwrap();
        let zero = registry.zero(f64::TAG).unwrap();
        let one = registry.one(f64::TAG).unwrap();
        let product = registry.mult(one, Value::new(2.5_f64)).unwrap();
        let sum = registry.plus(zero, product).unwrap();
        assert!((sum.cloned::<f64>().unwrap() - 2.5).abs() < f64::EPSILON);
    }
}
