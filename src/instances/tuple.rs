//! Heterogeneous tuples.
//!
//! A [`Tuple`] holds values of arbitrary, possibly different, Rust types. It
//! supplies `unpack`, which spreads its elements positionally, and `make`;
//! every fold is derived from `unpack`.

use crate::dispatch::{DataType, Dispatch, Operation, RegistryBuilder, Tag, Value};

/// A fixed sequence of dynamically typed values.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::{Function, Registry, Value};
/// use tagclass::tuple;
/// use tagclass::typeclass::FoldableOps;
///
/// let registry = Registry::standard().unwrap();
/// let describe = Function::new("describe", |arguments| {
///     let name = arguments[0].cloned::<&'static str>()?;
///     let age = arguments[1].cloned::<u32>()?;
///     Ok(Value::new(format!("{name} is {age}")))
/// });
///
/// let person = tuple!["Ada", 36_u32];
/// let text = registry.unpack(Value::new(person), &describe).unwrap();
/// assert_eq!(text.cloned::<String>().unwrap(), "Ada is 36");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tuple(Vec<Value>);

impl Tuple {
    /// Creates a tuple from its elements.
    #[must_use]
    pub const fn new(elements: Vec<Value>) -> Self {
        Self(elements)
    }

    /// The elements, in order.
    #[must_use]
    pub fn elements(&self) -> &[Value] {
        &self.0
    }

    /// The element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// The number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the empty tuple.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the tuple, returning its elements.
    #[must_use]
    pub fn into_elements(self) -> Vec<Value> {
        self.0
    }
}

impl DataType for Tuple {
    const TAG: Tag = Tag::new("tuple");
}

/// Builds a [`Tuple`] from expressions of any `Send + Sync + 'static` type.
///
/// ```rust
/// use tagclass::tuple;
///
/// let triple = tuple![1_i64, "two", 3.0_f64];
/// assert_eq!(triple.len(), 3);
/// assert!(triple.get(1).unwrap().is::<&str>());
/// ```
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::instances::Tuple::default()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::instances::Tuple::new(vec![$($crate::dispatch::Value::new($element)),+])
    };
}

/// Installs the `Tuple` instance.
#[must_use]
pub fn install_tuple(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .data_type::<Tuple>()
        .define(Operation::Unpack, Tuple::TAG, |context, call| {
            let [tuple, f] = call.into_arguments()?;
            let elements = tuple.get::<Tuple>()?.elements().to_vec();
            context.call(&f.function()?, elements)
        })
        .define(Operation::Make, Tuple::TAG, |_, call| {
            Ok(Value::new(Tuple::new(call.arguments)))
        })
        .define(Operation::Equal, Tuple::TAG, |context, call| {
            let [left, right] = call.into_arguments()?;
            let (left, right) = (left.get::<Tuple>()?, right.get::<Tuple>()?);
            if left.len() != right.len() {
                return Ok(Value::new(false));
            }
            for (first, second) in left.elements().iter().zip(right.elements()) {
                let equal = context
                    .dispatch(Operation::Equal, None, vec![first.clone(), second.clone()])?
                    .truth()?;
                if !equal {
                    return Ok(Value::new(false));
                }
            }
            Ok(Value::new(true))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Function, Registry, Typeclass};
    use crate::typeclass::{ComparableOps, FoldableOps, SequenceOps};
    use rstest::{fixture, rstest};

    #[fixture]
    fn registry() -> Registry {
        Registry::standard().unwrap()
    }

    #[rstest]
    fn tuple_is_a_sequence(registry: Registry) {
        assert!(registry.models(Typeclass::Foldable, Tuple::TAG));
        assert!(registry.models(Typeclass::Sequence, Tuple::TAG));
        assert!(!registry.is_default(Operation::Unpack, Tuple::TAG));
        assert!(registry.is_default(Operation::FoldLeft, Tuple::TAG));
    }

    #[rstest]
    fn unpack_spreads_heterogeneous_elements(registry: Registry) {
        let kinds = Function::new("kinds", |arguments| {
            Ok(Value::new(
                arguments
                    .iter()
                    .map(|argument| argument.type_name())
                    .collect::<Vec<_>>(),
            ))
        });
        let kinds = registry
            .unpack(Value::new(tuple![1_i32, true, "x"]), &kinds)
            .unwrap()
            .cloned::<Vec<&'static str>>()
            .unwrap();
        assert_eq!(kinds, vec!["i32", "bool", "&str"]);
    }

    #[rstest]
    fn unpack_into_make_rebuilds_the_tuple(registry: Registry) {
        let original = Value::new(tuple![1_i64, 2_i64]);
        let make = Function::new("make", {
            let registry = registry.clone();
            move |arguments| registry.make(Tuple::TAG, arguments)
        });
        let rebuilt = registry.unpack(original.clone(), &make).unwrap();
        assert!(registry.equal(original, rebuilt).unwrap());
    }

    #[rstest]
    #[case(tuple![1_i64, true], tuple![1_i64, true], true)]
    #[case(tuple![1_i64, true], tuple![1_i64, false], false)]
    #[case(tuple![1_i64], tuple![1_i64, 2_i64], false)]
    #[case(tuple![], tuple![], true)]
    fn equality_is_elementwise(
        registry: Registry,
        #[case] left: Tuple,
        #[case] right: Tuple,
        #[case] expected: bool,
    ) {
        assert_eq!(
            registry.equal(Value::new(left), Value::new(right)).unwrap(),
            expected
        );
    }
}
