//! Type classes and their minimal definitions.

use std::fmt;

use super::operation::Operation;

/// A named contract of operations that a data type may conform to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Typeclass {
    /// Structures that can be folded into a summary value.
    Foldable,
    /// Computational contexts supporting `lift` and `chain`.
    Monad,
    /// Types with an associative `plus` and its identity `zero`.
    Monoid,
    /// Monoids with an associative `mult` and its identity `one`.
    Ring,
    /// Types with a strict ordering `less`.
    Orderable,
    /// Types with an equality `equal`.
    Comparable,
    /// Types with a successor `succ`.
    Enumerable,
    /// Foldable structures that can be built from their elements with `make`.
    Sequence,
}

impl Typeclass {
    /// Every type class, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Foldable,
        Self::Monad,
        Self::Monoid,
        Self::Ring,
        Self::Orderable,
        Self::Comparable,
        Self::Enumerable,
        Self::Sequence,
    ];

    /// The name of the type class.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Foldable => "Foldable",
            Self::Monad => "Monad",
            Self::Monoid => "Monoid",
            Self::Ring => "Ring",
            Self::Orderable => "Orderable",
            Self::Comparable => "Comparable",
            Self::Enumerable => "Enumerable",
            Self::Sequence => "Sequence",
        }
    }

    /// The alternative minimal definitions of the type class.
    ///
    /// A data type supplying every operation of at least one basis (and
    /// modelling every superclass) models the type class; all remaining
    /// operations are derived.
    #[must_use]
    pub const fn minimal_definitions(self) -> &'static [&'static [Operation]] {
        match self {
            Self::Foldable => &[&[Operation::FoldLeft], &[Operation::Unpack]],
            Self::Monad => &[&[Operation::Lift, Operation::Chain]],
            Self::Monoid => &[&[Operation::Zero, Operation::Plus]],
            Self::Ring => &[&[Operation::One, Operation::Mult]],
            Self::Orderable => &[&[Operation::Less]],
            Self::Comparable => &[&[Operation::Equal]],
            Self::Enumerable => &[&[Operation::Succ]],
            Self::Sequence => &[&[Operation::Make]],
        }
    }

    /// The type classes a model of this type class must also model.
    #[must_use]
    pub const fn superclasses(self) -> &'static [Self] {
        match self {
            Self::Ring => &[Self::Monoid],
            Self::Sequence => &[Self::Foldable],
            _ => &[],
        }
    }

    /// The operations belonging to this type class.
    pub fn operations(self) -> impl Iterator<Item = Operation> {
        Operation::ALL
            .into_iter()
            .filter(move |operation| operation.typeclass() == self)
    }

    /// Renders the minimal definitions, e.g. `{fold_left} or {unpack}`.
    #[must_use]
    pub fn describe_minimal_definitions(self) -> String {
        self.minimal_definitions()
            .iter()
            .map(|basis| {
                let names: Vec<&str> = basis.iter().map(|operation| operation.name()).collect();
                format!("{{{}}}", names.join(", "))
            })
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl fmt::Display for Typeclass {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
