//! The catalogue of dispatchable operations.

use std::fmt;

use super::class::Typeclass;

/// An abstract operation that descriptors implement per data type.
///
/// Every operation belongs to exactly one [`Typeclass`]. Most operations are
/// dispatched on the tag of their first argument; the "constructors"
/// ([`Zero`](Self::Zero), [`One`](Self::One), [`Lift`](Self::Lift),
/// [`Make`](Self::Make)) are dispatched on an explicit data type parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Operation {
    /// `fold_left(xs, state, f)` or `fold_left(xs, f)`.
    FoldLeft,
    /// `fold_right(xs, state, f)` or `fold_right(xs, f)`.
    FoldRight,
    /// `unpack(xs, f)`: calls `f` with the elements of `xs` as arguments.
    Unpack,
    /// `monadic_fold_left<M>(xs, state, f)` or `monadic_fold_left<M>(xs, f)`.
    MonadicFoldLeft,
    /// `monadic_fold_right<M>(xs, state, f)` or `monadic_fold_right<M>(xs, f)`.
    MonadicFoldRight,
    /// `for_each(xs, f)`.
    ForEach,
    /// `length(xs)`.
    Length,
    /// `minimum(xs)` or `minimum(xs, predicate)`.
    Minimum,
    /// `maximum(xs)` or `maximum(xs, predicate)`.
    Maximum,
    /// `sum<M>(xs)`.
    Sum,
    /// `product<R>(xs)`.
    Product,
    /// `count_if(xs, predicate)`.
    CountIf,
    /// `count(xs, value)`.
    Count,
    /// `lift<M>(x)`.
    Lift,
    /// `chain(m, f)`.
    Chain,
    /// `zero<M>()`.
    Zero,
    /// `plus(x, y)`.
    Plus,
    /// `one<R>()`.
    One,
    /// `mult(x, y)`.
    Mult,
    /// `less(x, y)`.
    Less,
    /// `equal(x, y)`.
    Equal,
    /// `succ(x)`.
    Succ,
    /// `make<S>(xs...)`.
    Make,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::FoldLeft,
        Self::FoldRight,
        Self::Unpack,
        Self::MonadicFoldLeft,
        Self::MonadicFoldRight,
        Self::ForEach,
        Self::Length,
        Self::Minimum,
        Self::Maximum,
        Self::Sum,
        Self::Product,
        Self::CountIf,
        Self::Count,
        Self::Lift,
        Self::Chain,
        Self::Zero,
        Self::Plus,
        Self::One,
        Self::Mult,
        Self::Less,
        Self::Equal,
        Self::Succ,
        Self::Make,
    ];

    /// The conventional snake-case name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FoldLeft => "fold_left",
            Self::FoldRight => "fold_right",
            Self::Unpack => "unpack",
            Self::MonadicFoldLeft => "monadic_fold_left",
            Self::MonadicFoldRight => "monadic_fold_right",
            Self::ForEach => "for_each",
            Self::Length => "length",
            Self::Minimum => "minimum",
            Self::Maximum => "maximum",
            Self::Sum => "sum",
            Self::Product => "product",
            Self::CountIf => "count_if",
            Self::Count => "count",
            Self::Lift => "lift",
            Self::Chain => "chain",
            Self::Zero => "zero",
            Self::Plus => "plus",
            Self::One => "one",
            Self::Mult => "mult",
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Succ => "succ",
            Self::Make => "make",
        }
    }

    /// The type class the operation belongs to.
    #[must_use]
    pub const fn typeclass(self) -> Typeclass {
        match self {
            Self::FoldLeft
            | Self::FoldRight
            | Self::Unpack
            | Self::MonadicFoldLeft
            | Self::MonadicFoldRight
            | Self::ForEach
            | Self::Length
            | Self::Minimum
            | Self::Maximum
            | Self::Sum
            | Self::Product
            | Self::CountIf
            | Self::Count => Typeclass::Foldable,
            Self::Lift | Self::Chain => Typeclass::Monad,
            Self::Zero | Self::Plus => Typeclass::Monoid,
            Self::One | Self::Mult => Typeclass::Ring,
            Self::Less => Typeclass::Orderable,
            Self::Equal => Typeclass::Comparable,
            Self::Succ => Typeclass::Enumerable,
            Self::Make => Typeclass::Sequence,
        }
    }

    /// Returns `true` if the operation accepts `count` positional arguments.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::FoldLeft
            | Self::FoldRight
            | Self::MonadicFoldLeft
            | Self::MonadicFoldRight => matches!(count, 2 | 3),
            Self::Minimum | Self::Maximum => matches!(count, 1 | 2),
            Self::Length | Self::Sum | Self::Product | Self::Lift | Self::Succ => count == 1,
            Self::Unpack
            | Self::ForEach
            | Self::CountIf
            | Self::Count
            | Self::Chain
            | Self::Plus
            | Self::Mult
            | Self::Less
            | Self::Equal => count == 2,
            Self::Zero | Self::One => count == 0,
            Self::Make => true,
        }
    }

    /// Returns `true` if the operation needs an explicit data type parameter.
    #[must_use]
    pub const fn requires_parameter(self) -> bool {
        matches!(
            self,
            Self::MonadicFoldLeft
                | Self::MonadicFoldRight
                | Self::Sum
                | Self::Product
                | Self::Lift
                | Self::Zero
                | Self::One
                | Self::Make
        )
    }

    /// Returns `true` if the operation is resolved on its parameter rather
    /// than on the tag of its first argument.
    #[must_use]
    pub const fn keyed_by_parameter(self) -> bool {
        matches!(self, Self::Lift | Self::Zero | Self::One | Self::Make)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
