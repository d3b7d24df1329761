//! Sequence type class and automatic conversion between Foldables.
//!
//! A `Sequence` is a Foldable data type that can also be built from its
//! elements with `make<S>(x1, ..., xn)`. Any Foldable can then be converted
//! into any Sequence by unpacking it into `make`:
//!
//! ```text
//! to<S>(xs) = xs                        if tag(xs) == S
//!           = unpack(xs, make<S>)       if S models Sequence and xs is Foldable
//! ```
//!
//! A conversion is an *embedding* when the source is itself a Sequence, so
//! that no information beyond the element order is lost.
//!
//! # Laws
//!
//! ## Rebuilding
//!
//! ```text
//! unpack(xs, make<tag(xs)>) == xs
//! ```

use tracing::trace;

use crate::detail;
use crate::dispatch::{Arguments, Dispatch, Error, Operation, Result, Tag, Typeclass, Value};

/// Construction of and conversion into `Sequence` data types.
pub trait SequenceOps: Dispatch {
    /// Builds a value of `sequence` from `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConforming`] if `sequence` does not model
    /// Sequence.
    fn make(&self, sequence: Tag, elements: Arguments) -> Result<Value> {
        self.dispatch(Operation::Make, Some(sequence), elements)
    }

    /// Converts `xs` into the data type `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConversion`] if `xs` is neither of type `target`
    /// nor a Foldable convertible into the Sequence `target`.
    fn to(&self, target: Tag, xs: Value) -> Result<Value> {
        let registry = self.registry();
        let source = registry.tag_of(&xs);
        if source == target {
            return Ok(xs);
        }
        if !(registry.models(Typeclass::Sequence, target)
            && registry.models(Typeclass::Foldable, source))
        {
            return Err(Error::NoConversion {
                from: source,
                to: target,
            });
        }

        trace!(%source, %target, "converting through make");
        let context = self.enter()?;
        let make = detail::operation(&context, Operation::Make, Some(target));
        context.dispatch(Operation::Unpack, None, vec![xs, make.into_value()])
    }

    /// Whether converting from `from` to `to` keeps the structure intact.
    fn is_embedding(&self, from: Tag, to: Tag) -> bool {
        let registry = self.registry();
        from == to
            || (registry.models(Typeclass::Sequence, to)
                && registry.models(Typeclass::Sequence, from))
    }
}

impl<D: Dispatch + ?Sized> SequenceOps for D {}
