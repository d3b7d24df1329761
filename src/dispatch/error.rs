//! Error type for resolution and generic algorithms.
//!
//! Registration-level violations (ambiguous descriptors, incomplete minimal
//! definitions, conflicting tags) are reported by
//! [`RegistryBuilder::build`](super::RegistryBuilder::build). Call-level
//! violations (non-conforming tags, empty stateless folds, arity mismatches)
//! are reported by the algorithm call that triggered them and never affect
//! other calls.

use thiserror::Error;

use super::class::Typeclass;
use super::operation::Operation;
use super::tag::Tag;

/// Errors produced while building a registry or running a generic algorithm.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::{Error, Operation, Tag, Typeclass};
///
/// let error = Error::NotConforming {
///     operation: Operation::FoldLeft,
///     tag: Tag::new("celsius"),
///     typeclass: Typeclass::Foldable,
/// };
/// assert_eq!(
///     error.to_string(),
///     "fold_left is not available for data type `celsius`: it does not model Foldable"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation was invoked for a tag that supplies neither the operation
    /// nor a primitive it can be derived from.
    #[error("{operation} is not available for data type `{tag}`: it does not model {typeclass}")]
    NotConforming {
        /// The invoked operation.
        operation: Operation,
        /// The tag the operation was resolved for.
        tag: Tag,
        /// The type class the operation belongs to.
        typeclass: Typeclass,
    },

    /// A precondition of a generic algorithm does not hold.
    #[error("{0}")]
    ContractViolation(&'static str),

    /// More than one equally specific descriptor applies.
    #[error("ambiguous specialization of {operation} for data type `{tag}`: {candidates} equally specific descriptors apply")]
    Ambiguous {
        /// The operation being resolved.
        operation: Operation,
        /// The tag being resolved.
        tag: Tag,
        /// The number of maximal candidates.
        candidates: usize,
    },

    /// A tag supplies operations of a type class without a complete minimal
    /// definition.
    #[error("data type `{tag}` defines {typeclass} operations but no minimal definition: {expected}")]
    IncompleteDefinition {
        /// The offending tag.
        tag: Tag,
        /// The type class that is only partially defined.
        typeclass: Typeclass,
        /// Human-readable list of the accepted minimal definitions.
        expected: String,
    },

    /// A Rust type was associated with two different tags.
    #[error("type `{type_name}` is associated with both `{first}` and `{second}`")]
    ConflictingTag {
        /// The Rust type name.
        type_name: &'static str,
        /// The tag registered first.
        first: Tag,
        /// The conflicting tag.
        second: Tag,
    },

    /// An operation was dispatched with an unsupported number of arguments.
    #[error("{operation} does not accept {found} argument(s)")]
    InvalidArguments {
        /// The dispatched operation.
        operation: Operation,
        /// The number of arguments supplied.
        found: usize,
    },

    /// A function was called with the wrong number of arguments.
    #[error("{callee} expects {expected} argument(s), got {found}")]
    Arity {
        /// Name of the called function.
        callee: &'static str,
        /// The expected argument count.
        expected: usize,
        /// The supplied argument count.
        found: usize,
    },

    /// A value was read as a Rust type it does not have.
    #[error("expected a value of type `{expected}`, found `{found}`")]
    TypeMismatch {
        /// The requested Rust type.
        expected: &'static str,
        /// The actual Rust type of the value.
        found: &'static str,
    },

    /// A parameterised operation was invoked without its data type parameter.
    #[error("{operation} requires an explicit data type parameter")]
    MissingParameter {
        /// The invoked operation.
        operation: Operation,
    },

    /// No conversion rule applies between the two data types.
    #[error("no conversion from `{from}` to `{to}`")]
    NoConversion {
        /// The source tag.
        from: Tag,
        /// The target tag.
        to: Tag,
    },

    /// Nested dispatch exceeded the configured depth.
    #[error("resolution depth limit of {limit} exceeded")]
    RecursionLimit {
        /// The configured limit.
        limit: usize,
    },

    /// A positional spread exceeded the configured argument limit.
    #[error("spreading {found} arguments exceeds the limit of {limit}")]
    TooManyArguments {
        /// The configured limit.
        limit: usize,
        /// The number of arguments that were about to be spread.
        found: usize,
    },

    /// A user-supplied implementation failed.
    #[error("{0}")]
    Custom(String),
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
