//! Operation descriptors: registered implementations of one operation.
//!
//! A [`Descriptor`] couples an [`Operation`] with the data types it applies
//! to ([`Target`]), the condition under which it applies ([`Guard`]), whether
//! it is a user definition or a fallback ([`Origin`]) and the implementation
//! itself.
//!
//! # Guards and specificity
//!
//! A guard is a conjunction of [`Requirement`]s. Guard `A` *refines* guard
//! `B` when `A`'s requirements are a strict superset of `B`'s; a refining
//! guard is more specific and wins resolution. The unconditional guard is the
//! least specific one.
//!
//! ```rust
//! use tagclass::dispatch::{Guard, Typeclass};
//!
//! let foldable = Guard::models(Typeclass::Foldable);
//! let foldable_sequence = foldable.clone().and(Guard::models(Typeclass::Sequence));
//!
//! assert!(foldable_sequence.refines(&foldable));
//! assert!(foldable.refines(&Guard::always()));
//! assert!(!foldable.refines(&foldable));
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::class::Typeclass;
use super::context::Context;
use super::error::{Error, Result};
use super::function::{Arguments, spread};
use super::operation::Operation;
use super::tag::Tag;
use super::value::Value;

/// The implementation of a descriptor.
pub type Implementation = Arc<dyn Fn(&Context, Call) -> Result<Value> + Send + Sync>;

/// A resolved invocation handed to an implementation.
#[derive(Debug, Clone)]
pub struct Call {
    /// The operation being invoked.
    pub operation: Operation,
    /// The tag the descriptor was selected for.
    pub tag: Tag,
    /// The explicit data type parameter (`M` in `sum<M>`), if any.
    pub parameter: Option<Tag>,
    /// The positional arguments.
    pub arguments: Arguments,
}

impl Call {
    /// Destructures exactly `N` arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Arity`] when the call has a different argument count.
    pub fn into_arguments<const N: usize>(self) -> Result<[Value; N]> {
        spread(self.operation.name(), self.arguments)
    }

    /// Returns the explicit data type parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] when the call has none.
    pub fn parameter(&self) -> Result<Tag> {
        self.parameter.ok_or(Error::MissingParameter {
            operation: self.operation,
        })
    }
}

/// Whether a descriptor is a user definition or a fallback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Origin {
    /// Supplied by a data type; counts towards its minimal definition.
    User,
    /// A fallback, typically derived from other operations.
    Default,
}

/// The data types a descriptor applies to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Target {
    /// Exactly one data type.
    Tag(Tag),
    /// Every data type whose tag satisfies the guard.
    Any,
}

impl Target {
    /// Returns `true` if the target covers `tag`.
    #[must_use]
    pub fn covers(self, tag: Tag) -> bool {
        match self {
            Self::Tag(target) => target == tag,
            Self::Any => true,
        }
    }
}

/// A named predicate over tags.
///
/// Conditions are identified by name: two conditions with the same name are
/// considered the same requirement when comparing guard specificity.
#[derive(Clone, Copy)]
pub struct Condition {
    name: &'static str,
    test: fn(Tag) -> bool,
}

impl Condition {
    /// Creates a named condition.
    #[must_use]
    pub const fn new(name: &'static str, test: fn(Tag) -> bool) -> Self {
        Self { name, test }
    }

    /// The name of the condition.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates the condition.
    #[must_use]
    pub fn holds(&self, tag: Tag) -> bool {
        (self.test)(tag)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Condition({})", self.name)
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Condition {}

impl PartialOrd for Condition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Condition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl Hash for Condition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// One conjunct of a guard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Requirement {
    /// The tag models the type class.
    Models(Typeclass),
    /// The condition holds for the tag.
    Holds(Condition),
}

/// A conjunction of requirements guarding a descriptor.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Guard {
    requirements: BTreeSet<Requirement>,
}

impl Guard {
    /// The unconditional guard.
    #[must_use]
    pub fn always() -> Self {
        Self::default()
    }

    /// A guard requiring the tag to model `typeclass`.
    #[must_use]
    pub fn models(typeclass: Typeclass) -> Self {
        Self::always().with(Requirement::Models(typeclass))
    }

    /// A guard requiring a named condition to hold.
    #[must_use]
    pub fn holds(name: &'static str, test: fn(Tag) -> bool) -> Self {
        Self::always().with(Requirement::Holds(Condition::new(name, test)))
    }

    /// Adds a requirement.
    #[must_use]
    pub fn with(mut self, requirement: Requirement) -> Self {
        self.requirements.insert(requirement);
        self
    }

    /// The conjunction of both guards.
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.requirements.extend(other.requirements);
        self
    }

    /// Returns `true` for the unconditional guard.
    #[must_use]
    pub fn is_unconditional(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Returns `true` if this guard is strictly more specific than `other`.
    #[must_use]
    pub fn refines(&self, other: &Self) -> bool {
        self.requirements.len() > other.requirements.len()
            && self.requirements.is_superset(&other.requirements)
    }

    /// The requirements of the guard, in a deterministic order.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter()
    }

    /// Evaluates the guard for `tag`, answering `Models` requirements with
    /// `models`.
    pub fn evaluate<M>(&self, tag: Tag, mut models: M) -> bool
    where
        M: FnMut(Typeclass, Tag) -> bool,
    {
        self.requirements.iter().all(|requirement| match requirement {
            Requirement::Models(typeclass) => models(*typeclass, tag),
            Requirement::Holds(condition) => condition.holds(tag),
        })
    }

    /// Returns `true` if the guard mentions a `Models` requirement.
    #[must_use]
    pub fn depends_on_membership(&self) -> bool {
        self.requirements
            .iter()
            .any(|requirement| matches!(requirement, Requirement::Models(_)))
    }
}

/// The registered implementation of one operation.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::{Descriptor, Operation, Origin, Tag, Target, Value};
///
/// let descriptor = Descriptor::new(Operation::Length, Target::Tag(Tag::new("pair")), |_, _| {
///     Ok(Value::new(2_usize))
/// });
/// assert_eq!(descriptor.origin(), Origin::User);
/// assert!(descriptor.as_default().is_default());
/// ```
#[derive(Clone)]
pub struct Descriptor {
    operation: Operation,
    target: Target,
    guard: Guard,
    origin: Origin,
    implementation: Implementation,
}

impl Descriptor {
    /// Creates an unconditional user descriptor.
    pub fn new<F>(operation: Operation, target: Target, implementation: F) -> Self
    where
        F: Fn(&Context, Call) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            operation,
            target,
            guard: Guard::always(),
            origin: Origin::User,
            implementation: Arc::new(implementation),
        }
    }

    /// Restricts the descriptor with a guard.
    #[must_use]
    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = guard;
        self
    }

    /// Marks the descriptor as a fallback.
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.origin = Origin::Default;
        self
    }

    /// The implemented operation.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// The data types the descriptor applies to.
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// The guard of the descriptor.
    #[must_use]
    pub const fn guard(&self) -> &Guard {
        &self.guard
    }

    /// Whether the descriptor is a user definition or a fallback.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns `true` for fallback descriptors.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.origin == Origin::Default
    }

    /// Runs the implementation.
    ///
    /// # Errors
    ///
    /// Propagates the implementation's error.
    pub fn apply(&self, context: &Context, call: Call) -> Result<Value> {
        (self.implementation)(context, call)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Descriptor")
            .field("operation", &self.operation)
            .field("target", &self.target)
            .field("guard", &self.guard)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
