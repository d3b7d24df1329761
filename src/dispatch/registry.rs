//! The customization-point registry.
//!
//! A [`RegistryBuilder`] collects tag associations and descriptors. Building
//! it computes the membership closure, validates every registration and
//! resolves the descriptor of every (operation, tag) pair once. The resulting
//! [`Registry`] is immutable and cheap to clone.
//!
//! # Resolution order
//!
//! For an operation and a tag, candidates are the descriptors implementing
//! the operation whose target covers the tag and whose guard holds. They are
//! considered in tiers:
//!
//! 1. exact-tag descriptors;
//! 2. universal user descriptors;
//! 3. universal default descriptors (the derived defaults).
//!
//! Inside the first non-empty tier the most specific guard wins. If the most
//! specific candidates are not unique, the registry refuses to build with
//! [`Error::Ambiguous`]: ties are never broken by registration order.
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{Operation, Registry, Tag, Typeclass, Value};
//!
//! const PAIR: Tag = Tag::new("pair");
//!
//! #[derive(Clone)]
//! struct Pair(i64, i64);
//!
//! let registry = Registry::builder()
//!     .associate::<Pair>(PAIR)
//!     .define(Operation::Unpack, PAIR, |context, call| {
//!         let [pair, function] = call.into_arguments()?;
//!         let Pair(first, second) = pair.cloned::<Pair>()?;
//!         context.call(&function.function()?, vec![Value::new(first), Value::new(second)])
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert!(registry.models(Typeclass::Foldable, PAIR));
//! assert!(!registry.is_default(Operation::Unpack, PAIR));
//! assert!(registry.is_default(Operation::FoldLeft, PAIR));
//! ```

use std::any::Any;
use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::class::Typeclass;
use super::config::ResolutionConfig;
use super::context::Context;
use super::descriptor::{Call, Descriptor, Origin, Target};
use super::error::{Error, Result};
use super::membership::Membership;
use super::operation::Operation;
use super::tag::{DataType, Tag, TagResolver};
use super::value::Value;
use crate::instances;
use crate::typeclass::{foldable, monadic_fold};

/// Collects associations and descriptors before resolution.
#[derive(Debug)]
pub struct RegistryBuilder {
    resolver: TagResolver,
    tags: BTreeSet<Tag>,
    descriptors: Vec<Descriptor>,
    config: ResolutionConfig,
    errors: Vec<Error>,
}

impl RegistryBuilder {
    /// Creates a builder holding the derived defaults of every generic
    /// algorithm and the prelude instances (unit, `bool`, `usize` and
    /// functions).
    #[must_use]
    pub fn new() -> Self {
        Self::bare()
            .descriptors(foldable::defaults())
            .descriptors(monadic_fold::defaults())
            .with(instances::prelude)
    }

    /// Creates a builder without any descriptor or association.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            resolver: TagResolver::new(),
            tags: BTreeSet::new(),
            descriptors: Vec::new(),
            config: ResolutionConfig::default(),
            errors: Vec::new(),
        }
    }

    /// Sets the resource limits of the registry.
    #[must_use]
    pub const fn config(mut self, config: ResolutionConfig) -> Self {
        self.config = config;
        self
    }

    /// Associates `T` with its declared tag.
    #[must_use]
    pub fn data_type<T: DataType>(self) -> Self {
        self.associate::<T>(T::TAG)
    }

    /// Associates `T` with `tag`.
    ///
    /// A conflicting association is reported by [`build`](Self::build).
    #[must_use]
    pub fn associate<T: Any>(mut self, tag: Tag) -> Self {
        if let Err(error) = self.resolver.associate::<T>(tag) {
            self.errors.push(error);
        }
        self.tags.insert(tag);
        self
    }

    /// Registers a descriptor.
    #[must_use]
    pub fn descriptor(mut self, descriptor: Descriptor) -> Self {
        if let Target::Tag(tag) = descriptor.target() {
            self.tags.insert(tag);
        }
        self.descriptors.push(descriptor);
        self
    }

    /// Registers several descriptors.
    #[must_use]
    pub fn descriptors<I>(self, descriptors: I) -> Self
    where
        I: IntoIterator<Item = Descriptor>,
    {
        descriptors.into_iter().fold(self, Self::descriptor)
    }

    /// Registers an unconditional user definition of `operation` for `tag`.
    #[must_use]
    pub fn define<F>(self, operation: Operation, tag: Tag, implementation: F) -> Self
    where
        F: Fn(&Context, Call) -> Result<Value> + Send + Sync + 'static,
    {
        self.descriptor(Descriptor::new(operation, Target::Tag(tag), implementation))
    }

    /// Applies a registration function, typically an instance installer.
    #[must_use]
    pub fn with<F>(self, install: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        install(self)
    }

    /// Resolves every (operation, tag) pair and freezes the registry.
    ///
    /// # Errors
    ///
    /// - [`Error::ConflictingTag`] if a type was associated with two tags;
    /// - [`Error::IncompleteDefinition`] if a tag supplies operations of a
    ///   type class without a complete minimal definition;
    /// - [`Error::Ambiguous`] if equally specific descriptors compete.
    #[tracing::instrument(level = "debug", skip_all, fields(tags = self.tags.len(), descriptors = self.descriptors.len()))]
    pub fn build(self) -> Result<Registry> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        let tags: Vec<Tag> = self.tags.into_iter().collect();
        let membership = Membership::compute(&tags, &self.descriptors);
        membership.validate(&tags)?;

        let mut table = FxHashMap::default();
        for &tag in &tags {
            for operation in Operation::ALL {
                if let Some(index) = select(operation, tag, &self.descriptors, &membership)? {
                    trace!(%operation, %tag, origin = ?self.descriptors[index].origin(), "resolved");
                    table.insert((operation, tag), index);
                }
            }
        }
        debug!(entries = table.len(), "registry built");

        Ok(Registry {
            inner: Arc::new(Inner {
                resolver: self.resolver,
                tags,
                descriptors: self.descriptors,
                table,
                membership,
                config: self.config,
            }),
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tier {
    Exact,
    Universal,
    Fallback,
}

impl Tier {
    const ORDER: [Self; 3] = [Self::Exact, Self::Universal, Self::Fallback];

    fn contains(self, descriptor: &Descriptor) -> bool {
        match (self, descriptor.target(), descriptor.origin()) {
            (Self::Exact, Target::Tag(_), _)
            | (Self::Universal, Target::Any, Origin::User)
            | (Self::Fallback, Target::Any, Origin::Default) => true,
            _ => false,
        }
    }
}

fn select(
    operation: Operation,
    tag: Tag,
    descriptors: &[Descriptor],
    membership: &Membership,
) -> Result<Option<usize>> {
    for tier in Tier::ORDER {
        let candidates: SmallVec<[(usize, &Descriptor); 4]> = descriptors
            .iter()
            .enumerate()
            .filter(|(_, descriptor)| {
                descriptor.operation() == operation
                    && tier.contains(descriptor)
                    && descriptor.target().covers(tag)
                    && descriptor
                        .guard()
                        .evaluate(tag, |typeclass, tag| membership.models(typeclass, tag))
            })
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let maximal: SmallVec<[usize; 4]> = candidates
            .iter()
            .filter(|(_, descriptor)| {
                !candidates
                    .iter()
                    .any(|(_, other)| other.guard().refines(descriptor.guard()))
            })
            .map(|(index, _)| *index)
            .collect();

        return match maximal.as_slice() {
            [index] => Ok(Some(*index)),
            _ => Err(Error::Ambiguous {
                operation,
                tag,
                candidates: maximal.len(),
            }),
        };
    }
    Ok(None)
}

#[derive(Debug)]
struct Inner {
    resolver: TagResolver,
    tags: Vec<Tag>,
    descriptors: Vec<Descriptor>,
    table: FxHashMap<(Operation, Tag), usize>,
    membership: Membership,
    config: ResolutionConfig,
}

/// An immutable, fully resolved registry.
///
/// Cloning a registry is cheap; clones share the same resolution table.
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<Inner>,
}

impl Registry {
    /// Starts a builder with the derived defaults and prelude instances.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Builds a registry with every reference instance of
    /// [`instances`](crate::instances) installed.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors
    /// [`RegistryBuilder::build`].
    pub fn standard() -> Result<Self> {
        Self::builder().with(instances::standard).build()
    }

    /// Returns the tag of a value, or [`Tag::NONE`].
    #[must_use]
    pub fn tag_of(&self, value: &Value) -> Tag {
        self.inner.resolver.resolve(value)
    }

    /// Returns the tag associated with `T`, or [`Tag::NONE`].
    #[must_use]
    pub fn tag_of_type<T: Any>(&self) -> Tag {
        self.inner.resolver.resolve_type::<T>()
    }

    /// Returns the descriptor selected for `operation` on `tag`.
    #[must_use]
    pub fn resolve(&self, operation: Operation, tag: Tag) -> Option<&Descriptor> {
        self.inner
            .table
            .get(&(operation, tag))
            .map(|index| &self.inner.descriptors[*index])
    }

    /// Returns `true` unless a user definition is selected for `operation`
    /// on `tag`.
    #[must_use]
    pub fn is_default(&self, operation: Operation, tag: Tag) -> bool {
        self.resolve(operation, tag)
            .is_none_or(Descriptor::is_default)
    }

    /// Returns `true` if `tag` models `typeclass`.
    #[must_use]
    pub fn models(&self, typeclass: Typeclass, tag: Tag) -> bool {
        self.inner.membership.models(typeclass, tag)
    }

    /// Every known tag, in name order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.inner.tags.iter().copied()
    }

    /// The resource limits of the registry.
    #[must_use]
    pub fn config(&self) -> &ResolutionConfig {
        &self.inner.config
    }

    /// A dispatch context at depth zero.
    #[must_use]
    pub fn context(&self) -> Context {
        Context::root(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Condition, Guard, Requirement};
    use crate::typeclass::FoldableOps;
    use rstest::rstest;

    const BOX: Tag = Tag::new("box");

    #[derive(Clone)]
    struct Boxed(i64);

    fn unpack_boxed(context: &Context, call: Call) -> Result<Value> {
        let [boxed, function] = call.into_arguments()?;
        let Boxed(inner) = boxed.cloned::<Boxed>()?;
        context.call(&function.function()?, vec![Value::new(inner)])
    }

    fn marker(name: &'static str) -> impl Fn(&Context, Call) -> Result<Value> + Send + Sync {
        move |_, _| Ok(Value::new(name))
    }

    fn is_box(tag: Tag) -> bool {
        tag == BOX
    }

    fn short(tag: Tag) -> bool {
        tag.name().len() <= 3
    }

    fn chosen(registry: &Registry, operation: Operation) -> &'static str {
        let descriptor = registry.resolve(operation, BOX).unwrap();
        let call = Call {
            operation,
            tag: BOX,
            parameter: None,
            arguments: Vec::new(),
        };
        descriptor
            .apply(&registry.context(), call)
            .unwrap()
            .cloned::<&'static str>()
            .unwrap()
    }

    #[rstest]
    fn exact_tag_descriptor_beats_universal_ones() {
        let registry = Registry::builder()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .define(Operation::Length, BOX, marker("exact"))
            .descriptor(
                Descriptor::new(Operation::Length, Target::Any, marker("universal"))
                    .guarded(Guard::models(Typeclass::Foldable)),
            )
            .build()
            .unwrap();

        assert_eq!(chosen(&registry, Operation::Length), "exact");
    }

    #[rstest]
    fn universal_user_descriptor_beats_the_derived_default() {
        let registry = Registry::builder()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .descriptor(
                Descriptor::new(Operation::Length, Target::Any, marker("universal"))
                    .guarded(Guard::models(Typeclass::Foldable)),
            )
            .build()
            .unwrap();

        assert_eq!(chosen(&registry, Operation::Length), "universal");
        assert!(!registry.is_default(Operation::Length, BOX));
    }

    #[rstest]
    fn most_specific_guard_wins() {
        let registry = Registry::builder()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("specific")).guarded(
                    Guard::models(Typeclass::Foldable)
                        .with(Requirement::Holds(Condition::new("is_box", is_box))),
                ),
            )
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("general"))
                    .guarded(Guard::models(Typeclass::Foldable)),
            )
            .build()
            .unwrap();

        assert_eq!(chosen(&registry, Operation::Length), "specific");
    }

    #[rstest]
    fn false_guards_are_skipped() {
        let registry = Registry::builder()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("monad only"))
                    .guarded(Guard::models(Typeclass::Monad)),
            )
            .build()
            .unwrap();

        assert!(registry.is_default(Operation::Length, BOX));
        assert_eq!(
            registry
                .length(Value::new(Boxed(3)))
                .unwrap(),
            1
        );
    }

    #[rstest]
    fn incomparable_guards_are_ambiguous() {
        let error = Registry::builder()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("a"))
                    .guarded(Guard::holds("is_box", is_box)),
            )
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("b"))
                    .guarded(Guard::holds("short", short)),
            )
            .build()
            .unwrap_err();

        assert_eq!(
            error,
            Error::Ambiguous {
                operation: Operation::Length,
                tag: BOX,
                candidates: 2,
            }
        );
    }

    #[rstest]
    fn duplicate_unconditional_definitions_are_ambiguous() {
        let error = Registry::builder()
            .define(Operation::Unpack, BOX, unpack_boxed)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .build()
            .unwrap_err();

        assert!(matches!(error, Error::Ambiguous { operation: Operation::Unpack, .. }));
    }

    #[rstest]
    fn conflicting_association_fails_the_build() {
        let error = Registry::builder()
            .associate::<Boxed>(BOX)
            .associate::<Boxed>(Tag::new("crate"))
            .build()
            .unwrap_err();

        assert!(matches!(error, Error::ConflictingTag { .. }));
    }

    #[rstest]
    fn registration_order_does_not_matter() {
        let forward = Registry::builder()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("specific"))
                    .guarded(Guard::models(Typeclass::Foldable)),
            )
            .define(Operation::Length, BOX, marker("general"))
            .build()
            .unwrap();
        let backward = Registry::builder()
            .define(Operation::Length, BOX, marker("general"))
            .descriptor(
                Descriptor::new(Operation::Length, Target::Tag(BOX), marker("specific"))
                    .guarded(Guard::models(Typeclass::Foldable)),
            )
            .define(Operation::Unpack, BOX, unpack_boxed)
            .associate::<Boxed>(BOX)
            .build()
            .unwrap();

        assert_eq!(chosen(&forward, Operation::Length), "specific");
        assert_eq!(chosen(&backward, Operation::Length), "specific");
        assert_eq!(forward.tags().collect::<Vec<_>>(), backward.tags().collect::<Vec<_>>());
    }

    #[rstest]
    fn bare_builder_has_no_defaults() {
        let registry = RegistryBuilder::bare()
            .associate::<Boxed>(BOX)
            .define(Operation::Unpack, BOX, unpack_boxed)
            .build()
            .unwrap();

        assert!(registry.resolve(Operation::FoldLeft, BOX).is_none());
        assert!(registry.is_default(Operation::FoldLeft, BOX));
        assert!(registry.models(Typeclass::Foldable, BOX));
    }

    #[rstest]
    fn unregistered_values_resolve_to_none() {
        let registry = Registry::builder().build().unwrap();
        assert_eq!(registry.tag_of(&Value::new(Boxed(1))), Tag::NONE);
        assert_eq!(registry.tag_of_type::<bool>(), Tag::new("bool"));
    }
}
