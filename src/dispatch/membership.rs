//! The membership closure: which tags supply which operations and model
//! which type classes.
//!
//! Membership is computed once, when a registry is built, as a least
//! fixpoint. A user descriptor counts as *supplied* for a tag when it covers
//! the tag and its guard holds; guards may require the tag to model a type
//! class, so supplying one operation can make further descriptors applicable.
//! All requirements are positive, which makes the iteration monotone and
//! guarantees termination.

use rustc_hash::FxHashSet;
use tracing::trace;

use super::class::Typeclass;
use super::descriptor::{Descriptor, Origin};
use super::error::{Error, Result};
use super::operation::Operation;
use super::tag::Tag;

/// Memoized answers to "does `tag` supply `operation`" and "does `tag` model
/// `typeclass`".
#[derive(Debug, Clone, Default)]
pub struct Membership {
    supplied: FxHashSet<(Operation, Tag)>,
    models: FxHashSet<(Typeclass, Tag)>,
}

impl Membership {
    /// Computes the closure for `tags` over the registered `descriptors`.
    #[must_use]
    pub fn compute(tags: &[Tag], descriptors: &[Descriptor]) -> Self {
        let mut membership = Self::default();
        let user_descriptors: Vec<&Descriptor> = descriptors
            .iter()
            .filter(|descriptor| descriptor.origin() == Origin::User)
            .collect();

        let mut iteration = 0_usize;
        loop {
            iteration += 1;
            let mut supplied = Vec::new();
            for &tag in tags {
                for descriptor in &user_descriptors {
                    let key = (descriptor.operation(), tag);
                    if !membership.supplied.contains(&key)
                        && descriptor.target().covers(tag)
                        && descriptor
                            .guard()
                            .evaluate(tag, |typeclass, tag| membership.models(typeclass, tag))
                    {
                        supplied.push(key);
                    }
                }
            }
            let mut changed = !supplied.is_empty();
            membership.supplied.extend(supplied);

            for &tag in tags {
                for typeclass in Typeclass::ALL {
                    if !membership.models(typeclass, tag) && membership.satisfies(typeclass, tag) {
                        membership.models.insert((typeclass, tag));
                        changed = true;
                    }
                }
            }

            trace!(
                iteration,
                supplied = membership.supplied.len(),
                models = membership.models.len(),
                "membership fixpoint iteration"
            );
            if !changed {
                break;
            }
        }
        membership
    }

    /// Returns `true` if `tag` supplies a user definition of `operation`.
    #[must_use]
    pub fn is_supplied(&self, operation: Operation, tag: Tag) -> bool {
        self.supplied.contains(&(operation, tag))
    }

    /// Returns `true` if `tag` models `typeclass`.
    #[must_use]
    pub fn models(&self, typeclass: Typeclass, tag: Tag) -> bool {
        self.models.contains(&(typeclass, tag))
    }

    fn satisfies(&self, typeclass: Typeclass, tag: Tag) -> bool {
        let has_basis = typeclass.minimal_definitions().iter().any(|basis| {
            basis
                .iter()
                .all(|operation| self.is_supplied(*operation, tag))
        });
        has_basis
            && typeclass
                .superclasses()
                .iter()
                .all(|superclass| self.models(*superclass, tag))
    }

    /// Rejects tags that supply part of a type class without modelling it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteDefinition`] for the first offending
    /// (tag, type class) pair, in tag order.
    pub fn validate(&self, tags: &[Tag]) -> Result<()> {
        for &tag in tags {
            for typeclass in Typeclass::ALL {
                let partially_defined = typeclass
                    .operations()
                    .any(|operation| self.is_supplied(operation, tag));
                if partially_defined && !self.models(typeclass, tag) {
                    return Err(Error::IncompleteDefinition {
                        tag,
                        typeclass,
                        expected: typeclass.describe_minimal_definitions(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{Guard, Target, Value};
    use rstest::rstest;

    fn user(operation: Operation, tag: Tag) -> Descriptor {
        Descriptor::new(operation, Target::Tag(tag), |_, _| Ok(Value::unit()))
    }

    const LIST: Tag = Tag::new("list");
    const TUPLE: Tag = Tag::new("tuple");

    #[rstest]
    fn either_basis_makes_a_tag_foldable() {
        let descriptors = vec![user(Operation::FoldLeft, LIST), user(Operation::Unpack, TUPLE)];
        let membership = Membership::compute(&[LIST, TUPLE], &descriptors);

        assert!(membership.models(Typeclass::Foldable, LIST));
        assert!(membership.models(Typeclass::Foldable, TUPLE));
        assert!(membership.is_supplied(Operation::FoldLeft, LIST));
        assert!(!membership.is_supplied(Operation::Unpack, LIST));
    }

    #[rstest]
    fn default_descriptors_do_not_count() {
        let descriptors = vec![user(Operation::FoldLeft, LIST).as_default()];
        let membership = Membership::compute(&[LIST], &descriptors);
        assert!(!membership.models(Typeclass::Foldable, LIST));
    }

    #[rstest]
    fn superclasses_are_required() {
        let descriptors = vec![user(Operation::Make, LIST)];
        let membership = Membership::compute(&[LIST], &descriptors);
        assert!(!membership.models(Typeclass::Sequence, LIST));

        let descriptors = vec![user(Operation::Make, LIST), user(Operation::FoldLeft, LIST)];
        let membership = Membership::compute(&[LIST], &descriptors);
        assert!(membership.models(Typeclass::Sequence, LIST));
    }

    #[rstest]
    fn guarded_universal_descriptors_reach_a_fixpoint() {
        // `succ` only applies once `unpack` has made the tag Foldable.
        let descriptors = vec![
            user(Operation::Unpack, TUPLE),
            Descriptor::new(Operation::Succ, Target::Any, |_, _| Ok(Value::unit()))
                .guarded(Guard::models(Typeclass::Foldable)),
        ];
        let membership = Membership::compute(&[LIST, TUPLE], &descriptors);

        assert!(membership.models(Typeclass::Enumerable, TUPLE));
        assert!(!membership.models(Typeclass::Enumerable, LIST));
    }

    #[rstest]
    fn validate_rejects_partial_definitions() {
        let descriptors = vec![user(Operation::Lift, LIST)];
        let membership = Membership::compute(&[LIST], &descriptors);

        assert_eq!(
            membership.validate(&[LIST]).unwrap_err(),
            Error::IncompleteDefinition {
                tag: LIST,
                typeclass: Typeclass::Monad,
                expected: "{lift, chain}".to_owned(),
            }
        );
    }

    #[rstest]
    fn validate_rejects_derived_operations_without_a_basis() {
        let descriptors = vec![user(Operation::Length, LIST)];
        let membership = Membership::compute(&[LIST], &descriptors);
        assert!(matches!(
            membership.validate(&[LIST]),
            Err(Error::IncompleteDefinition {
                typeclass: Typeclass::Foldable,
                ..
            })
        ));
    }
}
