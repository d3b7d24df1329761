//! Data type tags and tag resolution.
//!
//! Every value handled by the registry belongs to exactly one *data type*,
//! identified by a [`Tag`]. Many Rust types may share a tag (all of them are
//! then dispatched to the same descriptors), but a Rust type never has more
//! than one tag.
//!
//! Types opt in either by implementing [`DataType`] or by being associated
//! explicitly while a registry is built. Types that never opted in resolve to
//! [`Tag::NONE`], which models no type class.
//!
//! # Examples
//!
//! ```rust
//! use tagclass::dispatch::{DataType, Tag};
//!
//! struct Celsius(f64);
//!
//! impl DataType for Celsius {
//!     const TAG: Tag = Tag::new("celsius");
//! }
//!
//! assert_eq!(Celsius::TAG.name(), "celsius");
//! assert!(!Celsius::TAG.is_none());
//! ```

use std::any::{Any, TypeId};
use std::collections::BTreeSet;
use std::fmt;

use rustc_hash::FxHashMap;

use super::error::{Error, Result};
use super::value::Value;

/// Identifier of a data type (a type class instance family).
///
/// Tags compare by name, so two tags created with the same name denote the
/// same data type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(&'static str);

impl Tag {
    /// The sentinel tag of values whose type was never associated with a tag.
    pub const NONE: Self = Self("<none>");

    /// Tag of [`Function`](super::Function) values.
    pub const FUNCTION: Self = Self("function");

    /// Tag of the unit value `()`.
    pub const UNIT: Self = Self("unit");

    /// Creates a tag with the given name.
    #[inline]
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the name of the tag.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }

    /// Returns `true` for the [`Tag::NONE`] sentinel.
    #[inline]
    #[must_use]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Tag({})", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

/// A Rust type that declares its data type tag.
///
/// Implementing this trait does not register anything by itself; the type is
/// picked up by [`RegistryBuilder::data_type`](super::RegistryBuilder::data_type).
pub trait DataType: Any + Send + Sync {
    /// The tag of every value of this type.
    const TAG: Tag;
}

impl DataType for () {
    const TAG: Tag = Tag::UNIT;
}

/// Maps Rust types to their tags.
#[derive(Debug, Clone, Default)]
pub struct TagResolver {
    tags: FxHashMap<TypeId, Tag>,
    type_names: FxHashMap<TypeId, &'static str>,
}

impl TagResolver {
    /// Creates an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `T` with `tag`.
    ///
    /// Associating a type twice with the same tag is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConflictingTag`] when `T` is already associated with a
    /// different tag.
    pub fn associate<T: Any>(&mut self, tag: Tag) -> Result<()> {
        let type_id = TypeId::of::<T>();
        match self.tags.get(&type_id) {
            Some(existing) if *existing != tag => Err(Error::ConflictingTag {
                type_name: std::any::type_name::<T>(),
                first: *existing,
                second: tag,
            }),
            Some(_) => Ok(()),
            None => {
                self.tags.insert(type_id, tag);
                self.type_names.insert(type_id, std::any::type_name::<T>());
                Ok(())
            }
        }
    }

    /// Returns the tag of a value, or [`Tag::NONE`] if its type never opted in.
    #[must_use]
    pub fn resolve(&self, value: &Value) -> Tag {
        self.resolve_id(value.value_type_id())
    }

    /// Returns the tag associated with `T`, or [`Tag::NONE`].
    #[must_use]
    pub fn resolve_type<T: Any>(&self) -> Tag {
        self.resolve_id(TypeId::of::<T>())
    }

    fn resolve_id(&self, type_id: TypeId) -> Tag {
        self.tags.get(&type_id).copied().unwrap_or(Tag::NONE)
    }

    /// Returns every tag that at least one type is associated with, once
    /// each and in name order.
    pub fn tags(&self) -> impl Iterator<Item = Tag> + use<> {
        self.tags
            .values()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
    }

    /// Returns the names of the Rust types associated with `tag`.
    pub fn types_of(&self, tag: Tag) -> impl Iterator<Item = &'static str> + '_ {
        self.tags
            .iter()
            .filter(move |(_, associated)| **associated == tag)
            .filter_map(|(type_id, _)| self.type_names.get(type_id).copied())
    }
}
