//! Dynamically typed values flowing through the registry.
//!
//! A [`Value`] is an immutable, reference-counted handle to any
//! `Send + Sync + 'static` Rust value. Cloning a value only bumps a reference
//! count, so descriptors take and return values by value.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use super::error::{Error, Result};
use super::function::Function;

/// A dynamically typed, cheaply clonable value.
///
/// # Examples
///
/// ```rust
/// use tagclass::dispatch::Value;
///
/// let value = Value::new(42_i64);
/// assert!(value.is::<i64>());
/// assert_eq!(value.cloned::<i64>().unwrap(), 42);
/// assert!(value.get::<String>().is_err());
/// ```
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Value {
    /// Wraps a Rust value.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The unit value, used as the result of side-effect-only operations.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(())
    }

    /// Returns the [`TypeId`] of the wrapped Rust value.
    #[must_use]
    pub fn value_type_id(&self) -> TypeId {
        (*self.inner).type_id()
    }

    /// Returns the Rust type name of the wrapped value.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the wrapped value has type `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Returns a reference to the wrapped value if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Returns a reference to the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value does not have type `T`.
    pub fn get<T: Any>(&self) -> Result<&T> {
        self.downcast_ref::<T>().ok_or(Error::TypeMismatch {
            expected: std::any::type_name::<T>(),
            found: self.type_name,
        })
    }

    /// Returns a clone of the wrapped value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value does not have type `T`.
    pub fn cloned<T: Any + Clone>(&self) -> Result<T> {
        self.get::<T>().cloned()
    }

    /// Takes the wrapped value out of the handle.
    ///
    /// The value is moved out when this is the last handle to it and cloned
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value does not have type `T`.
    pub fn into_inner<T: Any + Clone + Send + Sync>(self) -> Result<T> {
        let found = self.type_name;
        Arc::downcast::<T>(self.inner)
            .map(Arc::unwrap_or_clone)
            .map_err(|_| Error::TypeMismatch {
                expected: std::any::type_name::<T>(),
                found,
            })
    }

    /// Reads the value as a [`Function`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a function.
    pub fn function(&self) -> Result<Function> {
        self.cloned::<Function>()
    }

    /// Reads the value as a boolean, as returned by predicates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a `bool`.
    pub fn truth(&self) -> Result<bool> {
        self.get::<bool>().copied()
    }

    /// Returns `true` if both handles point to the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

macro_rules! debug_primitives {
    ($value:expr, $formatter:expr, $($ty:ty),*) => {
        $(
            if let Some(inner) = $value.downcast_ref::<$ty>() {
                return write!($formatter, "{inner:?}");
            }
        )*
    };
}

impl fmt::Debug for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_primitives!(
            self, formatter, i32, i64, u32, u64, usize, f64, bool, char, String, &'static str, ()
        );
        write!(formatter, "Value<{}>", self.type_name)
    }
}
