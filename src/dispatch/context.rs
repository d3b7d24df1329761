//! Dispatching operations through a registry.
//!
//! [`Dispatch`] is the seam every generic algorithm goes through: it selects
//! the key tag of a call, looks the resolved descriptor up and runs it. Both
//! [`Registry`] and [`Context`] implement it; descriptors receive a
//! [`Context`] so that nested dispatches are depth-limited.

use tracing::trace;

use super::descriptor::Call;
use super::error::{Error, Result};
use super::function::{Arguments, Function};
use super::operation::Operation;
use super::registry::Registry;
use super::tag::Tag;
use super::value::Value;

/// The state of a running dispatch: the registry and the nesting depth.
#[derive(Debug, Clone)]
pub struct Context {
    registry: Registry,
    depth: usize,
}

impl Context {
    pub(crate) const fn root(registry: Registry) -> Self {
        Self { registry, depth: 0 }
    }

    /// The current nesting depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// A context one level deeper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecursionLimit`] when the configured maximum depth
    /// would be exceeded.
    pub fn descend(&self) -> Result<Self> {
        let limit = self.registry.config().max_depth;
        if self.depth >= limit {
            return Err(Error::RecursionLimit { limit });
        }
        Ok(Self {
            registry: self.registry.clone(),
            depth: self.depth + 1,
        })
    }

    /// Calls `function`, enforcing the configured argument limit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyArguments`] when `arguments`, together with
    /// the arguments `function` already fixed, exceed the limit, and
    /// otherwise propagates the function's error.
    pub fn call(&self, function: &Function, arguments: Arguments) -> Result<Value> {
        let limit = self.registry.config().max_arguments;
        let found = function.fixed_arguments() + arguments.len();
        if found > limit {
            return Err(Error::TooManyArguments { limit, found });
        }
        function.call(arguments)
    }

    /// Returns `true` if `tag` supplies a user definition of `operation`.
    #[must_use]
    pub fn is_supplied(&self, operation: Operation, tag: Tag) -> bool {
        !self.registry.is_default(operation, tag)
    }
}

/// Dispatches operations to their resolved descriptors.
///
/// The key tag is the explicit data type parameter for
/// [keyed](Operation::keyed_by_parameter) operations and the tag of the first
/// argument otherwise.
pub trait Dispatch {
    /// The registry operations are resolved against.
    fn registry(&self) -> &Registry;

    /// A context for running a descriptor one level below `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RecursionLimit`] at the configured maximum depth.
    fn enter(&self) -> Result<Context>;

    /// Invokes `operation`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArguments`] for an unsupported argument count;
    /// - [`Error::MissingParameter`] when the operation needs an explicit
    ///   data type parameter and none was given;
    /// - [`Error::NotConforming`] when the key tag does not model the
    ///   operation's type class;
    /// - any error raised by the selected descriptor.
    fn dispatch(
        &self,
        operation: Operation,
        parameter: Option<Tag>,
        arguments: Arguments,
    ) -> Result<Value> {
        if !operation.accepts(arguments.len()) {
            return Err(Error::InvalidArguments {
                operation,
                found: arguments.len(),
            });
        }
        if operation.requires_parameter() && parameter.is_none() {
            return Err(Error::MissingParameter { operation });
        }

        let registry = self.registry();
        let tag = if operation.keyed_by_parameter() {
            parameter.unwrap_or(Tag::NONE)
        } else {
            arguments
                .first()
                .map_or(Tag::NONE, |first| registry.tag_of(first))
        };
        let descriptor = registry
            .resolve(operation, tag)
            .ok_or(Error::NotConforming {
                operation,
                tag,
                typeclass: operation.typeclass(),
            })?;

        trace!(%operation, %tag, origin = ?descriptor.origin(), "dispatch");
        let context = self.enter()?;
        descriptor.apply(
            &context,
            Call {
                operation,
                tag,
                parameter,
                arguments,
            },
        )
    }

    /// The tag of `value`.
    fn tag_of(&self, value: &Value) -> Tag {
        self.registry().tag_of(value)
    }
}

impl Dispatch for Registry {
    fn registry(&self) -> &Registry {
        self
    }

    fn enter(&self) -> Result<Context> {
        Ok(self.context())
    }
}

impl Dispatch for Context {
    fn registry(&self) -> &Registry {
        &self.registry
    }

    fn enter(&self) -> Result<Context> {
        self.descend()
    }
}
