//! Derive macros for tagclass.
//!
//! # Available Derive Macros
//!
//! - [`DataType`]: associates a type with a data type tag
//!
//! # Example
//!
//! ```rust,ignore
//! use tagclass::dispatch::{DataType, Registry};
//!
//! #[derive(DataType)]
//! #[data_type(tag = "celsius")]
//! struct Celsius(f64);
//!
//! let registry = Registry::builder().data_type::<Celsius>().build().unwrap();
//! assert_eq!(registry.tag_of_type::<Celsius>(), Celsius::TAG);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod data_type;

use proc_macro::TokenStream;

/// Derive macro implementing `tagclass::dispatch::DataType`.
///
/// The tag defaults to the name of the type and can be overridden with
/// `#[data_type(tag = "...")]`. Every type parameter is bounded by
/// `Send + Sync + 'static`; types with lifetime parameters are rejected.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl tagclass::dispatch::DataType for Celsius {
///     const TAG: tagclass::dispatch::Tag = tagclass::dispatch::Tag::new("celsius");
/// }
/// ```
#[proc_macro_derive(DataType, attributes(data_type))]
pub fn derive_data_type(input: TokenStream) -> TokenStream {
    data_type::derive_data_type_impl(input)
}
