//! Implementation of the `#[derive(DataType)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input, parse_quote};

/// Main implementation of the `DataType` derive macro.
pub fn derive_data_type_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "DataType cannot be derived for types with lifetime parameters; data types must be 'static",
        ));
    }

    let tag = data_type_tag(&input)?;
    for parameter in input.generics.type_params_mut() {
        parameter
            .bounds
            .push(parse_quote!(::core::marker::Send));
        parameter
            .bounds
            .push(parse_quote!(::core::marker::Sync));
        parameter.bounds.push(parse_quote!('static));
    }

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::tagclass::dispatch::DataType for #name #type_generics #where_clause {
            const TAG: ::tagclass::dispatch::Tag = ::tagclass::dispatch::Tag::new(#tag);
        }
    })
}

/// Reads `#[data_type(tag = "...")]`, defaulting to the type name.
fn data_type_tag(input: &DeriveInput) -> syn::Result<String> {
    let mut tag = None;
    for attribute in &input.attrs {
        if !attribute.path().is_ident("data_type") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(syn::Error::new_spanned(value, "data type tags cannot be empty"));
                }
                if tag.replace(value.value()).is_some() {
                    return Err(meta.error("duplicate `tag` in #[data_type]"));
                }
                Ok(())
            } else {
                Err(meta.error("unsupported #[data_type] argument; expected `tag = \"...\"`"))
            }
        })?;
    }
    Ok(tag.unwrap_or_else(|| input.ident.to_string()))
}
