//! `#[derive(Record)]` for `dualview`.
//!
//! A record is a struct with named fields that can seed a `DualView`: each
//! field becomes an entry keyed by its name, and fields marked `#[sensitive]`
//! become the container's sensitive keys. The generated `Debug` prints those
//! fields as `"[REDACTED]"`.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    rust_2018_idioms,
    trivial_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::cargo_common_metadata,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Result};

mod derive_struct;
mod generics;
mod strategy;
use derive_struct::{derive_struct, StructDeriveOutput};
use generics::{add_debug_bounds, add_display_bounds};

/// Derives `dualview::Record` and a redacting `Debug`.
///
/// Field attributes:
///
/// - `#[sensitive]` lists the entry key in `SENSITIVE_FIELDS`
/// - `#[record(rename = "key")]` uses `key` as the entry key
/// - `#[record(skip)]` leaves the field out of the entries and out of `Debug`
///
/// Unmarked fields are rendered through `Display`. With the `slog` feature the
/// record also implements `slog::Value`, logging the entries with sensitive
/// values replaced.
#[proc_macro_derive(Record, attributes(sensitive, record))]
pub fn derive_record(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Path to the runtime crate, following a rename in the caller's manifest.
///
/// Inside `dualview` the crate refers to itself through
/// `extern crate self as dualview`.
fn crate_root() -> TokenStream {
    match crate_name("dualview") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::dualview },
    }
}

#[cfg(feature = "slog")]
fn slog_root() -> Result<TokenStream> {
    match crate_name("slog") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            Ok(quote! { ::#ident })
        }
        Ok(FoundCrate::Itself) => Ok(quote! { crate }),
        Err(_) => Err(syn::Error::new(
            proc_macro2::Span::call_site(),
            "the `slog` feature of dualview needs `slog` as a direct dependency",
        )),
    }
}

/// Struct-level `#[record(...)]` has no options; every option is per field.
fn reject_struct_options(attrs: &[Attribute]) -> Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("record")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            "`#[record(...)]` goes on fields, not on the struct",
        )),
        None => Ok(()),
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let data = match data {
        Data::Struct(data) => data,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span,
                "`Record` cannot be derived for enums",
            ));
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "`Record` cannot be derived for unions",
            ));
        }
    };
    reject_struct_options(&attrs)?;

    let root = crate_root();
    let StructDeriveOutput {
        sensitive_fields,
        entries_body,
        entry_generics,
        debug_body,
        debug_generics,
    } = derive_struct(&ident, &data, &generics)?;

    let record_generics = add_display_bounds(generics.clone(), &entry_generics);
    let (impl_generics, ty_generics, where_clause) = record_generics.split_for_impl();
    let debug_generics = add_debug_bounds(generics, &debug_generics);
    let (debug_impl, debug_ty, debug_where) = debug_generics.split_for_impl();

    #[cfg(feature = "slog")]
    let slog_impl = {
        let slog = slog_root()?;
        quote! {
            impl #impl_generics #slog::Value for #ident #ty_generics #where_clause {
                fn serialize(
                    &self,
                    record: &#slog::Record<'_>,
                    key: #slog::Key,
                    serializer: &mut dyn #slog::Serializer,
                ) -> #slog::Result {
                    #slog::Value::serialize(&#root::slog::record_json(self), record, key, serializer)
                }
            }
        }
    };
    #[cfg(not(feature = "slog"))]
    let slog_impl = TokenStream::new();

    Ok(quote! {
        impl #impl_generics #root::Record for #ident #ty_generics #where_clause {
            const SENSITIVE_FIELDS: &'static [&'static str] = &[#(#sensitive_fields),*];

            fn entries(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                #entries_body
            }
        }

        impl #debug_impl ::core::fmt::Debug for #ident #debug_ty #debug_where {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #debug_body
            }
        }

        #slog_impl
    })
}
