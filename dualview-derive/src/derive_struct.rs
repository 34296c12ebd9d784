//! Struct-specific `Record` derivation.
//!
//! This module generates the entry list, the sensitive field list, and the
//! redacted `Debug` body, and collects generic parameters that require bounds.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, spanned::Spanned, DataStruct, Fields, LitStr, Result};

use crate::{
    generics::collect_generics_from_type,
    strategy::{parse_field_options, Strategy},
};

pub(crate) struct StructDeriveOutput {
    pub(crate) sensitive_fields: Vec<LitStr>,
    pub(crate) entries_body: TokenStream,
    pub(crate) entry_generics: Vec<Ident>,
    pub(crate) debug_body: TokenStream,
    pub(crate) debug_generics: Vec<Ident>,
}

pub(crate) fn derive_struct(
    name: &Ident,
    data: &DataStruct,
    generics: &syn::Generics,
) -> Result<StructDeriveOutput> {
    let fields = match &data.fields {
        Fields::Named(fields) => fields,
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new_spanned(
                fields,
                "`Record` requires named fields; field names become entry keys",
            ));
        }
        Fields::Unit => {
            return Err(syn::Error::new(
                name.span(),
                "`Record` cannot be derived for unit structs",
            ));
        }
    };

    let mut sensitive_fields = Vec::new();
    let mut entries = Vec::new();
    let mut entry_generics = Vec::new();
    let mut debug_fields = Vec::new();
    let mut debug_generics = Vec::new();
    let mut any_skipped = false;

    for field in &fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new(span, "named field should have an identifier"));
        };
        let field_name = LitStr::new(&ident.unraw().to_string(), ident.span());
        let key = options.rename.unwrap_or_else(|| field_name.clone());

        match options.strategy {
            Strategy::Skip => {
                any_skipped = true;
                continue;
            }
            Strategy::Sensitive => {
                sensitive_fields.push(key.clone());
                debug_fields.push(quote_spanned! { span =>
                    debug.field(#field_name, &"[REDACTED]");
                });
            }
            Strategy::Entry => {
                collect_generics_from_type(&field.ty, generics, &mut debug_generics);
                debug_fields.push(quote_spanned! { span =>
                    debug.field(#field_name, &self.#ident);
                });
            }
        }

        collect_generics_from_type(&field.ty, generics, &mut entry_generics);
        entries.push(quote_spanned! { span =>
            (#key, ::std::string::ToString::to_string(&self.#ident))
        });
    }

    let name_str = LitStr::new(&name.unraw().to_string(), name.span());
    let finish = if any_skipped {
        quote! { debug.finish_non_exhaustive() }
    } else {
        quote! { debug.finish() }
    };

    Ok(StructDeriveOutput {
        sensitive_fields,
        entries_body: quote! {
            ::std::vec![#(#entries),*]
        },
        entry_generics,
        debug_body: quote! {
            let mut debug = f.debug_struct(#name_str);
            #(#debug_fields)*
            #finish
        },
        debug_generics,
    })
}
