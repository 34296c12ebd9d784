//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that appear in emitted fields: entry
//! fields need `Display` (their values are rendered to strings), and fields
//! printed by the generated `Debug` need `Debug`.
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` is skipped when collecting generics. It carries no value
//! to render, so it must not force a bound on `T`:
//!
//! ```ignore
//! #[derive(Record)]
//! struct TypedId<T> {
//!     id: String,
//!     #[record(skip)]
//!     _marker: PhantomData<T>,  // T should NOT require Display
//! }
//! ```

use syn::{parse_quote, Ident};

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            if let Some(segment) = path.path.segments.last() {
                // PhantomData<T> is a zero-sized marker; T needs no bounds.
                if segment.ident == "PhantomData" {
                    return;
                }

                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    for arg in &args.args {
                        if let syn::GenericArgument::Type(inner_ty) = arg {
                            collect_generics_from_type(inner_ty, generics, result);
                        }
                    }
                }

                // Check if this type identifier matches a generic parameter
                for param in generics.type_params() {
                    if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                        result.push(param.ident.clone());
                    }
                }
            }
        }
        syn::Type::Reference(reference) => {
            collect_generics_from_type(&reference.elem, generics, result);
        }
        syn::Type::Paren(paren) => {
            collect_generics_from_type(&paren.elem, generics, result);
        }
        _ => {}
    }
}

fn add_bounds(
    mut generics: syn::Generics,
    used_generics: &[Ident],
    bound: &syn::TypeParamBound,
) -> syn::Generics {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(bound.clone());
        }
    }
    generics
}

/// Adds `Display` bounds to generic parameters used in entry fields.
pub(crate) fn add_display_bounds(generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    add_bounds(generics, used_generics, &parse_quote!(::core::fmt::Display))
}

/// Adds `Debug` bounds to generic parameters printed by the generated `Debug`.
pub(crate) fn add_debug_bounds(generics: syn::Generics, used_generics: &[Ident]) -> syn::Generics {
    add_bounds(generics, used_generics, &parse_quote!(::core::fmt::Debug))
}
