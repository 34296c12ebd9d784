//! Parsing of field attributes: `#[sensitive]` and `#[record(...)]`.
//!
//! This module maps attribute syntax to per-field decisions and produces
//! structured errors for invalid forms.

use syn::{Attribute, LitStr, Meta, Result};

/// What the derive does with a field.
///
/// | Attribute | Strategy | Behavior |
/// |-----------|----------|----------|
/// | None | `Entry` | Emitted as an entry |
/// | `#[sensitive]` | `Sensitive` | Emitted as an entry and listed in `SENSITIVE_FIELDS` |
/// | `#[record(skip)]` | `Skip` | Not emitted, not printed by `Debug` |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// No annotation: a plain entry.
    Entry,
    /// Bare `#[sensitive]`: an entry whose value a redacting read replaces.
    Sensitive,
    /// `#[record(skip)]`: left out of the record entirely.
    Skip,
}

/// Everything the derive needs to know about one field.
#[derive(Clone, Debug)]
pub(crate) struct FieldOptions {
    pub(crate) strategy: Strategy,
    /// Entry key override from `#[record(rename = "...")]`.
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut sensitive = false;
    let mut skip = false;
    let mut rename: Option<LitStr> = None;

    for attr in attrs {
        if attr.path().is_ident("sensitive") {
            match &attr.meta {
                Meta::Path(_) => {
                    if sensitive {
                        return Err(syn::Error::new_spanned(
                            attr,
                            "multiple #[sensitive] attributes specified on the same field",
                        ));
                    }
                    sensitive = true;
                }
                Meta::List(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "`#[sensitive]` takes no arguments on `Record` fields",
                    ));
                }
                Meta::NameValue(_) => {
                    return Err(syn::Error::new_spanned(
                        attr,
                        "name-value syntax is not supported for #[sensitive]",
                    ));
                }
            }
        } else if attr.path().is_ident("record") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("rename") {
                    if rename.is_some() {
                        return Err(meta.error("duplicate `rename` option"));
                    }
                    rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error(format!(
                        "unknown field option `{}`; expected `rename` or `skip`",
                        meta.path
                            .get_ident()
                            .map_or_else(|| "?".to_string(), ToString::to_string)
                    )))
                }
            })?;
        }
    }

    let strategy = match (sensitive, skip) {
        (true, true) => {
            return Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "a field cannot be both #[sensitive] and #[record(skip)]",
            ));
        }
        (true, false) => Strategy::Sensitive,
        (false, true) => Strategy::Skip,
        (false, false) => Strategy::Entry,
    };

    Ok(FieldOptions { strategy, rename })
}
