//! One key/value store, two read paths.
//!
//! This crate separates:
//! - **Exposed** reads: the true stored values, for trusted code.
//! - **Redacted** reads: the same keys, with the values of sensitive keys
//!   replaced, for logs and other low-trust audiences.
//!
//! The pieces:
//! - [`DualView`] owns the data and mirrors every write into an exposed map and
//!   a redacted map.
//! - [`RedactingView`] wraps any [`ReadOnlyMap`] and substitutes a
//!   [`Replacement`] for sensitive keys on every read. Sensitivity can be
//!   toggled at any time and takes effect on the next read.
//! - [`Record`] (usually derived) flattens a struct into entries with a static
//!   list of sensitive fields.
//!
//! Key rules:
//! - Redaction is computed per read and never cached.
//! - Presence, length, and key order are never affected by redaction.
//! - `DualView::redacted()` holds raw values; use `DualView::redacting_view()`
//!   for substituted reads.
//!
//! What this crate does not do:
//! - perform I/O or logging (the `slog` feature only provides log values)
//! - synchronize access; everything here is single-threaded

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
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
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use dualview_derive::Record;

#[allow(unused_extern_crates)]
extern crate self as dualview;

// Module declarations
mod error;
mod precondition;
mod record;
#[cfg(feature = "slog")]
pub mod slog;
mod view;

// Re-exports
pub use error::{Error, Result};
pub use record::Record;
pub use view::{
    DualView, DualViewBuilder, Iter, Keys, ReadOnlyMap, RedactingView, RedactingViewBuilder,
    Replacement, Values, REDACTED_PLACEHOLDER,
};
