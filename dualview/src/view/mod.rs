//! Views, the container, and the pieces they share.
//!
//! - **`map`**: the read capability (`ReadOnlyMap`) and its lazy iterators
//! - **`replacement`**: what a sensitive key reads as (`Replacement`)
//! - **`redacting`**: per-read redaction over a borrowed map (`RedactingView`)
//! - **`dual`**: the owning container with two read paths (`DualView`)

mod dual;
mod map;
mod redacting;
mod replacement;

pub use dual::{DualView, DualViewBuilder};
pub use map::{Iter, Keys, ReadOnlyMap, Values};
pub use redacting::{RedactingView, RedactingViewBuilder};
pub use replacement::{Replacement, REDACTED_PLACEHOLDER};
