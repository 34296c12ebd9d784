//! Test: `Record` cannot be derived for enums.
//!
//! Entries are keyed by field name, so only structs with named fields qualify.

use dualview::Record;

#[derive(Record)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
