//! Test: `Record` needs named fields.
//!
//! Tuple fields have no name to use as an entry key.

use dualview::Record;

#[derive(Record)]
struct Token(String);

fn main() {}
