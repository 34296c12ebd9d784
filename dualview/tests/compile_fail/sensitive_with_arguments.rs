//! Test: `#[sensitive]` takes no arguments on record fields.
//!
//! There is a single sensitivity level; use bare `#[sensitive]`.

use dualview::Record;

#[derive(Record)]
struct Login {
    user: String,
    #[sensitive(Secret)]
    password: String,
}

fn main() {}
