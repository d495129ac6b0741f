// src/count.rs
//
// Turns a textual sentence count (a filter argument, a CLI flag) into the
// signed integer the truncators take. Negative values are valid and mean
// "keep nothing"; only non-integers are rejected.

use std::num::IntErrorKind;

use crate::error::CountError;

pub fn parse_count(raw: &str) -> Result<i64, CountError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::Empty => CountError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => CountError::OutOfRange {
            value: trimmed.to_owned(),
        },
        _ => CountError::NotAnInteger {
            value: trimmed.to_owned(),
        },
    })
}
