//! Property-Based Test Generators
//!
//! Provides proptest strategies for raw user input that a normalized
//! record must survive.

use proptest::prelude::*;

/// Strategy for Ontario postal codes as a user might type them
///
/// Any case, with or without the inner space, with surrounding blanks.
pub fn ontario_postal_input_strategy() -> impl Strategy<Value = String> {
    (
        "[KLMNPklmnp][0-9][A-Za-z]",
        prop_oneof![Just(""), Just(" ")],
        "[0-9][A-Za-z][0-9]",
        prop_oneof![Just(""), Just(" "), Just("  ")],
    )
        .prop_map(|(head, gap, tail, pad)| format!("{pad}{head}{gap}{tail}{pad}"))
}

/// Strategy for ZIP and ZIP+4 codes
pub fn zip_code_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{5}", "[0-9]{5}-[0-9]{4}"]
}

/// Strategy for ten-digit phones broken up by common punctuation
pub fn phone_input_strategy() -> impl Strategy<Value = String> {
    (
        "[2-9][0-9]{2}",
        "[0-9]{3}",
        "[0-9]{4}",
        prop_oneof![Just(("(", ") ", "-")), Just(("", ".", ".")), Just(("", " ", " ")), Just(("", "-", "-"))],
    )
        .prop_map(|(area, exchange, line, (open, first, second))| {
            format!("{open}{area}{first}{exchange}{second}{line}")
        })
}

/// Strategy for names made of words in mixed case with irregular spacing
pub fn messy_name_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec("[A-Za-z]{1,10}", 1..4),
        prop_oneof![Just(" "), Just("  ")],
    )
        .prop_map(|(words, gap)| format!(" {} ", words.join(gap)))
}
