//! String manipulation helpers
//!
//! Small, framework-free transforms applied to user-entered text before it
//! is validated or stored. Every transform here is idempotent.

use regex::Regex;

use crate::error::CoreError;

/// Number of digits in a North American phone number
pub const PHONE_DIGITS: usize = 10;

/// Extracts every ASCII digit from the given string, preserving order
///
/// ```rust
/// use core_kernel::text::extract_digits;
///
/// assert_eq!(extract_digits("(613) 555-0100"), "6135550100");
/// assert_eq!(extract_digits(""), "");
/// ```
pub fn extract_digits(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Title-cases free text
///
/// The value is trimmed and lower-cased, the first character and every
/// character following a space are upper-cased, and runs of spaces collapse
/// to a single space. A character whose upper-case form is more than one
/// character (`ß`, `ﬁ`) is left as it is.
///
/// ```rust
/// use core_kernel::text::title_case;
///
/// assert_eq!(title_case("  john   SMITH  "), "John Smith");
/// assert_eq!(title_case("ßmith"), "ßmith");
/// ```
pub fn title_case(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut previous: Option<char> = None;

    for c in lowered.chars() {
        match previous {
            None => result.push(upper_single(c)),
            Some(' ') if c == ' ' => {}
            Some(' ') => result.push(upper_single(c)),
            Some(_) => result.push(c),
        }
        previous = Some(c);
    }

    result
}

/// Upper-cases `c` when its upper-case form is a single character
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Removes all whitespace from a code and reinserts a single space before the
/// character at `position`
///
/// When `position` is zero or not inside the compacted code, the compacted
/// code is returned without a space.
///
/// ```rust
/// use core_kernel::text::insert_space_at;
///
/// assert_eq!(insert_space_at("K1A0B1", 3), "K1A 0B1");
/// assert_eq!(insert_space_at(" K1A  0B1 ", 3), "K1A 0B1");
/// ```
pub fn insert_space_at(code: &str, position: usize) -> String {
    let compact: Vec<char> = code.chars().filter(|c| !c.is_whitespace()).collect();

    if position == 0 || position >= compact.len() {
        return compact.into_iter().collect();
    }

    let mut result = String::with_capacity(compact.len() + 1);
    result.extend(&compact[..position]);
    result.push(' ');
    result.extend(&compact[position..]);
    result
}

/// Checks a postal code against a country's postal pattern
///
/// An empty pattern accepts anything, as does an empty code (absence is
/// checked elsewhere). Matching is a regular-expression search, so patterns
/// that must cover the whole code need their own anchors.
///
/// # Errors
///
/// Returns `CoreError::InvalidPattern` when the pattern does not compile.
pub fn postal_code_matches(code: &str, pattern: &str) -> Result<bool, CoreError> {
    if pattern.trim().is_empty() || code.trim().is_empty() {
        return Ok(true);
    }

    let regex = Regex::new(pattern).map_err(|e| CoreError::invalid_pattern(pattern, e))?;
    Ok(regex.is_match(code))
}

/// Formats exactly ten digits as `DDD-DDD-DDDD`
///
/// Returns `None` for anything that is not exactly [`PHONE_DIGITS`] ASCII digits.
pub fn format_phone(digits: &str) -> Option<String> {
    if digits.len() != PHONE_DIGITS || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_digits_drops_punctuation() {
        assert_eq!(extract_digits("(613) 555-0100"), "6135550100");
        assert_eq!(extract_digits("613-555-0100"), "6135550100");
        assert_eq!(extract_digits("no digits"), "");
    }

    #[test]
    fn test_title_case_collapses_spaces() {
        assert_eq!(title_case("  john   SMITH  "), "John Smith");
        assert_eq!(title_case("123 main st."), "123 Main St.");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "");
    }

    #[test]
    fn test_title_case_keeps_hyphenated_tail_lowercase() {
        assert_eq!(title_case("MARY-JANE o'neil"), "Mary-jane O'neil");
    }

    #[test]
    fn test_title_case_is_idempotent() {
        let once = title_case(" the   ROLLING stones ");
        assert_eq!(title_case(&once), once);
    }

    #[test]
    fn test_title_case_keeps_characters_with_multi_char_uppercase() {
        let once = title_case("ßmith ﬁsh");
        assert_eq!(once, "ßmith ﬁsh");
        assert_eq!(title_case(&once), once);

        assert_eq!(title_case("élise ñúñez"), "Élise Ñúñez");
    }

    #[test]
    fn test_insert_space_at_is_idempotent() {
        let once = insert_space_at("k1a0b1", 3);
        assert_eq!(once, "k1a 0b1");
        assert_eq!(insert_space_at(&once, 3), once);
    }

    #[test]
    fn test_insert_space_at_out_of_range() {
        assert_eq!(insert_space_at("K1A", 3), "K1A");
        assert_eq!(insert_space_at("K 1", 0), "K1");
        assert_eq!(insert_space_at("", 3), "");
    }

    #[test]
    fn test_postal_code_matches() {
        let pattern = r"^[A-Z]\d[A-Z] ?\d[A-Z]\d$";
        assert!(postal_code_matches("K1A0B1", pattern).unwrap());
        assert!(postal_code_matches("K1A 0B1", pattern).unwrap());
        assert!(!postal_code_matches("12345", pattern).unwrap());
    }

    #[test]
    fn test_postal_code_matches_empty_pattern_accepts_anything() {
        assert!(postal_code_matches("anything at all", "").unwrap());
        assert!(postal_code_matches("", r"^\d{5}$").unwrap());
    }

    #[test]
    fn test_postal_code_matches_invalid_pattern() {
        let result = postal_code_matches("K1A0B1", "([A-Z");
        assert!(matches!(result, Err(CoreError::InvalidPattern { .. })));
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("6135550100"), Some("613-555-0100".to_string()));
        assert_eq!(format_phone("613555010"), None);
        assert_eq!(format_phone("613-555-01"), None);
    }
}
