//! Digit/format conversion between raw digit sequences and masked values.
//!
//! Three operations, all total functions over arbitrary input strings:
//! rendering a digit sequence under a mask ([`format_phone`]), recovering
//! digits from a possibly-formatted value ([`extract_digits`]), and picking
//! the best candidate mask for an externally supplied value
//! ([`select_mask`]).

use crate::models::CountryMask;
use crate::parser::mask::{parse_mask, MaskPart};

/// Strips every non-digit character, preserving digit order.
#[must_use]
pub fn normalize_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Formats a digit sequence under a mask.
///
/// An empty sequence renders as exactly the prefix. Otherwise the parsed
/// pattern is walked in order: each input token consumes the next digit
/// while one remains, and the walk stops at the first input token with no
/// digit left. A literal is emitted only while more digits remain to be
/// placed, or when at least one digit was already placed and the literal
/// immediately precedes an input token — so the display grows as you type
/// (the separator before the next cell is kept, trailing separators past
/// the last filled group are dropped).
///
/// Digits beyond the mask's cell count are ignored.
///
/// # Examples
///
/// ```
/// use phoneform::models::CountryMask;
/// use phoneform::parser::format_phone;
///
/// let ru = CountryMask::new("ru", "Russia", "🇷🇺", "+7", "(***) - *** - ** - **").unwrap();
/// assert_eq!(format_phone("", &ru), "+7");
/// assert_eq!(format_phone("123", &ru), "+7(123) - ");
/// assert_eq!(format_phone("1234567890", &ru), "+7(123) - 456 - 78 - 90");
/// ```
#[must_use]
pub fn format_phone(digits: &str, mask: &CountryMask) -> String {
    if digits.is_empty() {
        return mask.prefix.clone();
    }

    let parsed = parse_mask(&mask.pattern);
    let digit_chars: Vec<char> = digits.chars().collect();
    let mut digit_index = 0;
    let mut result = mask.prefix.clone();

    for (i, part) in parsed.parts.iter().enumerate() {
        match part {
            MaskPart::Input => {
                if digit_index < digit_chars.len() {
                    result.push(digit_chars[digit_index]);
                    digit_index += 1;
                } else {
                    break;
                }
            }
            MaskPart::Literal(text) => {
                let digits_remain = digit_index < digit_chars.len();
                let next_is_input = parsed.parts.get(i + 1).is_some_and(MaskPart::is_input);
                let digits_placed = digit_index > 0;

                if digits_remain || (digits_placed && next_is_input) {
                    result.push_str(text);
                }
            }
        }
    }

    result
}

/// Recovers the digit sequence from a raw value.
///
/// When the value starts with `prefix` (exact match at position 0) the
/// prefix is stripped first; otherwise digits are taken from the whole
/// string, so a bare digit string imports cleanly. The result is not
/// truncated — it may exceed any mask's cell count.
#[must_use]
pub fn extract_digits(raw: &str, prefix: &str) -> String {
    let remainder = raw.strip_prefix(prefix).unwrap_or(raw);
    normalize_digits(remainder)
}

/// Picks the mask and digit sequence for an externally supplied value.
///
/// First-match policy over `masks` in order: the first candidate whose
/// extraction yields a nonzero digit count that fits its cell count wins.
/// A value whose digits overflow a candidate falls through to later
/// candidates, and finally to the current mask with prefix-agnostic
/// stripping truncated to fit — an oversized value is never rejected
/// outright. An empty value resets to the first mask.
///
/// Out-of-range `current` is treated as 0.
#[must_use]
pub fn select_mask(raw: &str, masks: &[CountryMask], current: usize) -> (usize, String) {
    let current = if current < masks.len() { current } else { 0 };

    if raw.is_empty() {
        return (0, String::new());
    }

    for (i, mask) in masks.iter().enumerate() {
        let extracted = extract_digits(raw, &mask.prefix);
        if !extracted.is_empty() {
            let parsed = parse_mask(&mask.pattern);
            if extracted.len() <= parsed.input_count {
                return (i, extracted);
            }
        }
    }

    // No candidate fits: keep the current mask and truncate to its cells.
    let fallback = normalize_digits(raw);
    if fallback.is_empty() {
        return (current, String::new());
    }

    let input_count = masks
        .get(current)
        .map_or(0, |mask| parse_mask(&mask.pattern).input_count);
    let truncated: String = fallback.chars().take(input_count).collect();
    (current, truncated)
}
