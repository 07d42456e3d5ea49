//! Parsing of human-readable counts and boolean flags from page values.

/// Parses a count string such as `"1.2M"`, `"5K"` or `"12,345"` into an integer.
///
/// Rules (case-insensitive, thousands separators ignored):
/// - a `b` anywhere selects the ×1e9 branch, else `m` selects ×1e6, else `k`
///   selects ×1e3; only the selected letter is stripped before parsing.
/// - fractional values are honoured and truncated toward zero.
///
/// Empty, unparsable, negative, or non-finite input yields `0`.
#[must_use]
pub fn parse_count(raw: &str) -> u64 {
    let cleaned = raw.to_lowercase().replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0;
    }

    let (number, multiplier) = if cleaned.contains('b') {
        (cleaned.replace('b', ""), 1_000_000_000.0)
    } else if cleaned.contains('m') {
        (cleaned.replace('m', ""), 1_000_000.0)
    } else if cleaned.contains('k') {
        (cleaned.replace('k', ""), 1_000.0)
    } else {
        (cleaned.to_owned(), 1.0)
    };

    number
        .trim()
        .parse::<f64>()
        .ok()
        .map(|value| value * multiplier)
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map_or(0, truncate_to_u64)
}

/// A flag as it arrives from page data: a native boolean, a literal string,
/// or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagValue<'a> {
    Bool(bool),
    Text(&'a str),
    Missing,
}

impl From<bool> for FlagValue<'_> {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl<'a> From<&'a str> for FlagValue<'a> {
    fn from(value: &'a str) -> Self {
        FlagValue::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for FlagValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FlagValue::Missing, FlagValue::Text)
    }
}

/// Interprets a page flag. Native booleans pass through; the strings
/// `"true"`/`"false"` are accepted in any case; anything else is `false`.
#[must_use]
pub fn parse_flag<'a>(raw: impl Into<FlagValue<'a>>) -> bool {
    match raw.into() {
        FlagValue::Bool(value) => value,
        FlagValue::Text(text) => text.eq_ignore_ascii_case("true"),
        FlagValue::Missing => false,
    }
}

// Caller guarantees finite and non-negative; `as` saturates above u64::MAX.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_to_u64(value: f64) -> u64 {
    value.trunc() as u64
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
