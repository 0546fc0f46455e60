//! Rainfall value conversion
//!
//! Sensor exports are messy: stray spaces inside numbers, trailing commas
//! and blank cells all occur. Conversion never fails; anything that cannot
//! be read as a number becomes [`DEFAULT_RAINFALL_VALUE`].

use crate::constants::{DEFAULT_RAINFALL_VALUE, exceeds_tolerance};

/// Outcome of converting one rainfall field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RainfallValue {
    /// Field was read as a number
    Parsed(f64),
    /// Field could not be read; the default value applies
    Defaulted,
}

impl RainfallValue {
    /// Numeric value, with the default standing in for unreadable fields
    pub fn value(&self) -> f64 {
        match self {
            RainfallValue::Parsed(value) => *value,
            RainfallValue::Defaulted => DEFAULT_RAINFALL_VALUE,
        }
    }

    /// Whether this reading counts as rainfall
    pub fn is_nonzero(&self) -> bool {
        exceeds_tolerance(self.value())
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, RainfallValue::Defaulted)
    }
}

/// Convert a raw rainfall field
///
/// Tries, in order:
/// 1. the field trimmed of whitespace and then of leading/trailing commas
/// 2. the same with every space character removed and commas re-trimmed
///
/// and falls back to [`RainfallValue::Defaulted`].
pub fn parse_rainfall(raw: &str) -> RainfallValue {
    let cleaned = raw.trim().trim_matches(',');
    if let Some(value) = parse_float(cleaned) {
        return RainfallValue::Parsed(value);
    }

    let compact = cleaned.replace(' ', "");
    match parse_float(compact.trim_matches(',')) {
        Some(value) => RainfallValue::Parsed(value),
        None => RainfallValue::Defaulted,
    }
}

/// Parse a float, also accepting single underscores between digits (`1_000.5`)
fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if let Ok(value) = text.parse::<f64>() {
        return Some(value);
    }
    strip_digit_separators(text)?.parse::<f64>().ok()
}

/// Remove `_` separators, or `None` if one is not between two ASCII digits
fn strip_digit_separators(text: &str) -> Option<String> {
    if !text.contains('_') {
        return None;
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            stripped.push(ch);
            continue;
        }
        let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
        let digit_after = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(digit_before && digit_after) {
            return None;
        }
    }
    Some(stripped)
}
