//! Velocity text parsing and formatting for the numeric field.

use crate::config::DOPPLER_CONFIG;
use crate::scale::LogScale;

/// Result of accepting raw field text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceptedVelocity {
    /// Coerced and clamped velocity
    pub velocity: f64,
    /// True when the parsed value fell outside the domain
    pub clamped: bool,
}

/// Coerce raw text to a number.
///
/// Surrounding whitespace is ignored and empty text is 0. Accepts decimal
/// float literals (with exponent) and `Infinity` with an optional sign.
/// Other spellings such as `inf` or `INFINITY`, and anything that is not a
/// float literal, are 0.
pub fn parse_velocity(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let has_word = unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E');
    if has_word && unsigned != "Infinity" {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Parse and clamp raw field text to the demo velocity domain.
pub fn accept_velocity(raw: &str) -> AcceptedVelocity {
    DOPPLER_CONFIG.scale.accept(raw)
}

impl LogScale {
    /// Parse and clamp raw field text to this scale's velocity domain.
    pub fn accept(&self, raw: &str) -> AcceptedVelocity {
        let parsed = parse_velocity(raw);
        let velocity = self.clamp_velocity(parsed);
        AcceptedVelocity {
            velocity,
            clamped: velocity != parsed,
        }
    }
}

/// Velocity as shown when the slider drives the field (one decimal place).
pub fn format_velocity(velocity: f64) -> String {
    let s = format!("{velocity:.1}");
    // "-0.0" reads oddly in the field
    if s == "-0.0" {
        "0.0".to_string()
    } else {
        s
    }
}

/// Velocity as written back after clamping (shortest form, e.g. "-100").
pub fn format_clamped(velocity: f64) -> String {
    format!("{velocity}")
}
