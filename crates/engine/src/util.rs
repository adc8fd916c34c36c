//! Internal helpers for model validation and normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every entry point enforces the same invariants.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{EngineError, ResultEngine};

/// Upper-case matter code with diacritics stripped and runs of separators
/// collapsed to a single `-`. Returns `None` when nothing is left.
pub(crate) fn normalize_code(input: &str) -> Option<String> {
    let mut out = String::new();
    let mut pending_sep = false;
    for ch in input.trim().nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
            out.extend(ch.to_uppercase());
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Trimmed text, `None` when blank.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// A cap for a new target must be a finite dollar amount above 0.
pub(crate) fn validate_cap(cap: f64) -> ResultEngine<f64> {
    if !cap.is_finite() || cap <= 0.0 {
        return Err(EngineError::InvalidCap(format!(
            "cap must be > 0, got {cap}"
        )));
    }
    Ok(cap)
}

/// Hourly rates are finite and not negative.
pub(crate) fn validate_rate(rate: f64) -> ResultEngine<f64> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(EngineError::InvalidRate(format!(
            "hourly rate must be >= 0, got {rate}"
        )));
    }
    Ok(rate)
}
