use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Dollar amount as an unrounded `f64`.
///
/// WIP figures are computed in floating-point dollars and never rounded
/// inside the engine; rounding only happens when the value is displayed.
///
/// # Examples
///
/// ```rust
/// use engine::Dollars;
///
/// let amount = Dollars::new(262.5);
/// assert_eq!(amount.value(), 262.5);
/// assert_eq!(amount.to_string(), "$262.50");
/// ```
///
/// Parsing from user input (optional `$`, `,` as thousands separator,
/// rejects > 2 decimals):
///
/// ```rust
/// use engine::Dollars;
///
/// assert_eq!("5000".parse::<Dollars>().unwrap().value(), 5000.0);
/// assert_eq!("$5,000.50".parse::<Dollars>().unwrap().value(), 5000.5);
/// assert!("12.345".parse::<Dollars>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Dollars(f64);

impl Dollars {
    pub const ZERO: Dollars = Dollars(0.0);

    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw dollar value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Dollars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{sign}${:.2}", self.0.abs())
    }
}

impl FromStr for Dollars {
    type Err = EngineError;

    /// Parses a USD amount such as `5000`, `$5,000.50` or `-12.5`.
    ///
    /// `,` only groups thousands (`1,234,567`); at most two decimals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rejected = |why: &str| EngineError::InvalidCap(format!("{why}: {s:?}"));

        let text = s.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let text = text.trim_start();
        let text = text.strip_prefix('$').unwrap_or(text);

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let digits = ungroup_thousands(whole).ok_or_else(|| rejected("invalid amount"))?;
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(rejected("invalid amount"));
        }
        let cents = match fraction.len() {
            0 => 0,
            1 => u64::from(fraction.as_bytes()[0] - b'0') * 10,
            2 => fraction.parse::<u64>().map_err(|_| rejected("invalid amount"))?,
            _ => return Err(rejected("too many decimals")),
        };

        let total = digits
            .parse::<u64>()
            .ok()
            .and_then(|dollars| dollars.checked_mul(100))
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(|| rejected("amount too large"))?;
        let value = total as f64 / 100.0;
        Ok(Dollars(if negative { -value } else { value }))
    }
}

/// Digits of `whole` with thousands separators removed.
///
/// `None` unless every group after the first has exactly three digits and
/// the first has one to three (any length when there is no `,`).
fn ungroup_thousands(whole: &str) -> Option<String> {
    let mut groups = whole.split(',');
    let mut digits = groups.next().filter(|head| !head.is_empty())?.to_string();
    if whole.contains(',') && digits.len() > 3 {
        return None;
    }
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    digits.bytes().all(|b| b.is_ascii_digit()).then_some(digits)
}
