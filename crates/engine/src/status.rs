//! Traffic-light status tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the AMBER tier.
pub const AMBER_THRESHOLD: f64 = 0.70;
/// Lower bound (inclusive) of the RED tier.
pub const RED_THRESHOLD: f64 = 0.90;

/// Risk classification derived from the fraction of cap consumed.
///
/// Ordered by severity: `Green < Amber < Red`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    #[default]
    Green,
    Amber,
    Red,
}

impl Status {
    /// Classifies a fraction of cap.
    ///
    /// RED is checked first and boundaries belong to the more severe tier:
    /// `0.90` is RED and `0.70` is AMBER. `NaN` falls through to GREEN.
    ///
    /// ```rust
    /// use engine::Status;
    ///
    /// assert_eq!(Status::from_pct(0.9), Status::Red);
    /// assert_eq!(Status::from_pct(0.7), Status::Amber);
    /// assert_eq!(Status::from_pct(0.0525), Status::Green);
    /// ```
    #[must_use]
    pub fn from_pct(pct: f64) -> Self {
        if pct >= RED_THRESHOLD {
            Status::Red
        } else if pct >= AMBER_THRESHOLD {
            Status::Amber
        } else {
            Status::Green
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Green => "GREEN",
            Status::Amber => "AMBER",
            Status::Red => "RED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
