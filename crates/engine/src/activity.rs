use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// How a time entry was captured.
///
/// - `Switch`: on/off timer (clock-in, clock-out).
/// - `Quick`: one of the +15/+30/+60 buttons.
/// - `Keypad`: minutes typed in by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Switch,
    Quick,
    Keypad,
}

impl ActivityType {
    /// Minutes offered by the quick buttons.
    pub const QUICK_PRESETS: [u32; 3] = [15, 30, 60];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ActivityType::Switch => "switch",
            ActivityType::Quick => "quick",
            ActivityType::Keypad => "keypad",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActivityType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "switch" => Ok(ActivityType::Switch),
            "quick" => Ok(ActivityType::Quick),
            "keypad" => Ok(ActivityType::Keypad),
            other => Err(EngineError::InvalidActivity(other.to_string())),
        }
    }
}
