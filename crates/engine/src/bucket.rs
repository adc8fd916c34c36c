//! Work classification buckets.
//!
//! Every time entry is filed under exactly one bucket. The set is closed:
//! labels outside of it are rejected when parsed.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// The kind of work performed.
///
/// Variants are declared in report order, so the derived `Ord` matches
/// [`Bucket::ALL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "HLB Thinking")]
    HlbThinking,
    #[serde(rename = "Workshop / Whiteboard session")]
    Workshop,
    #[serde(rename = "Morgan Stanley Eng Letter")]
    MsEngLetter,
    #[serde(rename = "Tax Research")]
    TaxResearch,
}

impl Bucket {
    /// Every bucket, in the order summaries report them.
    pub const ALL: [Bucket; 4] = [
        Bucket::HlbThinking,
        Bucket::Workshop,
        Bucket::MsEngLetter,
        Bucket::TaxResearch,
    ];

    /// Human label, also used on the wire.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Bucket::HlbThinking => "HLB Thinking",
            Bucket::Workshop => "Workshop / Whiteboard session",
            Bucket::MsEngLetter => "Morgan Stanley Eng Letter",
            Bucket::TaxResearch => "Tax Research",
        }
    }

    /// Returns `true` if `label` names a bucket.
    #[must_use]
    pub fn is_bucket(label: &str) -> bool {
        Bucket::try_from(label).is_ok()
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Bucket {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Bucket::ALL
            .into_iter()
            .find(|bucket| bucket.label() == value)
            .ok_or_else(|| EngineError::InvalidBucket(value.to_string()))
    }
}

impl FromStr for Bucket {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bucket::try_from(s)
    }
}
