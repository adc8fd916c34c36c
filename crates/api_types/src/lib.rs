use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Traffic-light status of a WIP figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Green,
    Amber,
    Red,
}

pub mod time {
    use super::*;

    /// Request body for logging a block of minutes.
    ///
    /// Values are taken as sent; the engine checks `minutes` is within
    /// `1..=480` and `activity_type` is one of `switch`, `quick`, `keypad`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct QuickLogInput {
        pub matter_id: Uuid,
        pub minutes: i64,
        pub activity_type: String,
    }

    /// Request body for starting the on/off timer.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ClockInInput {
        pub matter_id: Uuid,
    }

    /// A logged entry as handed to a WIP report.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct TimeEntryInput {
        /// Matter the time was logged on; entries without one are kept
        /// whatever matter is reported.
        #[serde(default)]
        pub matter_id: Option<Uuid>,
        /// Missing or `null` minutes count as 0.
        #[serde(default)]
        pub minutes: Option<u32>,
        /// Bucket label, e.g. `"Tax Research"`.
        pub bucket: String,
        #[serde(default)]
        pub activity_type: Option<String>,
        /// RFC3339 timestamp, including timezone offset (local user time).
        #[serde(default)]
        pub created_at: Option<DateTime<FixedOffset>>,
    }
}

pub mod wip {
    use super::*;

    /// Query for the WIP report of a matter.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct WipSummaryQuery {
        pub matter_id: Uuid,
    }

    /// Request body for setting a matter's dollar cap. Must be > 0.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct NewWipTargetInput {
        pub matter_id: Uuid,
        pub cap_amount: f64,
    }

    /// One bucket's row of the report.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct WipBucketView {
        pub bucket: String,
        pub minutes: u64,
        pub hours: f64,
        pub amount: f64,
        pub pct: f64,
        pub status: Status,
    }

    /// Response body of a WIP report.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct WipSummaryResponse {
        /// Overall dollars.
        pub amount: f64,
        /// Overall cap in dollars, 0 when the matter has no target.
        pub cap: f64,
        /// Fraction of the cap consumed.
        pub pct: f64,
        pub status: Status,
        pub minutes: u64,
        pub hours: f64,
        /// Hourly rate assumed for the report.
        #[serde(rename = "ratePerHour")]
        pub rate_per_hour: f64,
        pub buckets: Vec<WipBucketView>,
    }
}
