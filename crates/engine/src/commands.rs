//! Validated request commands.
//!
//! Hosts turn their request payloads into these types before anything
//! reaches the WIP computation; construction is where the request rules
//! are enforced (minute range, closed activity set, positive caps).

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    ActivityType, Bucket, BucketCaps, Dollars, EngineError, ResultEngine, Role, SwitchTimer,
    TimeEntry, WipTarget,
};

/// Minutes a single quick-log may carry.
pub const QUICK_LOG_MINUTES: RangeInclusive<u32> = 1..=480;

/// Log a block of minutes against a matter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuickLog {
    pub matter_id: Uuid,
    pub minutes: u32,
    pub activity_type: ActivityType,
}

impl QuickLog {
    pub fn new(matter_id: Uuid, minutes: i64, activity_type: &str) -> ResultEngine<Self> {
        let minutes = u32::try_from(minutes)
            .ok()
            .filter(|minutes| QUICK_LOG_MINUTES.contains(minutes))
            .ok_or_else(|| {
                EngineError::InvalidMinutes(format!(
                    "minutes must be between {} and {}, got {minutes}",
                    QUICK_LOG_MINUTES.start(),
                    QUICK_LOG_MINUTES.end()
                ))
            })?;
        Ok(Self {
            matter_id,
            minutes,
            activity_type: ActivityType::try_from(activity_type)?,
        })
    }

    /// Log from one of the quick buttons; `minutes` must be a preset.
    pub fn preset(matter_id: Uuid, minutes: u32) -> ResultEngine<Self> {
        if !ActivityType::QUICK_PRESETS.contains(&minutes) {
            return Err(EngineError::InvalidMinutes(format!(
                "quick buttons log {:?} minutes, got {minutes}",
                ActivityType::QUICK_PRESETS
            )));
        }
        Ok(Self {
            matter_id,
            minutes,
            activity_type: ActivityType::Quick,
        })
    }

    /// The entry this log records, filed under `bucket`.
    #[must_use]
    pub fn into_entry(self, user_id: Uuid, bucket: Bucket, created_at: DateTime<Utc>) -> TimeEntry {
        TimeEntry::new(
            user_id,
            self.matter_id,
            self.activity_type,
            bucket,
            self.minutes,
            created_at,
        )
    }
}

/// Start the on/off timer on a matter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockIn {
    pub matter_id: Uuid,
}

impl ClockIn {
    #[must_use]
    pub const fn new(matter_id: Uuid) -> Self {
        Self { matter_id }
    }

    #[must_use]
    pub fn start(self, user_id: Uuid, started_at: DateTime<Utc>) -> SwitchTimer {
        SwitchTimer::start(self.matter_id, user_id, started_at)
    }
}

/// Set the dollar cap of a matter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewWipTarget {
    pub matter_id: Uuid,
    pub cap_amount: Dollars,
}

impl NewWipTarget {
    pub fn new(matter_id: Uuid, cap_amount: f64) -> ResultEngine<Self> {
        let target = WipTarget::new(matter_id, Dollars::new(cap_amount))?;
        Ok(Self {
            matter_id: target.matter_id,
            cap_amount: target.cap_amount,
        })
    }
}

impl From<NewWipTarget> for WipTarget {
    fn from(value: NewWipTarget) -> Self {
        Self {
            matter_id: value.matter_id,
            cap_amount: value.cap_amount,
        }
    }
}

/// Report the WIP of a matter.
///
/// The rate is looked up for `role` at `as_of`; `target` supplies the cap
/// (none means no cap). Bucket rows are measured against `bucket_caps`
/// when set, else against the matter cap.
#[derive(Clone, Debug, PartialEq)]
pub struct WipQuery {
    pub matter_id: Uuid,
    pub role: Role,
    pub as_of: DateTime<Utc>,
    pub target: Option<WipTarget>,
    pub bucket_caps: Option<BucketCaps>,
}

impl WipQuery {
    #[must_use]
    pub fn new(matter_id: Uuid, role: Role, as_of: DateTime<Utc>) -> Self {
        Self {
            matter_id,
            role,
            as_of,
            target: None,
            bucket_caps: None,
        }
    }

    #[must_use]
    pub fn target(mut self, target: WipTarget) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn bucket_caps(mut self, caps: BucketCaps) -> Self {
        self.bucket_caps = Some(caps);
        self
    }
}
