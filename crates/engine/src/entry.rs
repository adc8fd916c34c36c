//! The module contains the `TimeEntry` type and the traits the WIP
//! computation reads entries through.
//!
//! The computation only ever looks at minutes (and, for the bucket
//! breakdown, the bucket). Anything implementing [`Effort`] can be summed,
//! anything implementing [`Bucketed`] can be broken down per bucket.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ActivityType, Bucket};

/// Something that took a number of minutes.
pub trait Effort {
    /// Minutes logged, `None` when the record carries no value.
    fn minutes(&self) -> Option<u32>;
}

/// An [`Effort`] filed under a bucket.
pub trait Bucketed: Effort {
    fn bucket(&self) -> Bucket;
}

/// Immutable record of effort spent on a matter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub matter_id: Uuid,
    pub activity_type: ActivityType,
    pub bucket: Bucket,
    pub minutes: u32,
    /// Set for [`ActivityType::Switch`] entries.
    pub started_at: Option<DateTime<Utc>>,
    /// Set for [`ActivityType::Switch`] entries.
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TimeEntry {
    pub fn new(
        user_id: Uuid,
        matter_id: Uuid,
        activity_type: ActivityType,
        bucket: Bucket,
        minutes: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            matter_id,
            activity_type,
            bucket,
            minutes,
            started_at: None,
            ended_at: None,
            created_at,
        }
    }
}

impl Effort for TimeEntry {
    fn minutes(&self) -> Option<u32> {
        Some(self.minutes)
    }
}

impl Bucketed for TimeEntry {
    fn bucket(&self) -> Bucket {
        self.bucket
    }
}

/// Bare minutes, as handed over by hosts that only keep the count.
///
/// A missing `minutes` field deserializes to `None` and is summed as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMinutes {
    #[serde(default)]
    pub minutes: Option<u32>,
}

impl EntryMinutes {
    #[must_use]
    pub const fn new(minutes: u32) -> Self {
        Self {
            minutes: Some(minutes),
        }
    }
}

impl Effort for EntryMinutes {
    fn minutes(&self) -> Option<u32> {
        self.minutes
    }
}

impl Effort for u32 {
    fn minutes(&self) -> Option<u32> {
        Some(*self)
    }
}

impl Effort for Option<u32> {
    fn minutes(&self) -> Option<u32> {
        *self
    }
}

impl<E: Effort + ?Sized> Effort for &E {
    fn minutes(&self) -> Option<u32> {
        (**self).minutes()
    }
}

impl<E: Bucketed + ?Sized> Bucketed for &E {
    fn bucket(&self) -> Bucket {
        (**self).bucket()
    }
}

/// An entry paired with the bucket an external classification picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified<E> {
    pub bucket: Bucket,
    pub entry: E,
}

impl<E: Effort> Effort for Classified<E> {
    fn minutes(&self) -> Option<u32> {
        self.entry.minutes()
    }
}

impl<E: Effort> Bucketed for Classified<E> {
    fn bucket(&self) -> Bucket {
        self.bucket
    }
}

/// Tags every entry with the bucket chosen by `classifier`.
///
/// ```rust
/// use engine::{Bucket, EntryMinutes, classify};
///
/// let entries = [EntryMinutes::new(45), EntryMinutes::new(60)];
/// let tagged = classify(&entries, |_| Bucket::TaxResearch);
/// assert!(tagged.iter().all(|e| e.bucket == Bucket::TaxResearch));
/// ```
pub fn classify<'a, E, F>(entries: &'a [E], classifier: F) -> Vec<Classified<&'a E>>
where
    F: Fn(&E) -> Bucket,
{
    entries
        .iter()
        .map(|entry| Classified {
            bucket: classifier(entry),
            entry,
        })
        .collect()
}

/// Sum of minutes; missing values count as 0.
pub(crate) fn total_minutes<E: Effort>(entries: &[E]) -> u64 {
    entries
        .iter()
        .map(|entry| u64::from(entry.minutes().unwrap_or(0)))
        .sum()
}
