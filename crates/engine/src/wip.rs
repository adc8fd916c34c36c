//! WIP (work in progress) exposure.
//!
//! Two cooperating computations, both pure:
//!
//! - the bucket aggregator ([`aggregate_buckets`]) groups entries by
//!   [`Bucket`], sums minutes and prices them at the hourly rate;
//! - the summary combiner ([`combine`]) rolls bucket rows into the matter
//!   total against the matter cap.
//!
//! Amounts are `(minutes / 60) * rate` in unrounded `f64` dollars. The
//! fraction of cap is `amount / cap` when `cap > 0` and `0` otherwise, so
//! a missing cap never yields `NaN` or infinity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    Bucket, Status,
    entry::{Bucketed, Effort, total_minutes},
};

const MINUTES_PER_HOUR: f64 = 60.0;

/// One bucket's row of a WIP report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WipBucketSummary {
    pub bucket: Bucket,
    pub minutes: u64,
    pub hours: f64,
    pub amount: f64,
    pub pct: f64,
    pub status: Status,
}

impl WipBucketSummary {
    fn new(bucket: Bucket, minutes: u64, rate_per_hour: f64, cap: f64) -> Self {
        let Figures {
            hours,
            amount,
            pct,
            status,
        } = Figures::new(minutes, rate_per_hour, cap);
        Self {
            bucket,
            minutes,
            hours,
            amount,
            pct,
            status,
        }
    }
}

/// Full WIP report of a matter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WipSummary {
    pub amount: f64,
    pub cap: f64,
    pub pct: f64,
    pub status: Status,
    pub minutes: u64,
    pub hours: f64,
    #[serde(rename = "ratePerHour")]
    pub rate_per_hour: f64,
    pub buckets: Vec<WipBucketSummary>,
}

impl WipSummary {
    fn new(minutes: u64, rate_per_hour: f64, cap: f64, buckets: Vec<WipBucketSummary>) -> Self {
        let Figures {
            hours,
            amount,
            pct,
            status,
        } = Figures::new(minutes, rate_per_hour, cap);
        Self {
            amount,
            cap,
            pct,
            status,
            minutes,
            hours,
            rate_per_hour,
            buckets,
        }
    }

    /// Row of `bucket`, if the report has a breakdown.
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> Option<&WipBucketSummary> {
        self.buckets.iter().find(|row| row.bucket == bucket)
    }
}

/// Derived numbers shared by bucket rows and matter totals.
struct Figures {
    hours: f64,
    amount: f64,
    pct: f64,
    status: Status,
}

impl Figures {
    fn new(minutes: u64, rate_per_hour: f64, cap: f64) -> Self {
        let hours = minutes as f64 / MINUTES_PER_HOUR;
        let amount = amount_for(minutes, rate_per_hour);
        let pct = pct_of_cap(amount, cap);
        Self {
            hours,
            amount,
            pct,
            status: Status::from_pct(pct),
        }
    }
}

/// Dollar amount of `minutes` at `rate_per_hour`.
#[must_use]
pub fn amount_for(minutes: u64, rate_per_hour: f64) -> f64 {
    (minutes as f64 / MINUTES_PER_HOUR) * rate_per_hour
}

/// Fraction of `cap` consumed by `amount`; `0` unless `cap > 0`.
#[must_use]
pub fn pct_of_cap(amount: f64, cap: f64) -> f64 {
    if cap > 0.0 { amount / cap } else { 0.0 }
}

/// Per-bucket caps. Buckets without a cap are measured against 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketCaps(BTreeMap<Bucket, f64>);

impl BucketCaps {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every bucket measured against the same cap (usually the matter's).
    #[must_use]
    pub fn uniform(cap: f64) -> Self {
        Bucket::ALL.into_iter().map(|bucket| (bucket, cap)).collect()
    }

    #[must_use]
    pub fn with(mut self, bucket: Bucket, cap: f64) -> Self {
        self.0.insert(bucket, cap);
        self
    }

    #[must_use]
    pub fn get(&self, bucket: Bucket) -> f64 {
        self.0.get(&bucket).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(Bucket, f64)> for BucketCaps {
    fn from_iter<T: IntoIterator<Item = (Bucket, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Groups `entries` by bucket and prices each group.
///
/// Always returns one row per bucket, in [`Bucket::ALL`] order, including
/// buckets without entries (all zero, GREEN).
pub fn aggregate_buckets<E: Bucketed>(
    entries: &[E],
    rate_per_hour: f64,
    caps: &BucketCaps,
) -> Vec<WipBucketSummary> {
    let mut minutes: BTreeMap<Bucket, u64> = BTreeMap::new();
    for entry in entries {
        *minutes.entry(entry.bucket()).or_default() += u64::from(entry.minutes().unwrap_or(0));
    }

    Bucket::ALL
        .into_iter()
        .map(|bucket| {
            WipBucketSummary::new(
                bucket,
                minutes.get(&bucket).copied().unwrap_or(0),
                rate_per_hour,
                caps.get(bucket),
            )
        })
        .collect()
}

/// Rolls bucket rows into the matter report.
///
/// The matter's minutes are the sum of the rows' minutes; amount, fraction
/// and status are recomputed from that total with the matter `cap`.
pub fn combine(buckets: Vec<WipBucketSummary>, rate_per_hour: f64, cap: f64) -> WipSummary {
    let minutes = buckets.iter().map(|row| row.minutes).sum();
    WipSummary::new(minutes, rate_per_hour, cap, buckets)
}

/// Matter report from untagged entries. The bucket list is empty.
///
/// ```rust
/// use engine::{EntryMinutes, Status, compute_wip_summary};
///
/// let entries = [EntryMinutes::new(45), EntryMinutes::new(60)];
/// let summary = compute_wip_summary(&entries, 150.0, 5000.0);
/// assert_eq!(summary.amount, 262.5);
/// assert_eq!(summary.pct, 0.0525);
/// assert_eq!(summary.status, Status::Green);
/// ```
pub fn compute_wip_summary<E: Effort>(entries: &[E], rate_per_hour: f64, cap: f64) -> WipSummary {
    WipSummary::new(total_minutes(entries), rate_per_hour, cap, Vec::new())
}

/// Matter report with the per-bucket breakdown.
pub fn compute_bucketed_wip_summary<E: Bucketed>(
    entries: &[E],
    rate_per_hour: f64,
    cap: f64,
    bucket_caps: &BucketCaps,
) -> WipSummary {
    combine(
        aggregate_buckets(entries, rate_per_hour, bucket_caps),
        rate_per_hour,
        cap,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Classified, EntryMinutes};

    fn tagged(bucket: Bucket, minutes: u32) -> Classified<EntryMinutes> {
        Classified {
            bucket,
            entry: EntryMinutes::new(minutes),
        }
    }

    #[test]
    fn reference_scenario() {
        let entries = [EntryMinutes::new(45), EntryMinutes::new(60)];
        let summary = compute_wip_summary(&entries, 150.0, 5000.0);

        assert_eq!(summary.minutes, 105);
        assert_eq!(summary.hours, 1.75);
        assert_eq!(summary.amount, 262.5);
        assert_eq!(summary.pct, 0.0525);
        assert_eq!(summary.status, Status::Green);
        assert_eq!(summary.cap, 5000.0);
        assert_eq!(summary.rate_per_hour, 150.0);
        assert!(summary.buckets.is_empty());
    }

    #[test]
    fn empty_entries() {
        let entries: [EntryMinutes; 0] = [];
        let summary = compute_wip_summary(&entries, 275.0, 5000.0);
        assert_eq!(summary.amount, 0.0);
        assert_eq!(summary.pct, 0.0);
        assert_eq!(summary.status, Status::Green);
    }

    #[test]
    fn cap_breach_is_red() {
        let summary = compute_wip_summary(&[2400u32], 150.0, 5000.0);
        assert_eq!(summary.amount, 6000.0);
        assert_eq!(summary.pct, 1.2);
        assert_eq!(summary.status, Status::Red);
    }

    #[test]
    fn zero_or_negative_cap_gives_zero_pct() {
        for cap in [0.0, -100.0, f64::NAN] {
            let summary = compute_wip_summary(&[600u32], 150.0, cap);
            assert_eq!(summary.pct, 0.0);
            assert_eq!(summary.status, Status::Green);
        }
    }

    #[test]
    fn aggregator_emits_every_bucket_in_order() {
        let entries = [tagged(Bucket::TaxResearch, 30)];
        let rows = aggregate_buckets(&entries, 100.0, &BucketCaps::uniform(1000.0));

        let buckets: Vec<Bucket> = rows.iter().map(|row| row.bucket).collect();
        assert_eq!(buckets, Bucket::ALL.to_vec());
        assert_eq!(rows[3].minutes, 30);
        assert_eq!(rows[3].amount, 50.0);
        assert_eq!(rows[3].pct, 0.05);
        for row in &rows[..3] {
            assert_eq!(row.minutes, 0);
            assert_eq!(row.amount, 0.0);
            assert_eq!(row.status, Status::Green);
        }
    }

    #[test]
    fn bucket_status_uses_its_own_cap() {
        let entries = [
            tagged(Bucket::HlbThinking, 60),
            tagged(Bucket::Workshop, 60),
        ];
        let caps = BucketCaps::new()
            .with(Bucket::HlbThinking, 100.0)
            .with(Bucket::Workshop, 1000.0);
        let rows = aggregate_buckets(&entries, 90.0, &caps);

        assert_eq!(rows[0].pct, 0.9);
        assert_eq!(rows[0].status, Status::Red);
        assert_eq!(rows[1].pct, 0.09);
        assert_eq!(rows[1].status, Status::Green);
        // No cap set for the remaining buckets.
        assert_eq!(rows[2].pct, 0.0);
    }

    #[test]
    fn combined_minutes_match_raw_total() {
        let entries = [
            tagged(Bucket::HlbThinking, 45),
            tagged(Bucket::Workshop, 60),
            tagged(Bucket::HlbThinking, 15),
            Classified {
                bucket: Bucket::MsEngLetter,
                entry: EntryMinutes { minutes: None },
            },
        ];
        let bucketed = compute_bucketed_wip_summary(&entries, 150.0, 5000.0, &BucketCaps::new());
        let flat = compute_wip_summary(&entries, 150.0, 5000.0);

        assert_eq!(bucketed.minutes, 120);
        assert_eq!(bucketed.minutes, flat.minutes);
        assert_eq!(bucketed.amount, flat.amount);
        assert_eq!(bucketed.bucket(Bucket::HlbThinking).unwrap().minutes, 60);
        assert_eq!(bucketed.bucket(Bucket::MsEngLetter).unwrap().minutes, 0);
    }

    #[test]
    fn amber_band() {
        // 35 hours at 100/h = 3500 of 5000.
        let summary = compute_wip_summary(&[35 * 60u32], 100.0, 5000.0);
        assert_eq!(summary.pct, 0.7);
        assert_eq!(summary.status, Status::Amber);
    }

    #[test]
    fn helpers_agree_with_summary() {
        assert_eq!(amount_for(105, 150.0), 262.5);
        assert_eq!(pct_of_cap(262.5, 5000.0), 0.0525);
        assert_eq!(pct_of_cap(262.5, 0.0), 0.0);
    }
}
