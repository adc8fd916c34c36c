//! Property-based tests for the WIP computation.
//!
//! These tests verify additivity, zero-cap safety and monotonicity over
//! random entry lists using proptest.

use proptest::prelude::*;

use engine::{
    Bucket, BucketCaps, Classified, EntryMinutes, Status, compute_bucketed_wip_summary,
    compute_wip_summary,
};

/// Strategy for one entry's minutes, sometimes missing.
fn entry_minutes() -> impl Strategy<Value = EntryMinutes> {
    prop::option::weighted(0.9, 0u32..=600).prop_map(|minutes| EntryMinutes { minutes })
}

fn entries() -> impl Strategy<Value = Vec<EntryMinutes>> {
    prop::collection::vec(entry_minutes(), 0..50)
}

fn bucket() -> impl Strategy<Value = Bucket> {
    prop::sample::select(Bucket::ALL.to_vec())
}

fn rate() -> impl Strategy<Value = f64> {
    0.0f64..2_000.0
}

fn cap() -> impl Strategy<Value = f64> {
    1.0f64..1_000_000.0
}

proptest! {
    /// Property: minutes of two halves add up to the minutes of the whole.
    #[test]
    fn prop_minutes_are_additive(
        list in entries(),
        split in any::<prop::sample::Index>(),
        rate in rate(),
        cap in cap(),
    ) {
        let at = split.index(list.len() + 1);
        let (left, right) = list.split_at(at);

        let whole = compute_wip_summary(&list, rate, cap);
        let left = compute_wip_summary(left, rate, cap);
        let right = compute_wip_summary(right, rate, cap);

        prop_assert_eq!(left.minutes + right.minutes, whole.minutes);
    }

    /// Property: a zero cap never produces NaN or infinity.
    #[test]
    fn prop_zero_cap_is_safe(list in entries(), rate in rate()) {
        let summary = compute_wip_summary(&list, rate, 0.0);
        prop_assert_eq!(summary.pct, 0.0);
        prop_assert!(summary.amount.is_finite());
        prop_assert_eq!(summary.status, Status::Green);
    }

    /// Property: more minutes never lower amount, pct or status.
    #[test]
    fn prop_monotonic_in_minutes(
        list in entries(),
        extra in 0u32..=10_000,
        rate in rate(),
        cap in cap(),
    ) {
        let before = compute_wip_summary(&list, rate, cap);
        let mut grown = list.clone();
        grown.push(EntryMinutes::new(extra));
        let after = compute_wip_summary(&grown, rate, cap);

        prop_assert!(after.minutes >= before.minutes);
        prop_assert!(after.amount >= before.amount);
        prop_assert!(after.pct >= before.pct);
        prop_assert!(after.status >= before.status);
    }

    /// Property: bucket rows account for every minute exactly once.
    #[test]
    fn prop_buckets_sum_to_total(
        tagged in prop::collection::vec((bucket(), entry_minutes()), 0..50),
        rate in rate(),
        cap in cap(),
    ) {
        let entries: Vec<Classified<EntryMinutes>> = tagged
            .into_iter()
            .map(|(bucket, entry)| Classified { bucket, entry })
            .collect();

        let summary = compute_bucketed_wip_summary(&entries, rate, cap, &BucketCaps::uniform(cap));
        let flat = compute_wip_summary(&entries, rate, cap);

        prop_assert_eq!(summary.buckets.len(), Bucket::ALL.len());
        let rows: u64 = summary.buckets.iter().map(|row| row.minutes).sum();
        prop_assert_eq!(rows, summary.minutes);
        prop_assert_eq!(summary.minutes, flat.minutes);
        prop_assert_eq!(summary.amount, flat.amount);
        for row in &summary.buckets {
            prop_assert!(row.pct <= summary.pct);
        }
    }
}
