//! Mapping between the wire shapes in `api_types` and engine values.

use api_types::{
    time::{ClockInInput, QuickLogInput, TimeEntryInput},
    wip::{NewWipTargetInput, WipBucketView, WipSummaryResponse},
};
use engine::{
    ActivityType, Bucket, Classified, ClockIn, EngineError, EntryMinutes, NewWipTarget, QuickLog,
    Status, WipBucketSummary, WipSummary,
};

pub fn status_view(status: Status) -> api_types::Status {
    match status {
        Status::Green => api_types::Status::Green,
        Status::Amber => api_types::Status::Amber,
        Status::Red => api_types::Status::Red,
    }
}

pub fn bucket_view(row: &WipBucketSummary) -> WipBucketView {
    WipBucketView {
        bucket: row.bucket.label().to_string(),
        minutes: row.minutes,
        hours: row.hours,
        amount: row.amount,
        pct: row.pct,
        status: status_view(row.status),
    }
}

pub fn summary_response(summary: &WipSummary) -> WipSummaryResponse {
    WipSummaryResponse {
        amount: summary.amount,
        cap: summary.cap,
        pct: summary.pct,
        status: status_view(summary.status),
        minutes: summary.minutes,
        hours: summary.hours,
        rate_per_hour: summary.rate_per_hour,
        buckets: summary.buckets.iter().map(bucket_view).collect(),
    }
}

/// Entry filed under the bucket its label names.
///
/// An activity type, when present, must belong to the closed set.
pub fn tagged_entry(input: &TimeEntryInput) -> Result<Classified<EntryMinutes>, EngineError> {
    if let Some(activity) = input.activity_type.as_deref() {
        ActivityType::try_from(activity)?;
    }
    Ok(Classified {
        bucket: Bucket::try_from(input.bucket.as_str())?,
        entry: EntryMinutes {
            minutes: input.minutes,
        },
    })
}

pub fn quick_log(input: &QuickLogInput) -> Result<QuickLog, EngineError> {
    QuickLog::new(input.matter_id, input.minutes, &input.activity_type)
}

pub fn clock_in(input: &ClockInInput) -> ClockIn {
    ClockIn::new(input.matter_id)
}

pub fn new_target(input: &NewWipTargetInput) -> Result<NewWipTarget, EngineError> {
    NewWipTarget::new(input.matter_id, input.cap_amount)
}
