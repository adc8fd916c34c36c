//! `summary` and `demo` commands.

use std::io::{Read, Write};

use api_types::time::TimeEntryInput;
use chrono::{DateTime, Utc};
use engine::{
    Classified, Dollars, Engine, EntryMinutes, NewWipTarget, WipQuery, WipSummary, WipTarget,
    compute_wip_summary, summarize,
};
use uuid::Uuid;

use crate::{
    SummaryArgs, convert,
    error::{AppError, Result},
    settings::Settings,
};

/// Reads `path`, or standard input when `path` is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

pub fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Entries of `matter`, tagged with their bucket.
fn load_entries(raw: &str, matter: Option<Uuid>) -> Result<Vec<Classified<EntryMinutes>>> {
    let inputs: Vec<TimeEntryInput> = serde_json::from_str(raw)?;
    let total = inputs.len();
    let entries = inputs
        .iter()
        .filter(|input| match (matter, input.matter_id) {
            (Some(wanted), Some(logged)) => wanted == logged,
            _ => true,
        })
        .map(convert::tagged_entry)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    tracing::debug!("loaded {} of {total} entries", entries.len());
    Ok(entries)
}

fn parse_at(raw: Option<&str>) -> Result<DateTime<Utc>> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|at| at.with_timezone(&Utc))
            .map_err(|err| AppError::Usage(format!("invalid --at {raw}: {err}"))),
        None => Ok(Utc::now()),
    }
}

/// Engine over the configured rate card, which must not be empty.
fn rate_engine(settings: &Settings) -> Result<Engine> {
    let engine = Engine::builder().rates(settings.rates()?).build()?;
    if engine.rates().is_empty() {
        return Err(AppError::Usage(
            "no rates configured: add [[rates]] to the settings or pass --rate".to_string(),
        ));
    }
    Ok(engine)
}

pub fn summary(args: SummaryArgs, settings: &Settings) -> Result<WipSummary> {
    let matter_id = args.matter.unwrap_or_else(Uuid::nil);
    let entries = load_entries(&read_input(&args.entries)?, args.matter)?;
    let as_of = parse_at(args.at.as_deref())?;

    let mut query = WipQuery::new(matter_id, args.role, as_of);
    match args.cap.as_deref() {
        Some(raw) => {
            let cap: Dollars = raw.parse()?;
            let target: WipTarget = NewWipTarget::new(matter_id, cap.value())?.into();
            query = query.target(target);
        }
        None => tracing::warn!("no cap given, pct is reported as 0"),
    }

    let summary = match args.rate.as_deref() {
        Some(raw) => {
            let rate: Dollars = raw.parse()?;
            if rate.value() < 0.0 {
                return Err(AppError::Usage(format!("--rate must be >= 0, got {rate}")));
            }
            tracing::debug!("using explicit rate {rate}");
            summarize(&query, rate.value(), &entries)
        }
        None => {
            let engine = rate_engine(settings)?;
            tracing::debug!(
                "resolved {} rate {}",
                query.role,
                Dollars::new(engine.rate_for(&query)?)
            );
            engine.wip_summary(&query, &entries)?
        }
    };

    tracing::info!(
        "WIP {} of cap {} ({:.1}%): {}",
        Dollars::new(summary.amount),
        Dollars::new(summary.cap),
        summary.pct * 100.0,
        summary.status
    );
    Ok(summary)
}

/// 45 + 60 minutes at $150/h against a $5,000 cap.
pub fn demo() -> WipSummary {
    let entries = [EntryMinutes::new(45), EntryMinutes::new(60)];
    compute_wip_summary(&entries, 150.0, 5000.0)
}

#[cfg(test)]
mod tests {
    use engine::{Bucket, Status};

    use super::*;

    #[test]
    fn demo_matches_reference() {
        let summary = demo();
        assert_eq!(summary.amount, 262.5);
        assert_eq!(summary.pct, 0.0525);
        assert_eq!(summary.status, Status::Green);
    }

    #[test]
    fn load_entries_filters_other_matters() {
        let matter = Uuid::new_v4();
        let raw = format!(
            r#"[
                {{"matter_id": "{matter}", "minutes": 45, "bucket": "HLB Thinking"}},
                {{"matter_id": "{other}", "minutes": 60, "bucket": "HLB Thinking"}},
                {{"bucket": "Tax Research"}}
            ]"#,
            other = Uuid::new_v4()
        );
        let entries = load_entries(&raw, Some(matter)).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entry.minutes, Some(45));
        assert_eq!(entries[1].bucket, Bucket::TaxResearch);
        assert_eq!(entries[1].entry.minutes, None);

        assert_eq!(load_entries(&raw, None).unwrap().len(), 3);
    }

    #[test]
    fn load_entries_rejects_unknown_bucket() {
        let err = load_entries(r#"[{"minutes": 5, "bucket": "Lunch"}]"#, None).unwrap_err();
        assert!(matches!(err, AppError::Engine(_)));
    }

    #[test]
    fn rate_engine_needs_a_rate_card() {
        assert!(matches!(
            rate_engine(&Settings::default()),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn parse_at_accepts_offsets() {
        let at = parse_at(Some("2025-03-01T10:00:00+01:00")).unwrap();
        assert_eq!(at.to_rfc3339(), "2025-03-01T09:00:00+00:00");
        assert!(parse_at(Some("yesterday")).is_err());
    }
}
