//! `validate` command: run the engine's request rules over a JSON body.

use api_types::{
    time::{ClockInInput, QuickLogInput},
    wip::{NewWipTargetInput, WipSummaryQuery},
};
use clap::ValueEnum;
use serde_json::{Value, json};

use crate::{convert, error::Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RequestKind {
    QuickLog,
    ClockIn,
    WipQuery,
    NewTarget,
}

/// Parses `raw` as a `kind` request and returns its normalized form.
pub fn validate(kind: RequestKind, raw: &str) -> Result<Value> {
    let normalized = match kind {
        RequestKind::QuickLog => {
            let input: QuickLogInput = serde_json::from_str(raw)?;
            let log = convert::quick_log(&input)?;
            json!({
                "matter_id": log.matter_id,
                "minutes": log.minutes,
                "activity_type": log.activity_type.as_str(),
            })
        }
        RequestKind::ClockIn => {
            let input: ClockInInput = serde_json::from_str(raw)?;
            json!({ "matter_id": convert::clock_in(&input).matter_id })
        }
        RequestKind::WipQuery => {
            let input: WipSummaryQuery = serde_json::from_str(raw)?;
            json!({ "matter_id": input.matter_id })
        }
        RequestKind::NewTarget => {
            let input: NewWipTargetInput = serde_json::from_str(raw)?;
            let target = convert::new_target(&input)?;
            json!({
                "matter_id": target.matter_id,
                "cap_amount": target.cap_amount,
            })
        }
    };
    tracing::info!("{kind:?} request is valid");
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    const MATTER: &str = "0b7c6f0e-4f5d-4e38-9a3e-2d1f0c9b8a7e";

    #[test]
    fn quick_log_ok() {
        let raw = format!(r#"{{"matter_id": "{MATTER}", "minutes": 30, "activity_type": "quick"}}"#);
        let value = validate(RequestKind::QuickLog, &raw).unwrap();
        assert_eq!(value["minutes"], 30);
        assert_eq!(value["activity_type"], "quick");
        assert_eq!(value["matter_id"], MATTER);
    }

    #[test]
    fn quick_log_out_of_range() {
        let raw = format!(r#"{{"matter_id": "{MATTER}", "minutes": 500, "activity_type": "keypad"}}"#);
        assert!(matches!(
            validate(RequestKind::QuickLog, &raw),
            Err(AppError::Engine(engine::EngineError::InvalidMinutes(_)))
        ));
    }

    #[test]
    fn new_target_must_be_positive() {
        let raw = format!(r#"{{"matter_id": "{MATTER}", "cap_amount": 0}}"#);
        assert!(validate(RequestKind::NewTarget, &raw).is_err());

        let raw = format!(r#"{{"matter_id": "{MATTER}", "cap_amount": 5000}}"#);
        let value = validate(RequestKind::NewTarget, &raw).unwrap();
        assert_eq!(value["cap_amount"], 5000.0);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            validate(RequestKind::ClockIn, r#"{"matter": 1}"#),
            Err(AppError::Json(_))
        ));
        assert!(validate(RequestKind::WipQuery, &format!(r#"{{"matter_id": "{MATTER}"}}"#)).is_ok());
    }
}
