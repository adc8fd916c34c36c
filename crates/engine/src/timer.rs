//! On/off timer behind SWITCH entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ActivityType, Bucket, EngineError, ResultEngine, TimeEntry};

/// A running clock-in. Stopping it yields the SWITCH entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchTimer {
    pub matter_id: Uuid,
    pub user_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl SwitchTimer {
    #[must_use]
    pub const fn start(matter_id: Uuid, user_id: Uuid, started_at: DateTime<Utc>) -> Self {
        Self {
            matter_id,
            user_id,
            started_at,
        }
    }

    /// Whole minutes elapsed until `at`; partial minutes are dropped.
    pub fn elapsed_minutes(&self, at: DateTime<Utc>) -> ResultEngine<u32> {
        if at < self.started_at {
            return Err(EngineError::InvalidTimer(format!(
                "clock-out {} is before clock-in {}",
                at.to_rfc3339(),
                self.started_at.to_rfc3339()
            )));
        }
        let minutes = (at - self.started_at).num_minutes();
        u32::try_from(minutes)
            .map_err(|_| EngineError::InvalidTimer(format!("timer ran for {minutes} minutes")))
    }

    /// Clock out at `ended_at`, filing the time under `bucket`.
    pub fn stop(self, ended_at: DateTime<Utc>, bucket: Bucket) -> ResultEngine<TimeEntry> {
        let minutes = self.elapsed_minutes(ended_at)?;
        let mut entry = TimeEntry::new(
            self.user_id,
            self.matter_id,
            ActivityType::Switch,
            bucket,
            minutes,
            ended_at,
        );
        entry.started_at = Some(self.started_at);
        entry.ended_at = Some(ended_at);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::ClockIn;

    fn started() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn stop_floors_partial_minutes() {
        let timer = ClockIn::new(Uuid::new_v4()).start(Uuid::new_v4(), started());
        let ended = started() + Duration::minutes(47) + Duration::seconds(59);
        let entry = timer.stop(ended, Bucket::HlbThinking).unwrap();

        assert_eq!(entry.minutes, 47);
        assert_eq!(entry.activity_type, ActivityType::Switch);
        assert_eq!(entry.started_at, Some(started()));
        assert_eq!(entry.ended_at, Some(ended));
        assert_eq!(entry.matter_id, timer.matter_id);
    }

    #[test]
    fn zero_length_session() {
        let timer = SwitchTimer::start(Uuid::new_v4(), Uuid::new_v4(), started());
        assert_eq!(timer.elapsed_minutes(started()).unwrap(), 0);
    }

    #[test]
    #[should_panic(expected = "InvalidTimer")]
    fn fail_stop_before_start() {
        let timer = SwitchTimer::start(Uuid::new_v4(), Uuid::new_v4(), started());
        timer
            .stop(started() - Duration::minutes(1), Bucket::TaxResearch)
            .unwrap();
    }
}
