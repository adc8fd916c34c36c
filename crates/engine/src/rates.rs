//! Hourly rates per role.
//!
//! A `RateCard` keeps every rate ever published. The rate for a role at a
//! given instant is the one with the latest `effective_from` not after that
//! instant, so publishing a new rate never rewrites history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Dollars, EngineError, ResultEngine, Role, util::validate_rate};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rate {
    pub role: Role,
    pub hourly_rate: Dollars,
    pub effective_from: DateTime<Utc>,
}

impl Rate {
    pub fn new(role: Role, hourly_rate: Dollars, effective_from: DateTime<Utc>) -> ResultEngine<Self> {
        validate_rate(hourly_rate.value())?;
        Ok(Self {
            role,
            hourly_rate,
            effective_from,
        })
    }
}

/// Rates sorted by role, then `effective_from`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RateCard {
    rates: Vec<Rate>,
}

impl RateCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a card from `rates`, rejecting duplicates.
    pub fn from_rates(rates: impl IntoIterator<Item = Rate>) -> ResultEngine<Self> {
        let mut card = Self::new();
        for rate in rates {
            card.insert(rate)?;
        }
        Ok(card)
    }

    /// Adds a rate. Two rates for the same role cannot start at the same
    /// instant.
    pub fn insert(&mut self, rate: Rate) -> ResultEngine<()> {
        validate_rate(rate.hourly_rate.value())?;
        let key = (rate.role, rate.effective_from);
        match self
            .rates
            .binary_search_by(|probe| (probe.role, probe.effective_from).cmp(&key))
        {
            Ok(_) => Err(EngineError::ExistingKey(format!(
                "{} rate from {}",
                rate.role,
                rate.effective_from.to_rfc3339()
            ))),
            Err(index) => {
                self.rates.insert(index, rate);
                Ok(())
            }
        }
    }

    /// The rate record effective for `role` at `at`.
    pub fn effective(&self, role: Role, at: DateTime<Utc>) -> ResultEngine<&Rate> {
        self.rates
            .iter()
            .filter(|rate| rate.role == role && rate.effective_from <= at)
            .max_by_key(|rate| rate.effective_from)
            .ok_or_else(|| {
                EngineError::RateNotFound(format!(
                    "no {role} rate effective at {}",
                    at.to_rfc3339()
                ))
            })
    }

    /// Hourly rate, in dollars, for `role` at `at`.
    pub fn resolve(&self, role: Role, at: DateTime<Utc>) -> ResultEngine<f64> {
        self.effective(role, at)
            .map(|rate| rate.hourly_rate.value())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
