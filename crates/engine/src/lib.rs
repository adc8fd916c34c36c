//! WIP exposure engine.
//!
//! Turns logged time into dollar exposure against a matter's cap, with a
//! GREEN/AMBER/RED status per bucket and for the whole matter.
//!
//! The computation in [`wip`] is pure: it does no I/O, keeps no state and
//! reads no clock. [`Engine`] only adds the rate card lookup in front of it.

pub use activity::ActivityType;
pub use bucket::Bucket;
pub use commands::{ClockIn, NewWipTarget, QUICK_LOG_MINUTES, QuickLog, WipQuery};
pub use entry::{Bucketed, Classified, Effort, EntryMinutes, TimeEntry, classify};
pub use error::EngineError;
pub use matter::{Matter, WipTarget};
pub use money::Dollars;
pub use rates::{Rate, RateCard};
pub use status::{AMBER_THRESHOLD, RED_THRESHOLD, Status};
pub use timer::SwitchTimer;
pub use users::Role;
pub use wip::{
    BucketCaps, WipBucketSummary, WipSummary, aggregate_buckets, amount_for, combine,
    compute_bucketed_wip_summary, compute_wip_summary, pct_of_cap,
};

mod activity;
mod bucket;
mod commands;
mod entry;
mod error;
mod matter;
mod money;
mod rates;
mod status;
mod timer;
mod users;
mod util;
pub mod wip;

type ResultEngine<T> = Result<T, EngineError>;

/// Rate-aware front of the WIP computation.
///
/// Holds nothing but an immutable rate card, so a single instance can be
/// shared across threads and called concurrently.
#[derive(Debug, Default)]
pub struct Engine {
    rates: RateCard,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn rates(&self) -> &RateCard {
        &self.rates
    }

    /// Hourly rate applied to `role` at `query.as_of`.
    pub fn rate_for(&self, query: &WipQuery) -> ResultEngine<f64> {
        self.rates.resolve(query.role, query.as_of)
    }

    /// Full WIP report of `entries` for the matter in `query`.
    ///
    /// Entries of other matters must already be filtered out by the caller.
    pub fn wip_summary<E: Bucketed>(&self, query: &WipQuery, entries: &[E]) -> ResultEngine<WipSummary> {
        let rate = self.rate_for(query)?;
        Ok(summarize(query, rate, entries))
    }
}

/// Report for `query` at an already resolved `rate`.
pub fn summarize<E: Bucketed>(query: &WipQuery, rate: f64, entries: &[E]) -> WipSummary {
    let cap = WipTarget::cap_or_zero(query.target.as_ref());
    let uniform;
    let bucket_caps = match &query.bucket_caps {
        Some(caps) => caps,
        None => {
            uniform = BucketCaps::uniform(cap);
            &uniform
        }
    };
    compute_bucketed_wip_summary(entries, rate, cap, bucket_caps)
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    rates: Vec<Rate>,
}

impl EngineBuilder {
    /// Add one rate to the card.
    pub fn rate(mut self, rate: Rate) -> EngineBuilder {
        self.rates.push(rate);
        self
    }

    /// Add several rates to the card.
    pub fn rates(mut self, rates: impl IntoIterator<Item = Rate>) -> EngineBuilder {
        self.rates.extend(rates);
        self
    }

    /// Construct `Engine`, rejecting duplicated or invalid rates.
    pub fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            rates: RateCard::from_rates(self.rates)?,
        })
    }
}
