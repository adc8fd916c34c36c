//! The module contains the errors the engine can throw.
//!
//! The WIP computation itself never fails: errors only come from validating
//! the values handed to it (request shapes, rates, targets) and from looking
//! up the rate effective for a role.
//!
//! - [`InvalidMinutes`] thrown when a quick-log is outside `1..=480` minutes.
//! - [`RateNotFound`] thrown when no rate is effective for a role.
//!
//!  [`InvalidMinutes`]: EngineError::InvalidMinutes
//!  [`RateNotFound`]: EngineError::RateNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid minutes: {0}")]
    InvalidMinutes(String),
    #[error("Invalid activity type: {0}")]
    InvalidActivity(String),
    #[error("Invalid bucket: {0}")]
    InvalidBucket(String),
    #[error("Invalid role: {0}")]
    InvalidRole(String),
    #[error("Invalid cap: {0}")]
    InvalidCap(String),
    #[error("Invalid rate: {0}")]
    InvalidRate(String),
    #[error("Rate not found: {0}")]
    RateNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid timer: {0}")]
    InvalidTimer(String),
    #[error("Invalid matter: {0}")]
    InvalidMatter(String),
}
