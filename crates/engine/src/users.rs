//! Billing roles.
//!
//! Only what the WIP computation needs is modelled here: the role decides
//! which hourly rate applies. Credentials live with the identity layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Billing role of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Staff,
    Manager,
    Partner,
    BillingAdmin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::Manager => "MANAGER",
            Role::Partner => "PARTNER",
            Role::BillingAdmin => "BILLING_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Role {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "STAFF" => Ok(Role::Staff),
            "MANAGER" => Ok(Role::Manager),
            "PARTNER" => Ok(Role::Partner),
            "BILLING_ADMIN" => Ok(Role::BillingAdmin),
            _ => Err(EngineError::InvalidRole(value.to_string())),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::try_from(s)
    }
}
