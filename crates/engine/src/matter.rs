//! Matters and their WIP targets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Dollars, EngineError, ResultEngine,
    util::{normalize_code, normalize_optional_text, validate_cap},
};

/// A billable engagement time is logged against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matter {
    pub id: Uuid,
    /// Normalized short code, e.g. `MAT-ALPHA-001`.
    pub code: String,
    pub display_name: Option<String>,
    pub active: bool,
}

impl Matter {
    pub fn new(code: &str, display_name: Option<&str>) -> ResultEngine<Self> {
        let code = normalize_code(code)
            .ok_or_else(|| EngineError::InvalidMatter("matter code must not be empty".to_string()))?;
        Ok(Self {
            id: Uuid::new_v4(),
            code,
            display_name: normalize_optional_text(display_name),
            active: true,
        })
    }

    /// Display name, falling back to the code.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.code)
    }

    pub fn archive(&mut self) {
        self.active = false;
    }

    /// Returns `true` if `code` normalizes to this matter's code.
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        normalize_code(code).is_some_and(|code| code == self.code)
    }
}

/// Dollar cap a matter's WIP is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WipTarget {
    pub matter_id: Uuid,
    pub cap_amount: Dollars,
}

impl WipTarget {
    /// Creates a target. The cap must be > 0: "no cap" is expressed by
    /// having no target at all.
    pub fn new(matter_id: Uuid, cap_amount: Dollars) -> ResultEngine<Self> {
        validate_cap(cap_amount.value())?;
        Ok(Self {
            matter_id,
            cap_amount,
        })
    }

    /// Cap to measure against; an absent target counts as 0 (no cap).
    #[must_use]
    pub fn cap_or_zero(target: Option<&WipTarget>) -> f64 {
        target.map_or(0.0, |target| target.cap_amount.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matter_normalizes_code() {
        let matter = Matter::new(" mat alpha 001 ", Some("  ")).unwrap();
        assert_eq!(matter.code, "MAT-ALPHA-001");
        assert_eq!(matter.display_name, None);
        assert_eq!(matter.label(), "MAT-ALPHA-001");
        assert!(matter.active);
        assert!(matter.matches_code("Mat-Alpha-001"));
    }

    #[test]
    fn archive_matter() {
        let mut matter = Matter::new("deal", Some("Big Deal")).unwrap();
        matter.archive();
        assert!(!matter.active);
        assert_eq!(matter.label(), "Big Deal");
    }

    #[test]
    #[should_panic(expected = "InvalidMatter(\"matter code must not be empty\")")]
    fn fail_empty_code() {
        Matter::new("   ", None).unwrap();
    }

    #[test]
    fn absent_target_means_no_cap() {
        let target = WipTarget::new(Uuid::new_v4(), Dollars::new(5000.0)).unwrap();
        assert_eq!(WipTarget::cap_or_zero(Some(&target)), 5000.0);
        assert_eq!(WipTarget::cap_or_zero(None), 0.0);
    }

    #[test]
    fn fail_non_positive_target() {
        assert!(WipTarget::new(Uuid::new_v4(), Dollars::ZERO).is_err());
        assert!(WipTarget::new(Uuid::new_v4(), Dollars::new(-5.0)).is_err());
    }
}
