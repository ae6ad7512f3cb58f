use crate::access::{paid, Feature, Requirement};
use crate::models::{Entitlement, Level};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Inclusive lower bound: equality grants access.
pub fn has_access(user: Level, required: Level) -> bool {
    user >= required
}

/// Per-feature decision. `Paid` delegates to the paid-status predicate
/// instead of comparing levels; `Admin` matches the 999 sentinel exactly.
pub fn feature_access(ent: &Entitlement, requirement: Requirement, now: DateTime<Utc>) -> bool {
    match requirement {
        Requirement::MinLevel(required) => has_access(ent.level, required),
        Requirement::Paid => paid::is_paid_user(ent, now),
        Requirement::Admin => ent.level == Level::Root,
    }
}

#[derive(Debug, Serialize)]
pub struct SectionAccess {
    pub key: &'static str,
    pub section_name: &'static str,
    pub required_level: i32,
    pub granted: bool,
}

/// Every gated section with the caller's grant decision, in catalogue order.
pub fn accessible_sections(ent: &Entitlement, now: DateTime<Utc>) -> Vec<SectionAccess> {
    Feature::ALL
        .iter()
        .map(|feature| SectionAccess {
            key: feature.key(),
            section_name: feature.section_name(),
            required_level: feature.requirement().as_raw(),
            granted: feature_access(ent, feature.requirement(), now),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_grants_access() {
        assert!(has_access(Level::Basic, Level::Basic));
        assert!(!has_access(Level::Starter, Level::Basic));
        assert!(has_access(Level::Root, Level::Enterprise));
    }

    #[test]
    fn admin_requirement_is_exact_match() {
        let mut ent = Entitlement::default();
        ent.level = Level::Enterprise;
        assert!(!feature_access(&ent, Requirement::Admin, Utc::now()));
        ent.level = Level::Root;
        assert!(feature_access(&ent, Requirement::Admin, Utc::now()));
    }
}
