use crate::models::{Entitlement, Level};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Outcome of checking a grant period against the clock.
///
/// Trial expiry demotes automatically; a lapsed paid plan is only flagged so
/// billing can follow up, the level stays. `Root` and already-demoted users
/// are never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryAction {
    None,
    DemoteTrial,
    FlagPaidExpired,
}

pub fn evaluate(ent: &Entitlement, now: DateTime<Utc>) -> ExpiryAction {
    if let Some(paid_until) = ent.paid_until {
        return if now > paid_until {
            ExpiryAction::FlagPaidExpired
        } else {
            ExpiryAction::None
        };
    }

    if let Some(expires_at) = ent.trial_expires_at {
        if now > expires_at
            && ent.is_paid != Some(true)
            && ent.level > Level::Guest
            && ent.level != Level::Root
        {
            return ExpiryAction::DemoteTrial;
        }
    }

    ExpiryAction::None
}

/// Applies the demotion when due. Safe to call repeatedly: once the level is
/// back at `Guest`, further calls are no-ops.
pub fn expire_if_needed(ent: &mut Entitlement, now: DateTime<Utc>) -> ExpiryAction {
    let action = evaluate(ent, now);
    if action == ExpiryAction::DemoteTrial {
        ent.level = Level::Guest;
    }
    action
}
