use crate::models::Entitlement;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const TRIAL_DAYS: i64 = 7;

pub fn trial_end(start: DateTime<Utc>) -> DateTime<Utc> {
    start + Duration::days(TRIAL_DAYS)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrialInfo {
    pub is_active: bool,
    pub days_remaining: i64,
    pub has_expired: bool,
}

/// Remaining trial days, counted in whole days rounded up. A user that was
/// never granted a trial reports as expired with zero days.
pub fn trial_info(ent: &Entitlement, now: DateTime<Utc>) -> TrialInfo {
    let Some(expires_at) = ent.trial_expires_at else {
        return TrialInfo {
            is_active: false,
            days_remaining: 0,
            has_expired: true,
        };
    };

    let seconds_left = (expires_at - now).num_seconds();
    let days_remaining = if seconds_left > 0 {
        (seconds_left + 86_399) / 86_400
    } else {
        0
    };
    let has_expired = days_remaining <= 0;

    TrialInfo {
        is_active: !has_expired,
        days_remaining,
        has_expired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_days_round_up() {
        let now = Utc::now();
        let mut ent = Entitlement::default();
        ent.trial_expires_at = Some(now + Duration::hours(1));
        let info = trial_info(&ent, now);
        assert!(info.is_active);
        assert_eq!(info.days_remaining, 1);

        ent.trial_expires_at = Some(now + Duration::days(6) + Duration::hours(1));
        assert_eq!(trial_info(&ent, now).days_remaining, 7);
    }

    #[test]
    fn expired_and_missing_trials_report_zero_days() {
        let now = Utc::now();
        let mut ent = Entitlement::default();
        assert_eq!(
            trial_info(&ent, now),
            TrialInfo {
                is_active: false,
                days_remaining: 0,
                has_expired: true
            }
        );

        ent.trial_expires_at = Some(now - Duration::hours(1));
        let info = trial_info(&ent, now);
        assert!(info.has_expired);
        assert_eq!(info.days_remaining, 0);
    }
}
