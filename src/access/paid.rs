use crate::models::{Entitlement, Level};
use chrono::{DateTime, Utc};

/// Whether the user's access is backed by a paid plan rather than a trial.
///
/// An explicit `is_paid` flag wins in either direction. Without one, a user
/// that never had a trial is not paid. The last branch is an inference kept
/// for legacy records that predate the explicit flag: an expired trial with a
/// level that was never demoted means an administrator restored it after a
/// payment. New records always carry `is_paid`, so the branch is dormant for
/// them.
pub fn is_paid_user(ent: &Entitlement, now: DateTime<Utc>) -> bool {
    match ent.is_paid {
        Some(true) => true,
        Some(false) => false,
        None => match ent.trial_expires_at {
            None => false,
            Some(expires_at) => now > expires_at && ent.level > Level::Guest,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ent(level: Level) -> Entitlement {
        Entitlement {
            level,
            ..Entitlement::default()
        }
    }

    #[test]
    fn explicit_flag_wins_over_trial_state() {
        let now = Utc::now();
        let mut user = ent(Level::Guest);
        user.is_paid = Some(true);
        user.trial_expires_at = Some(now + Duration::days(5));
        assert!(is_paid_user(&user, now));

        user.is_paid = Some(false);
        user.level = Level::Pro;
        user.trial_expires_at = Some(now - Duration::days(5));
        assert!(!is_paid_user(&user, now));
    }

    #[test]
    fn no_flag_and_no_trial_is_not_paid() {
        assert!(!is_paid_user(&ent(Level::Pro), Utc::now()));
    }

    #[test]
    fn legacy_inference_needs_expired_trial_and_level() {
        let now = Utc::now();
        let mut user = ent(Level::Pro);
        user.trial_expires_at = Some(now - Duration::days(1));
        assert!(is_paid_user(&user, now));

        // expired but demoted: just an expired trial
        user.level = Level::Guest;
        assert!(!is_paid_user(&user, now));

        // still running: trial user, not paid
        user.level = Level::Pro;
        user.trial_expires_at = Some(now + Duration::days(1));
        assert!(!is_paid_user(&user, now));
    }
}
