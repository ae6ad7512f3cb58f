use crate::access::trial;
use crate::models::{Entitlement, Level, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One row of the `user_profile` table. `id` is issued by the auth provider
/// and never changes; everything else is admin-mutable.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    #[sqlx(try_from = "i32")]
    pub level: Level,
    pub trial_expires_at: Option<DateTime<Utc>>,
    pub paid_until: Option<DateTime<Utc>>,
    pub is_paid: Option<bool>,
    pub payment_status: Option<PaymentStatus>,
    pub enterprise_plan: bool,
    pub store_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Registration grant: level 3 with a 7-day trial, regardless of the
    /// selected plan.
    pub fn new(id: String, email: String, username: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            email,
            level: Level::Pro,
            trial_expires_at: Some(trial::trial_end(now)),
            paid_until: None,
            is_paid: None,
            payment_status: None,
            enterprise_plan: false,
            store_count: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn entitlement(&self) -> Entitlement {
        Entitlement {
            level: self.level,
            trial_expires_at: self.trial_expires_at,
            paid_until: self.paid_until,
            is_paid: self.is_paid,
            payment_status: self.payment_status,
            enterprise_plan: self.enterprise_plan,
            store_count: self.store_count,
        }
    }

    /// Merges a partial admin update into the row. A `None` field keeps the
    /// stored value; a `Some(None)` clears a nullable one. Dropping the
    /// enterprise plan always clears the store cap, whatever the patch says.
    pub fn apply(&mut self, patch: &ProfilePatch, now: DateTime<Utc>) {
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(is_paid) = patch.is_paid {
            self.is_paid = is_paid;
        }
        if let Some(paid_until) = patch.paid_until {
            self.paid_until = paid_until;
        }
        if let Some(trial_expires_at) = patch.trial_expires_at {
            self.trial_expires_at = trial_expires_at;
        }
        if let Some(payment_status) = patch.payment_status {
            self.payment_status = payment_status;
        }
        if let Some(enterprise_plan) = patch.enterprise_plan {
            self.enterprise_plan = enterprise_plan;
        }
        if let Some(store_count) = patch.store_count {
            self.store_count = store_count;
        }
        if !self.enterprise_plan {
            self.store_count = None;
        }
        self.updated_at = now;
    }
}

/// Field-level admin update. Outer `Option` = "was the key present",
/// inner `Option` = the nullable value itself.
#[derive(Debug, Clone, Default)]
pub struct ProfilePatch {
    pub username: Option<String>,
    pub level: Option<Level>,
    pub is_paid: Option<Option<bool>>,
    pub paid_until: Option<Option<DateTime<Utc>>>,
    pub trial_expires_at: Option<Option<DateTime<Utc>>>,
    pub payment_status: Option<Option<PaymentStatus>>,
    pub enterprise_plan: Option<bool>,
    pub store_count: Option<Option<i32>>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.level.is_none()
            && self.is_paid.is_none()
            && self.paid_until.is_none()
            && self.trial_expires_at.is_none()
            && self.payment_status.is_none()
            && self.enterprise_plan.is_none()
            && self.store_count.is_none()
    }
}
