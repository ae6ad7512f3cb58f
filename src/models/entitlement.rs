use crate::models::{Level, PaymentStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The fields the access core reasons about, detached from where they are
/// stored (auth-provider metadata or the mirrored profile row).
///
/// Exactly one of {active trial, active paid period, neither} explains a
/// level above `Guest` at any instant; that answer is always derived from
/// `trial_expires_at` / `paid_until` / `is_paid`, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Entitlement {
    pub level: Level,
    pub trial_expires_at: Option<DateTime<Utc>>,
    pub paid_until: Option<DateTime<Utc>>,
    /// Tri-state: an explicit value overrides any trial-based inference.
    pub is_paid: Option<bool>,
    pub payment_status: Option<PaymentStatus>,
    pub enterprise_plan: bool,
    /// Only meaningful while `enterprise_plan` is set; `None` means
    /// unlimited stores.
    pub store_count: Option<i32>,
}

impl Default for Entitlement {
    fn default() -> Self {
        Entitlement {
            level: Level::Guest,
            trial_expires_at: None,
            paid_until: None,
            is_paid: None,
            payment_status: None,
            enterprise_plan: false,
            store_count: None,
        }
    }
}
