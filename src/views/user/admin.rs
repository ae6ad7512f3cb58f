use crate::access;
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Back-office projection of a profile row: every stored field plus the
/// derived expiry state the panel highlights.
#[derive(Debug, Serialize)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub email: String,
    pub level: models::Level,
    pub level_name: &'static str,
    pub trial_expires_at: Option<DateTime<Utc>>,
    pub paid_until: Option<DateTime<Utc>>,
    pub is_paid: Option<bool>,
    pub payment_status: Option<models::PaymentStatus>,
    pub pagos_empresa: bool,
    pub cantidad_tiendas: Option<i32>,
    pub is_expired: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<(models::UserProfile, DateTime<Utc>)> for Admin {
    fn from((profile, now): (models::UserProfile, DateTime<Utc>)) -> Self {
        let is_expired =
            access::evaluate(&profile.entitlement(), now) != access::ExpiryAction::None;

        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            level: profile.level,
            level_name: profile.level.name(),
            trial_expires_at: profile.trial_expires_at,
            paid_until: profile.paid_until,
            is_paid: profile.is_paid,
            payment_status: profile.payment_status,
            pagos_empresa: profile.enterprise_plan,
            cantidad_tiendas: profile.store_count,
            is_expired,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
