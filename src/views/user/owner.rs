use crate::access;
use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What a signed-in user sees about their own account: entitlement state,
/// trial countdown, and the sections their level unlocks. The expiry state
/// is computed for display only, nothing is persisted on read.
#[derive(Debug, Serialize)]
pub struct Owner {
    pub id: String,
    pub username: String,
    pub email: String,
    pub level: models::Level,
    pub level_name: &'static str,
    pub level_color: &'static str,
    pub trial: access::TrialInfo,
    pub is_paid_user: bool,
    pub is_expired: bool,
    pub pagos_empresa: bool,
    pub cantidad_tiendas: Option<i32>,
    pub sections: Vec<access::SectionAccess>,
}

impl From<(models::UserProfile, DateTime<Utc>)> for Owner {
    fn from((profile, now): (models::UserProfile, DateTime<Utc>)) -> Self {
        let entitlement = profile.entitlement();

        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email,
            level: profile.level,
            level_name: profile.level.name(),
            level_color: profile.level.color(),
            trial: access::trial_info(&entitlement, now),
            is_paid_user: access::is_paid_user(&entitlement, now),
            is_expired: access::evaluate(&entitlement, now) != access::ExpiryAction::None,
            pagos_empresa: profile.enterprise_plan,
            cantidad_tiendas: profile.store_count,
            sections: access::accessible_sections(&entitlement, now),
        }
    }
}
