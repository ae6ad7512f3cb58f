use crate::models;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_valid::Validate;

/// The session/user-fetch response of the auth provider: the identity plus
/// an optional metadata bag. Every bag field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUserResponse {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: MetadataBag,
}

/// The loosely-typed bag as it arrives on the wire. Defaults encode the
/// tolerance rules: no level means level 0, no trial means no trial, no
/// payment flags means not paid, not enterprise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataBag {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "nivel", alias = "level")]
    pub level: i32,
    #[serde(default)]
    pub trial_expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub paid_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_paid: Option<bool>,
    #[serde(default)]
    pub payment_status: Option<models::PaymentStatus>,
    #[serde(default, rename = "pagos_empresa")]
    pub enterprise_plan: bool,
    #[serde(default, rename = "cantidad_tiendas")]
    pub store_count: Option<i32>,
}

impl TryFrom<AuthUserResponse> for models::AuthUser {
    type Error = String;

    fn try_from(response: AuthUserResponse) -> Result<Self, Self::Error> {
        let level = models::Level::try_from(response.user_metadata.level)?;

        let email = response.email.unwrap_or_default();
        let username = response
            .user_metadata
            .username
            .clone()
            .or_else(|| email.split('@').next().map(|local| local.to_string()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "usuario".to_string());

        Ok(models::AuthUser {
            id: response.id,
            email,
            username,
            entitlement: models::Entitlement {
                level,
                trial_expires_at: response.user_metadata.trial_expires_at,
                paid_until: response.user_metadata.paid_until,
                is_paid: response.user_metadata.is_paid,
                payment_status: response.user_metadata.payment_status,
                enterprise_plan: response.user_metadata.enterprise_plan,
                store_count: response.user_metadata.store_count,
            },
        })
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct Register {
    #[validate(min_length = 3)]
    #[validate(max_length = 40)]
    pub username: String,
}
