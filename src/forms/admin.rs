use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_valid::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(min_length = 3)]
    #[validate(max_length = 254)]
    pub email: String,
    #[validate(min_length = 3)]
    #[validate(max_length = 40)]
    pub username: String,
    #[serde(rename = "nivel", alias = "level")]
    pub level: i32,
}

// Keeps "key present with null" distinguishable from "key absent": a present
// key always lands in Some, even when its value is null.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Partial profile edit. An absent key keeps the stored value; an explicit
/// `null` clears it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default)]
    #[validate(min_length = 3)]
    #[validate(max_length = 40)]
    pub username: Option<String>,
    #[serde(default, rename = "nivel", alias = "level")]
    pub level: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub is_paid: Option<Option<bool>>,
    #[serde(default, deserialize_with = "double_option")]
    pub paid_until: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub trial_expires_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub payment_status: Option<Option<models::PaymentStatus>>,
    #[serde(default, rename = "pagos_empresa", alias = "enterprise_plan")]
    pub enterprise_plan: Option<bool>,
    #[serde(
        default,
        rename = "cantidad_tiendas",
        alias = "store_count",
        deserialize_with = "double_option"
    )]
    pub store_count: Option<Option<i32>>,
}

impl UpdateUser {
    pub fn try_into_patch(self) -> Result<models::ProfilePatch, String> {
        let level = match self.level {
            Some(raw) => Some(models::Level::try_from(raw)?),
            None => None,
        };

        Ok(models::ProfilePatch {
            username: self.username,
            level,
            is_paid: self.is_paid,
            paid_until: self.paid_until,
            trial_expires_at: self.trial_expires_at,
            payment_status: self.payment_status,
            enterprise_plan: self.enterprise_plan,
            store_count: self.store_count,
        })
    }
}
