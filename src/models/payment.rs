use serde::{Deserialize, Serialize};

#[derive(sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Approved,
    Rejected,
}

impl Into<String> for PaymentStatus {
    fn into(self) -> String {
        format!("{:?}", self).to_lowercase()
    }
}
