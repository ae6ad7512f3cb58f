use crate::models::Entitlement;

/// The authenticated caller, as resolved by the authentication middleware
/// from the auth provider's session response.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub username: String,
    pub entitlement: Entitlement,
}
