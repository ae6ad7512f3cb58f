pub(crate) mod admin;
pub mod health_checks;
pub(crate) mod labels;
pub(crate) mod profile;

pub use health_checks::*;

use crate::helpers::JsonResponse;
use crate::models;
use actix_web::web;
use std::sync::Arc;

/// The middleware attaches the caller when a bearer token resolves; a gated
/// handler turns its absence into a 401 before doing anything else.
pub(crate) fn require_user(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
) -> Result<Arc<models::AuthUser>, actix_web::Error> {
    user.map(|user| user.into_inner())
        .ok_or_else(|| JsonResponse::<()>::build().unauthorized("authentication required"))
}
