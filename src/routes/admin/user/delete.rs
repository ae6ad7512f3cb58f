use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::admin::ensure_admin;
use crate::routes::require_user;
use actix_web::{delete, web, Responder, Result};
use sqlx::PgPool;
use std::sync::Arc;

/// Hard delete; the entitlement record is gone, nothing is archived.
#[tracing::instrument(name = "Admin delete user profile.", skip(user, pg_pool))]
#[delete("/{id}")]
pub async fn delete_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;

    let deleted = db::user_profile::delete(pg_pool.get_ref(), &path.0)
        .await
        .map_err(|err| JsonResponse::<()>::build().internal_server_error(&err))?;

    if !deleted {
        return Err(JsonResponse::<()>::build().not_found("not found"));
    }

    Ok(JsonResponse::<()>::build()
        .set_id(path.0.clone())
        .ok("deleted"))
}
