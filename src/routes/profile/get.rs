use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::require_user;
use crate::views;
use actix_web::{get, web, Responder, Result};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

/// Own account view. Expiry and trial state are computed against the clock
/// for display; the stored row is not touched on read.
#[tracing::instrument(name = "Get own profile.", skip(user, pg_pool))]
#[get("")]
pub async fn get_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    let now = Utc::now();

    let profile = db::user_profile::fetch(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<views::user::Owner>::build().internal_server_error(&err))?
        .ok_or_else(|| {
            JsonResponse::<views::user::Owner>::build().not_found("profile not registered")
        })?;

    Ok(JsonResponse::build()
        .set_item(views::user::Owner::from((profile, now)))
        .ok("OK"))
}
