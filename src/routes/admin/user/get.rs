use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::admin::ensure_admin;
use crate::routes::require_user;
use crate::views;
use actix_web::{get, web, Responder, Result};
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

/// Full listing for the back office. Search/filtering happens client-side.
#[tracing::instrument(name = "Admin list user profiles.", skip(user, pg_pool))]
#[get("")]
pub async fn list_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;
    let now = Utc::now();

    db::user_profile::fetch_all(pg_pool.get_ref())
        .await
        .map(|profiles| {
            let profiles = profiles
                .into_iter()
                .map(|profile| views::user::Admin::from((profile, now)))
                .collect::<Vec<views::user::Admin>>();

            JsonResponse::build().set_list(profiles).ok("OK")
        })
        .map_err(|err| JsonResponse::<views::user::Admin>::build().internal_server_error(&err))
}

#[tracing::instrument(name = "Admin get user profile.", skip(user, pg_pool))]
#[get("/{id}")]
pub async fn get_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    path: web::Path<(String,)>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;
    let now = Utc::now();

    let profile = db::user_profile::fetch(pg_pool.get_ref(), &path.0)
        .await
        .map_err(|err| JsonResponse::<views::user::Admin>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<views::user::Admin>::build().not_found("not found"))?;

    Ok(JsonResponse::build()
        .set_item(views::user::Admin::from((profile, now)))
        .ok("OK"))
}
