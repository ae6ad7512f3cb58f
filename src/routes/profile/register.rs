use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::require_user;
use crate::views;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// First-login bootstrap: mirrors the authenticated identity into a profile
/// row carrying the registration grant (level 3, 7-day trial). A taken
/// username gets a millisecond-timestamp suffix instead of failing the
/// registration.
#[tracing::instrument(name = "Register user profile.", skip(user, form, pg_pool))]
#[post("")]
pub async fn register_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    form: web::Json<forms::user::Register>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::user::Owner>::build().form_error(errors.to_string()));
    }

    let existing = db::user_profile::fetch(pg_pool.get_ref(), &user.id)
        .await
        .map_err(|err| JsonResponse::<views::user::Owner>::build().internal_server_error(&err))?;
    if existing.is_some() {
        return Err(
            JsonResponse::<views::user::Owner>::build().conflict("profile already registered")
        );
    }

    let now = Utc::now();
    let mut username = form.username.trim().to_string();
    let taken = db::user_profile::fetch_by_username(pg_pool.get_ref(), &username)
        .await
        .map_err(|err| JsonResponse::<views::user::Owner>::build().internal_server_error(&err))?;
    if taken.is_some() {
        username = format!("{}_{}", username, now.timestamp_millis());
        tracing::info!("username taken, registering as {}", username);
    }

    let profile = models::UserProfile::new(user.id.clone(), user.email.clone(), username, now);
    db::user_profile::insert(pg_pool.get_ref(), profile)
        .await
        .map(|profile| {
            JsonResponse::build()
                .set_id(profile.id.clone())
                .set_item(views::user::Owner::from((profile, now)))
                .created("registered")
        })
        .map_err(|err| JsonResponse::<views::user::Owner>::build().internal_server_error(&err))
}
