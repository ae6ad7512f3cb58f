use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::admin::ensure_admin;
use crate::routes::require_user;
use crate::views;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// Manual user creation from the back office. The admin picks the level,
/// the 7-day trial window is still seeded so the expiry sweep has a date to
/// work with.
#[tracing::instrument(name = "Admin create user profile.", skip(user, form, pg_pool))]
#[post("")]
pub async fn add_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    form: web::Json<forms::admin::CreateUser>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::user::Admin>::build().form_error(errors.to_string()));
    }
    let level = models::Level::try_from(form.level)
        .map_err(|err| JsonResponse::<views::user::Admin>::build().bad_request(&err))?;

    let now = Utc::now();
    let mut username = form.username.trim().to_string();
    let taken = db::user_profile::fetch_by_username(pg_pool.get_ref(), &username)
        .await
        .map_err(|err| JsonResponse::<views::user::Admin>::build().internal_server_error(&err))?;
    if taken.is_some() {
        username = format!("{}_{}", username, now.timestamp_millis());
    }

    let mut profile = models::UserProfile::new(
        uuid::Uuid::new_v4().to_string(),
        form.email.trim().to_string(),
        username,
        now,
    );
    profile.level = level;

    db::user_profile::insert(pg_pool.get_ref(), profile)
        .await
        .map(|profile| {
            JsonResponse::build()
                .set_id(profile.id.clone())
                .set_item(views::user::Admin::from((profile, now)))
                .created("user created")
        })
        .map_err(|err| JsonResponse::<views::user::Admin>::build().internal_server_error(&err))
}
