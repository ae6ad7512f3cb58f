use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::admin::ensure_admin;
use crate::routes::require_user;
use crate::views;
use actix_web::{put, web, Responder, Result};
use chrono::Utc;
use serde_valid::Validate;
use sqlx::PgPool;
use std::sync::Arc;

/// Partial metadata merge: only the supplied fields change, an explicit null
/// clears. The merge and write run in one transaction, and switching the
/// enterprise plan off always clears the store cap.
#[tracing::instrument(name = "Admin update user profile.", skip(user, form, pg_pool))]
#[put("/{id}")]
pub async fn update_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    path: web::Path<(String,)>,
    form: web::Json<forms::admin::UpdateUser>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;

    if let Err(errors) = form.validate() {
        return Err(JsonResponse::<views::user::Admin>::build().form_error(errors.to_string()));
    }

    let patch = form
        .into_inner()
        .try_into_patch()
        .map_err(|err| JsonResponse::<views::user::Admin>::build().bad_request(&err))?;
    if patch.is_empty() {
        return Err(JsonResponse::<views::user::Admin>::build().bad_request("no fields to update"));
    }

    let now = Utc::now();
    let profile = db::user_profile::apply_patch(pg_pool.get_ref(), &path.0, &patch, now)
        .await
        .map_err(|err| JsonResponse::<views::user::Admin>::build().internal_server_error(&err))?
        .ok_or_else(|| JsonResponse::<views::user::Admin>::build().not_found("not found"))?;

    Ok(JsonResponse::build()
        .set_item(views::user::Admin::from((profile, now)))
        .ok("updated"))
}
