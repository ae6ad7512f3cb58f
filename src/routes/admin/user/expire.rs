use crate::access;
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::admin::ensure_admin;
use crate::routes::require_user;
use actix_web::{post, web, Responder, Result};
use chrono::Utc;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Default, Serialize)]
pub struct ExpireSummary {
    pub examined: usize,
    pub demoted: usize,
    pub paid_expired: usize,
    pub failed: usize,
}

/// The sweep the panel triggers on load: demote every user whose trial
/// lapsed, flag lapsed paid plans for billing follow-up. Users are processed
/// one by one with no rollback; a failed write is logged and the sweep moves
/// on to the next user.
#[tracing::instrument(name = "Admin expire user profiles.", skip(user, pg_pool))]
#[post("/expire")]
pub async fn expire_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;
    let now = Utc::now();

    let profiles = db::user_profile::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<ExpireSummary>::build().internal_server_error(&err))?;

    let mut summary = ExpireSummary {
        examined: profiles.len(),
        ..ExpireSummary::default()
    };

    for profile in &profiles {
        match access::evaluate(&profile.entitlement(), now) {
            access::ExpiryAction::DemoteTrial => {
                match db::user_profile::set_level(
                    pg_pool.get_ref(),
                    &profile.id,
                    models::Level::Guest,
                    now,
                )
                .await
                {
                    Ok(()) => {
                        tracing::info!("trial expired, user {} demoted to level 0", profile.id);
                        summary.demoted += 1;
                    }
                    Err(err) => {
                        tracing::error!("could not demote user {}: {}", profile.id, err);
                        summary.failed += 1;
                    }
                }
            }
            access::ExpiryAction::FlagPaidExpired => {
                summary.paid_expired += 1;
            }
            access::ExpiryAction::None => {}
        }
    }

    Ok(JsonResponse::build().set_item(summary).ok("sweep finished"))
}
