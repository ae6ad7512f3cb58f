use crate::access;
use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::admin::ensure_admin;
use crate::routes::require_user;
use actix_web::{get, web, Responder, Result};
use chrono::{Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct LevelCount {
    pub level: i32,
    pub name: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UserStats {
    pub total_users: usize,
    pub users_by_level: Vec<LevelCount>,
    pub recent_users: usize,
    pub paid_users: usize,
    pub expired_users: usize,
    pub active_users: usize,
    pub trial_users: usize,
}

/// Dashboard numbers for the back office. "Recent" is a 30-day window;
/// "expired" counts both lapsed trials and lapsed paid plans.
#[tracing::instrument(name = "Admin user stats.", skip(user, pg_pool))]
#[get("/stats")]
pub async fn stats_handler(
    user: Option<web::ReqData<Arc<models::AuthUser>>>,
    pg_pool: web::Data<PgPool>,
) -> Result<impl Responder> {
    let user = require_user(user)?;
    ensure_admin(&user)?;
    let now = Utc::now();

    let profiles = db::user_profile::fetch_all(pg_pool.get_ref())
        .await
        .map_err(|err| JsonResponse::<UserStats>::build().internal_server_error(&err))?;

    let thirty_days_ago = now - Duration::days(30);

    let users_by_level = models::Level::ALL
        .iter()
        .map(|&level| LevelCount {
            level: i32::from(level),
            name: level.name(),
            count: profiles.iter().filter(|p| p.level == level).count(),
        })
        .collect();

    let expired_users = profiles
        .iter()
        .filter(|p| access::evaluate(&p.entitlement(), now) != access::ExpiryAction::None)
        .count();

    let trial_users = profiles
        .iter()
        .filter(|p| {
            p.is_paid != Some(true)
                && p.trial_expires_at
                    .map(|expires_at| expires_at >= now)
                    .unwrap_or(false)
        })
        .count();

    let stats = UserStats {
        total_users: profiles.len(),
        users_by_level,
        recent_users: profiles
            .iter()
            .filter(|p| p.created_at > thirty_days_ago)
            .count(),
        paid_users: profiles.iter().filter(|p| p.is_paid == Some(true)).count(),
        expired_users,
        active_users: profiles.len() - expired_users,
        trial_users,
    };

    Ok(JsonResponse::build().set_item(stats).ok("OK"))
}
