use crate::models;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch(pool: &PgPool, id: &str) -> Result<Option<models::UserProfile>, String> {
    let query_span = tracing::info_span!("Fetch user profile by id.");
    sqlx::query_as::<_, models::UserProfile>(
        r#"
        SELECT * FROM user_profile
        WHERE id = $1
        LIMIT 1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user profile, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<models::UserProfile>, String> {
    let query_span = tracing::info_span!("Fetch user profile by username.");
    sqlx::query_as::<_, models::UserProfile>(
        r#"
        SELECT * FROM user_profile
        WHERE username = $1
        LIMIT 1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user profile by username, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::UserProfile>, String> {
    let query_span = tracing::info_span!("Fetch all user profiles.");
    sqlx::query_as::<_, models::UserProfile>(
        r#"
        SELECT * FROM user_profile
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch user profiles, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn insert(
    pool: &PgPool,
    profile: models::UserProfile,
) -> Result<models::UserProfile, String> {
    let query_span = tracing::info_span!("Saving new user profile into the database");
    sqlx::query_as::<_, models::UserProfile>(
        r#"
        INSERT INTO user_profile
            (id, username, email, level, trial_expires_at, paid_until, is_paid,
             payment_status, enterprise_plan, store_count, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING *
        "#,
    )
    .bind(&profile.id)
    .bind(&profile.username)
    .bind(&profile.email)
    .bind(i32::from(profile.level))
    .bind(profile.trial_expires_at)
    .bind(profile.paid_until)
    .bind(profile.is_paid)
    .bind(profile.payment_status)
    .bind(profile.enterprise_plan)
    .bind(profile.store_count)
    .bind(profile.created_at)
    .bind(profile.updated_at)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to insert".to_string()
    })
}

/// Merges a partial update into one row inside a transaction, so a
/// multi-field admin edit lands whole or not at all.
pub async fn apply_patch(
    pool: &PgPool,
    id: &str,
    patch: &models::ProfilePatch,
    now: DateTime<Utc>,
) -> Result<Option<models::UserProfile>, String> {
    let query_span = tracing::info_span!("Apply profile patch.");
    async move {
        let mut tx = pool.begin().await.map_err(|err| {
            tracing::error!("Failed to begin transaction: {:?}", err);
            "Could not update data".to_string()
        })?;

        let profile = sqlx::query_as::<_, models::UserProfile>(
            r#"
            SELECT * FROM user_profile
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch user profile for update, error: {:?}", err);
            "Could not update data".to_string()
        })?;

        let Some(mut profile) = profile else {
            return Ok(None);
        };

        profile.apply(patch, now);

        sqlx::query(
            r#"
            UPDATE user_profile
            SET username = $2,
                email = $3,
                level = $4,
                trial_expires_at = $5,
                paid_until = $6,
                is_paid = $7,
                payment_status = $8,
                enterprise_plan = $9,
                store_count = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.username)
        .bind(&profile.email)
        .bind(i32::from(profile.level))
        .bind(profile.trial_expires_at)
        .bind(profile.paid_until)
        .bind(profile.is_paid)
        .bind(profile.payment_status)
        .bind(profile.enterprise_plan)
        .bind(profile.store_count)
        .bind(profile.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!("Failed to execute query: {:?}", err);
            "Could not update data".to_string()
        })?;

        tx.commit().await.map_err(|err| {
            tracing::error!("Failed to commit transaction: {:?}", err);
            "Could not update data".to_string()
        })?;

        Ok(Some(profile))
    }
    .instrument(query_span)
    .await
}

pub async fn set_level(
    pool: &PgPool,
    id: &str,
    level: models::Level,
    now: DateTime<Utc>,
) -> Result<(), String> {
    let query_span = tracing::info_span!("Set user level.");
    sqlx::query(
        r#"
        UPDATE user_profile
        SET level = $2, updated_at = $3
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(i32::from(level))
    .bind(now)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not update data".to_string()
    })
}

#[tracing::instrument(name = "Delete user profile.", skip(pool))]
pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, String> {
    sqlx::query(
        r#"
        DELETE FROM user_profile
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await
    .map(|result| result.rows_affected() > 0)
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Could not delete data".to_string()
    })
}
