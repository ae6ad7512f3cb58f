mod manager;
mod manager_middleware;
pub mod method;

pub use manager::*;
pub use manager_middleware::*;

use crate::models;
use actix_web::{dev::ServiceRequest, http::header::HeaderName};
use std::collections::HashMap;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub(crate) fn get_header<T>(req: &ServiceRequest, header_name: &'static str) -> Result<Option<T>, String>
where
    T: FromStr,
{
    let header_value = req.headers().get(HeaderName::from_static(header_name));

    if header_value.is_none() {
        return Ok(None);
    }

    header_value
        .unwrap()
        .to_str()
        .map_err(|_| format!("header {header_name} can't be converted to string"))?
        .parse::<T>()
        .map_err(|_| format!("header {header_name} has wrong type"))
        .map(|v| Some(v))
}

/// Short-TTL per-token cache of resolved users, so a burst of requests from
/// one session hits the auth provider once.
pub struct AuthCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedUser>>,
}

struct CachedUser {
    user: models::AuthUser,
    expires_at: Instant,
}

impl AuthCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, token: &str) -> Option<models::AuthUser> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            if let Some(entry) = entries.get(token) {
                if entry.expires_at > now {
                    return Some(entry.user.clone());
                }
            }
        }

        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(token) {
            if entry.expires_at <= now {
                entries.remove(token);
            } else {
                return Some(entry.user.clone());
            }
        }

        None
    }

    pub async fn insert(&self, token: String, user: models::AuthUser) {
        let expires_at = Instant::now() + self.ttl;
        let mut entries = self.entries.write().await;
        entries.insert(token, CachedUser { user, expires_at });
    }
}
