use crate::configuration::Settings;
use crate::forms;
use crate::middleware::authentication::{get_header, AuthCache};
use crate::models;
use actix_web::{dev::ServiceRequest, web, HttpMessage};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::sync::Arc;

fn try_extract_token(authentication: String) -> Result<String, String> {
    let mut authentication_parts = authentication.splitn(2, ' ');
    match authentication_parts.next() {
        Some("Bearer") => {}
        _ => return Err("Bearer scheme missing".to_string()),
    }
    let token = authentication_parts.next();
    if token.is_none() {
        tracing::error!("Bearer token is missing");
        return Err("Authentication required".to_string());
    }

    Ok(token.unwrap().into())
}

#[tracing::instrument(name = "Authenticate with bearer token", skip(req))]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, String> {
    let authentication = get_header::<String>(req, "authorization")?;
    if authentication.is_none() {
        return Ok(false);
    }

    let token = try_extract_token(authentication.unwrap())?;
    let settings = req.app_data::<web::Data<Settings>>().unwrap();
    let http_client = req.app_data::<web::Data<reqwest::Client>>().unwrap();
    let cache = req.app_data::<web::Data<AuthCache>>().unwrap();

    let user = match cache.get(&token).await {
        Some(user) => user,
        None => {
            let user = fetch_user(http_client.get_ref(), settings.auth_url.as_str(), &token).await?;
            cache.insert(token.clone(), user.clone()).await;
            user
        }
    };

    if req.extensions_mut().insert(Arc::new(user)).is_some() {
        return Err("user already logged".to_string());
    }

    Ok(true)
}

/// Resolves the token against the auth provider. The client carries a
/// 5-second timeout; a network failure gets exactly one retry, any further
/// failure bubbles up to the caller as an authentication error.
pub async fn fetch_user(
    client: &reqwest::Client,
    auth_url: &str,
    token: &str,
) -> Result<models::AuthUser, String> {
    let send = || {
        client
            .get(auth_url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
    };

    let resp = match send().await {
        Ok(resp) => resp,
        Err(err) => {
            tracing::warn!(target: "auth", error = %err, "auth request failed, retrying once");
            send().await.map_err(|err| {
                tracing::error!(target: "auth", error = %err, "auth request failed after retry");
                "no response from auth server".to_string()
            })?
        }
    };

    if !resp.status().is_success() {
        return Err("401 Unauthorized".to_string());
    }

    resp.json::<forms::user::AuthUserResponse>()
        .await
        .map_err(|_err| "can't parse the response body".to_string())?
        .try_into()
}
