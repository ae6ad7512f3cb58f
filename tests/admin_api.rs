mod common;

use common::{ADMIN_TOKEN, TRIAL_TOKEN, TRIAL_USER_ID};

#[tokio::test]
async fn register_then_administer_a_user() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = common::client();

    // register the trial user's profile
    let response = client
        .post(format!("{}/profile", app.address))
        .bearer_auth(TRIAL_TOKEN)
        .json(&serde_json::json!({ "username": "vendedor" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    // the owner view reports the registration grant
    let (status, body) = common::get_json(&app, "/profile", TRIAL_TOKEN).await;
    assert!(status.is_success());
    let item = &body["item"];
    assert_eq!(item["level"], 3);
    assert_eq!(item["trial"]["is_active"], true);
    assert_eq!(item["is_paid_user"], false);

    // registering twice conflicts
    let response = client
        .post(format!("{}/profile", app.address))
        .bearer_auth(TRIAL_TOKEN)
        .json(&serde_json::json!({ "username": "vendedor" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 409);

    // the admin surface is closed to a level-3 user
    let (status, _) = common::get_json(&app, "/admin/user", TRIAL_TOKEN).await;
    assert_eq!(status.as_u16(), 403);

    // and open to the 999 sentinel
    let (status, body) = common::get_json(&app, "/admin/user", ADMIN_TOKEN).await;
    assert!(status.is_success());
    assert_eq!(body["list"].as_array().map(|list| list.len()), Some(1));

    // enterprise toggle: granting then dropping the plan clears the cap
    let response = client
        .put(format!("{}/admin/user/{}", app.address, TRIAL_USER_ID))
        .bearer_auth(ADMIN_TOKEN)
        .json(&serde_json::json!({ "pagos_empresa": true, "cantidad_tiendas": 5 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["cantidad_tiendas"], 5);

    let response = client
        .put(format!("{}/admin/user/{}", app.address, TRIAL_USER_ID))
        .bearer_auth(ADMIN_TOKEN)
        .json(&serde_json::json!({ "pagos_empresa": false }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["pagos_empresa"], false);
    assert!(body["item"]["cantidad_tiendas"].is_null());

    // marking the user paid flips the derived state
    let response = client
        .put(format!("{}/admin/user/{}", app.address, TRIAL_USER_ID))
        .bearer_auth(ADMIN_TOKEN)
        .json(&serde_json::json!({ "is_paid": true, "payment_status": "approved" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let (_, body) = common::get_json(&app, "/profile", TRIAL_TOKEN).await;
    assert_eq!(body["item"]["is_paid_user"], true);

    // the sweep has nothing to demote
    let response = client
        .post(format!("{}/admin/user/expire", app.address))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["demoted"], 0);

    // stats see one user
    let (status, body) = common::get_json(&app, "/admin/user/stats", ADMIN_TOKEN).await;
    assert!(status.is_success());
    assert_eq!(body["item"]["total_users"], 1);
    assert_eq!(body["item"]["paid_users"], 1);

    // delete removes the record entirely
    let response = client
        .delete(format!("{}/admin/user/{}", app.address, TRIAL_USER_ID))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let (status, _) = common::get_json(
        &app,
        &format!("/admin/user/{}", TRIAL_USER_ID),
        ADMIN_TOKEN,
    )
    .await;
    assert_eq!(status.as_u16(), 404);
}

#[tokio::test]
async fn unauthenticated_requests_are_rejected_at_the_gate() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = common::client()
        .get(format!("{}/profile", app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);

    // a token the provider does not know is a middleware rejection
    let response = common::client()
        .get(format!("{}/profile", app.address))
        .bearer_auth("unknown-token")
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn expired_trial_is_demoted_by_the_sweep() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = common::client();

    let response = client
        .post(format!("{}/profile", app.address))
        .bearer_auth(TRIAL_TOKEN)
        .json(&serde_json::json!({ "username": "vendedor" }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);

    // age the trial past its window
    let response = client
        .put(format!("{}/admin/user/{}", app.address, TRIAL_USER_ID))
        .bearer_auth(ADMIN_TOKEN)
        .json(&serde_json::json!({
            "trial_expires_at": (chrono::Utc::now() - chrono::Duration::days(1)).to_rfc3339()
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/admin/user/expire", app.address))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["demoted"], 1);

    // the sweep is idempotent, a second pass demotes nobody
    let response = client
        .post(format!("{}/admin/user/expire", app.address))
        .bearer_auth(ADMIN_TOKEN)
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["demoted"], 0);

    let (_, body) = common::get_json(
        &app,
        &format!("/admin/user/{}", TRIAL_USER_ID),
        ADMIN_TOKEN,
    )
    .await;
    assert_eq!(body["item"]["level"], 0);
}
