mod common;

#[tokio::test]
async fn health_check_works() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    let response = common::client()
        .get(format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
}
