use actix_web::{get, App, HttpRequest, HttpResponse, HttpServer};
use chrono::{Duration, Utc};
use facil_uno::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};
use std::net::TcpListener;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const TRIAL_TOKEN: &str = "trial-token";
pub const TRIAL_USER_ID: &str = "trial-user-0001";

const ADMIN_USER_ID: &str = "admin-user-0001";

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = facil_uno::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

pub async fn spawn_app() -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");

    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind port for testing auth server");

    configuration.auth_url = format!(
        "http://127.0.0.1:{}/auth/v1/user",
        listener.local_addr().unwrap().port()
    );
    println!("Auth server is running on: {}", configuration.auth_url);

    // Start the mock auth server in the background; do not await the handle
    let _ = tokio::spawn(mock_auth_server(listener));
    tokio::time::sleep(std::time::Duration::from_millis(500)).await;

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

#[get("/auth/v1/user")]
async fn mock_auth(req: HttpRequest) -> HttpResponse {
    let token = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("");

    match token {
        ADMIN_TOKEN => HttpResponse::Ok().json(serde_json::json!({
            "id": ADMIN_USER_ID,
            "email": "admin@example.com",
            "user_metadata": {
                "username": "dios",
                "nivel": 999
            }
        })),
        TRIAL_TOKEN => HttpResponse::Ok().json(serde_json::json!({
            "id": TRIAL_USER_ID,
            "email": "vendedor@example.com",
            "user_metadata": {
                "username": "vendedor",
                "nivel": 3,
                "trial_expires_at": (Utc::now() + Duration::days(5)).to_rfc3339()
            }
        })),
        _ => HttpResponse::Unauthorized().finish(),
    }
}

async fn mock_auth_server(listener: TcpListener) {
    let server = HttpServer::new(|| App::new().service(mock_auth))
        .listen(listener)
        .expect("Failed to start mock auth server")
        .run();
    let _ = server.await;
}

pub fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[allow(dead_code)]
pub async fn get_json(
    app: &TestApp,
    path: &str,
    token: &str,
) -> (reqwest::StatusCode, serde_json::Value) {
    let response = client()
        .get(format!("{}{}", app.address, path))
        .bearer_auth(token)
        .send()
        .await
        .expect("Failed to execute request.");
    let status = response.status();
    let body = response.json().await.unwrap_or(serde_json::Value::Null);
    (status, body)
}
