#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rolegate::config::{CorsConfig, JwtConfig, PasswordConfig};
use rolegate::router::init_router;
use rolegate::state::AppState;
use rolegate_core::hash_password_with_cost;
use rolegate_db::{Directory, MemoryDirectory};
use rolegate_models::{NewUser, UserStatus, canonical_role_name};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "password123";
pub const TEST_COST: u32 = 4;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret-at-least-32-chars".to_string(),
        access_token_expiry: 3600,
    }
}

pub struct TestApp {
    pub router: Router,
    pub directory: Arc<MemoryDirectory>,
    pub state: AppState,
}

pub fn setup_test_app() -> TestApp {
    let directory = Arc::new(MemoryDirectory::new());
    let state = AppState::new(
        directory.clone(),
        test_jwt_config(),
        CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        PasswordConfig {
            bcrypt_cost: TEST_COST,
        },
    );

    TestApp {
        router: init_router(state.clone()),
        directory,
        state,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(build_request("GET", uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(build_request("POST", uri, token, Some(body))).await
    }

    /// Inserts a user directly, bypassing registration rules.
    pub async fn seed_user(&self, email: &str, roles: &[&str], status: UserStatus) {
        let mut resolved = Vec::new();
        for name in roles {
            let role = self
                .directory
                .find_role_by_name(&canonical_role_name(name))
                .await
                .unwrap()
                .unwrap();
            resolved.push(role);
        }

        self.directory
            .create_user(NewUser {
                full_name: "Seeded User".to_string(),
                cell_number: "5550100".to_string(),
                email: email.to_string(),
                password_hash: hash_password_with_cost(TEST_PASSWORD, TEST_COST).unwrap(),
                status,
                roles: resolved,
            })
            .await
            .unwrap();
    }

    pub async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .post(
                "/auth/login",
                None,
                serde_json::json!({ "email": email, "password": TEST_PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {}", body);
        body["token"].as_str().unwrap().to_string()
    }

    /// Seeds an active admin and returns a token for it.
    pub async fn admin_token(&self) -> String {
        self.seed_user("admin@rolegate.test", &["admin"], UserStatus::Active)
            .await;
        self.login("admin@rolegate.test").await
    }
}

pub fn build_request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
