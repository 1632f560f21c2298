mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{TEST_PASSWORD, setup_test_app};
use rolegate_db::Directory;
use rolegate_models::UserStatus;
use serde_json::json;

fn registration(email: &str, roles: &[&str]) -> serde_json::Value {
    json!({
        "fullName": "Jane Doe",
        "cellNumber": "5551234",
        "email": email,
        "password": TEST_PASSWORD,
        "roles": roles,
    })
}

#[tokio::test]
async fn test_register_user_is_active() {
    let app = setup_test_app();

    let (status, body) = app
        .post("/auth/register", None, registration("jane@x.io", &["user"]))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Registration successful. You can now log in to your account."
    );

    let account = app
        .directory
        .find_user_by_email("jane@x.io")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.user.status, UserStatus::Active);
}

#[tokio::test]
async fn test_register_without_roles_gets_default_role() {
    let app = setup_test_app();

    let (status, _) = app
        .post("/auth/register", None, registration("jane@x.io", &[]))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let account = app
        .directory
        .find_user_by_email("jane@x.io")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.user.role_names(), vec!["ROLE_USER".to_string()]);
}

#[tokio::test]
async fn test_register_admin_is_pending() {
    let app = setup_test_app();

    let (status, body) = app
        .post("/auth/register", None, registration("boss@x.io", &["admin"]))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["message"],
        "Registration successful. Your account is pending activation and requires admin review."
    );
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = setup_test_app();

    for _ in 0..2 {
        app.post("/auth/register", None, registration("dup@x.io", &["user"]))
            .await;
    }
    let (status, body) = app
        .post("/auth/register", None, registration("dup@x.io", &["user"]))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Already had an account with dup@x.io email");
    assert_eq!(app.directory.user_count().await, 1);
}

#[tokio::test]
async fn test_register_unknown_role() {
    let app = setup_test_app();

    let (status, body) = app
        .post("/auth/register", None, registration("jane@x.io", &["wizard"]))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "wizard role not found");
    assert_eq!(app.directory.user_count().await, 0);
}

#[tokio::test]
async fn test_register_invalid_body() {
    let app = setup_test_app();

    let (status, body) = app
        .post(
            "/auth/register",
            None,
            json!({
                "fullName": "Jane",
                "email": "not-an-email",
                "password": "short",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Invalid email format"));
    assert!(error.contains("Password must be at least 8 characters"));

    let (status, body) = app
        .post("/auth/register", None, json!({ "fullName": "Jane" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email is required");
}

#[tokio::test]
async fn test_register_requires_json_content_type() {
    let app = setup_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("hello"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Missing 'Content-Type: application/json' header"
    );
}

#[tokio::test]
async fn test_login_success() {
    let app = setup_test_app();
    app.post("/auth/register", None, registration("jane@x.io", &["user"]))
        .await;

    let (status, body) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "jane@x.io", "password": TEST_PASSWORD }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "Bearer");

    let claims = app.state.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.sub, "jane@x.io");
    assert_eq!(claims.roles, vec!["ROLE_USER".to_string()]);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = setup_test_app();
    app.post("/auth/register", None, registration("jane@x.io", &["user"]))
        .await;

    let (status, body) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "jane@x.io", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");

    let (status, body) = app
        .post(
            "/auth/login",
            None,
            json!({ "email": "ghost@x.io", "password": TEST_PASSWORD }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_pending_user_can_log_in_but_not_use_token() {
    let app = setup_test_app();
    app.post("/auth/register", None, registration("mod@x.io", &["moderator"]))
        .await;

    let token = app.login("mod@x.io").await;
    let (status, body) = app.get("/moderator/me", Some(&token)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Account is pending approval. Please contact admin."
    );
}
