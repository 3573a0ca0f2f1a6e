//! Registration, verification, session and password reset over HTTP

mod common;

use actix_web::{cookie::Cookie, http::StatusCode, test};
use serde_json::{json, Value};

use common::{error_code, session_cookie, test_config, TestContext, PASSWORD};
use scribe_api::app::create_app;

#[actix_web::test]
async fn test_wrong_guess_discards_the_pending_code() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Alice", "email": "alice@x.com", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let user_id = body["data"]["user_id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["email"], "alice@x.com");

    let code = ctx.last_code_for("alice@x.com");
    let wrong = if code == "000000" { "111111" } else { "000000" };

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({"user_id": user_id, "otp": wrong}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "INVALID_CODE");

    // The originally correct code is gone too
    let req = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({"user_id": user_id, "otp": code}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "INVALID_CODE");
}

#[actix_web::test]
async fn test_verify_email_opens_session_once() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Bob", "email": "bob@x.com", "password": PASSWORD}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = body["data"]["user_id"].as_str().unwrap().to_string();
    let code = ctx.last_code_for("bob@x.com");

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({"user_id": user_id, "otp": code}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = session_cookie(&resp).expect("session cookie should be set");
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(
        cookie.max_age().map(|age| age.whole_seconds()),
        Some(ctx.config.auth.jwt.expiry_seconds())
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["is_verified"], true);
    assert!(body["data"]["user"].get("password_hash").is_none());

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({"user_id": user_id, "otp": code}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "INVALID_CODE");
}

#[actix_web::test]
async fn test_expired_code_is_rejected() {
    let mut config = test_config();
    config.otp.expiration_minutes = 0;
    let ctx = TestContext::with_config(config);
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Carol", "email": "carol@x.com", "password": PASSWORD}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = body["data"]["user_id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/auth/verify-email")
        .set_json(json!({"user_id": user_id, "otp": ctx.last_code_for("carol@x.com")}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "CODE_EXPIRED");
}

#[actix_web::test]
async fn test_register_validation_and_duplicates() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Dan", "email": "not-an-email", "password": "123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "VALIDATION_ERROR");
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());

    // Unverified re-registration re-sends the code
    for expected in [StatusCode::CREATED, StatusCode::OK] {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"name": "Dan", "email": "dan@x.com", "password": PASSWORD}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected);
    }
    assert_eq!(ctx.mailer.get_message_count(), 2);

    ctx.verified_user("Erin", "erin@x.com").await;
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Erin", "email": "erin@x.com", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_send_verify_otp_rules() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/send-verify-otp")
        .set_json(json!({"user_id": uuid::Uuid::new_v4()}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "USER_NOT_FOUND");

    // No body and no session
    let req = test::TestRequest::post()
        .uri("/api/auth/send-verify-otp")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The session identifies the user when the body does not
    let (_, token) = ctx.verified_user("Fay", "fay@x.com").await;
    let req = test::TestRequest::post()
        .uri("/api/auth/send-verify-otp")
        .cookie(Cookie::new("token", token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "ALREADY_VERIFIED");
}

#[actix_web::test]
async fn test_login_rules() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    ctx.state
        .auth_service
        .register("Gus", "gus@x.com", PASSWORD)
        .await
        .unwrap();
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "gus@x.com", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "EMAIL_NOT_VERIFIED");

    ctx.verified_user("Hana", "hana@x.com").await;
    for (email, password) in [("hana@x.com", "wrong-password"), ("nobody@x.com", PASSWORD)] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"email": email, "password": password}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(error_code(&body), "INVALID_CREDENTIALS");
    }

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "hana@x.com", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(session_cookie(&resp).is_some());
}

#[actix_web::test]
async fn test_session_check_and_logout() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "UNAUTHENTICATED");

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(Cookie::new("token", "not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "TOKEN_INVALID");

    let (user_id, token) = ctx.verified_user("Ivy", "ivy@x.com").await;
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .cookie(Cookie::new("token", token.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["id"], user_id.to_string());

    // Bearer header works for non-browser clients
    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp).expect("logout should send a removal cookie");
    assert!(cookie.value().is_empty());
    assert_eq!(cookie.max_age().map(|age| age.whole_seconds()), Some(0));
}

#[actix_web::test]
async fn test_password_reset_flow() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    ctx.verified_user("Jay", "jay@x.com").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/send-reset-otp")
        .set_json(json!({"email": "nobody@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "USER_NOT_FOUND");

    let req = test::TestRequest::post()
        .uri("/api/auth/send-reset-otp")
        .set_json(json!({"email": "jay@x.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["data"]["expires_at"].is_string());

    let code = ctx.last_code_for("jay@x.com");

    // Too short for a reset, and the code survives the rejection
    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({"email": "jay@x.com", "otp": code, "new_password": "short"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "VALIDATION_ERROR");

    let req = test::TestRequest::post()
        .uri("/api/auth/reset-password")
        .set_json(json!({"email": "jay@x.com", "otp": code, "new_password": "brand-new-pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "jay@x.com", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "jay@x.com", "password": "brand-new-pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_mail_failure_is_upstream_error() {
    let ctx = TestContext::with_failing_mailer();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Kim", "email": "kim@x.com", "password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "UPSTREAM_FAILURE");
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(error_code(&body), "INVALID_REQUEST");
}
