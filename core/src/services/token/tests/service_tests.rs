//! Tests for the session token service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::session::SessionClaims;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::token::{TokenService, TokenServiceConfig};

fn service() -> TokenService {
    TokenService::new(TokenServiceConfig {
        jwt_secret: "test-secret".to_string(),
        ..Default::default()
    })
}

#[test]
fn test_generate_and_verify_round_trip() {
    let service = service();
    let user_id = Uuid::new_v4();

    let token = service.generate_session_token(user_id).unwrap();
    let claims = service.verify_session_token(&token).unwrap();

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.iss, "scribe");
    assert_eq!(claims.aud, "scribe-web");
    assert_eq!(service.session_lifetime_seconds(), 7 * 24 * 60 * 60);
}

#[test]
fn test_authenticate_without_token_is_unauthenticated() {
    let service = service();
    assert!(matches!(
        service.authenticate(None),
        Err(DomainError::Auth(AuthError::Unauthenticated))
    ));
    assert!(matches!(
        service.authenticate(Some("  ")),
        Err(DomainError::Auth(AuthError::Unauthenticated))
    ));
}

#[test]
fn test_expired_token_is_distinct_from_invalid() {
    let service = service();
    let issued = Utc::now() - Duration::days(10);
    let claims = SessionClaims::issued_at(Uuid::new_v4(), issued, Duration::days(1), "scribe", "scribe-web");
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.authenticate(Some(&token)),
        Err(DomainError::Token(TokenError::TokenExpired))
    ));
}

#[test]
fn test_tampered_and_foreign_tokens_are_invalid() {
    let service = service();
    let token = service.generate_session_token(Uuid::new_v4()).unwrap();

    let parts: Vec<&str> = token.split('.').collect();
    let tampered = format!("{}.{}.c2lnbmF0dXJl", parts[0], parts[1]);
    assert!(matches!(
        service.verify_session_token(&tampered),
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));

    let other = TokenService::new(TokenServiceConfig {
        jwt_secret: "another-secret".to_string(),
        ..Default::default()
    });
    let foreign = other.generate_session_token(Uuid::new_v4()).unwrap();
    assert!(matches!(
        service.verify_session_token(&foreign),
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));

    assert!(matches!(
        service.verify_session_token("not.a.jwt"),
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}

#[test]
fn test_wrong_audience_is_invalid() {
    let service = service();
    let claims = SessionClaims::new(Uuid::new_v4(), Duration::days(1), "scribe", "someone-else");
    let token = service.encode_jwt(&claims).unwrap();

    assert!(matches!(
        service.verify_session_token(&token),
        Err(DomainError::Token(TokenError::TokenInvalid))
    ));
}
