//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::session::SessionClaims;
use crate::errors::{AuthError, DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and verifying stateless session tokens
///
/// There is no server-side session table and no revocation list; a token
/// stays valid until it expires.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Session lifetime in seconds (the cookie's `Max-Age`)
    pub fn session_lifetime_seconds(&self) -> i64 {
        self.session_lifetime().num_seconds()
    }

    fn session_lifetime(&self) -> Duration {
        Duration::days(self.config.session_expiry_days)
    }

    /// Mints a signed session token for a user
    pub fn generate_session_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let claims = SessionClaims::new(
            user_id,
            self.session_lifetime(),
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_jwt(&claims)
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &SessionClaims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a session token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(SessionClaims)` - The decoded claims if valid
    /// * `Err(TokenError::TokenExpired)` - Signature is fine but the token is past `exp`
    /// * `Err(TokenError::TokenInvalid)` - Anything else: bad signature, malformed,
    ///   wrong issuer or audience, not yet valid
    pub fn verify_session_token(&self, token: &str) -> Result<SessionClaims, DomainError> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Token(TokenError::TokenExpired),
                _ => DomainError::Token(TokenError::TokenInvalid),
            })
    }

    /// Resolve the caller from an optional presented token
    ///
    /// No token is `Unauthenticated`; otherwise the verification outcome of
    /// [`verify_session_token`](Self::verify_session_token).
    pub fn authenticate(&self, token: Option<&str>) -> Result<Uuid, DomainError> {
        let token = match token.map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => return Err(DomainError::Auth(AuthError::Unauthenticated)),
        };

        let claims = self.verify_session_token(token)?;
        Ok(claims.user_id()?)
    }
}
