/**
 * Session Tokens
 *
 * This module signs and verifies the HS256 bearer tokens handed out by
 * signup and login.
 *
 * A token carries the user's email plus the registered claims `iss`, `aud`,
 * `iat`, `nbf` and `exp`. Verification checks the signature, issuer,
 * audience, expiry and not-before; `exp`, `iss`, `aud` and `nbf` must all be
 * present.
 */

use std::fmt;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::AppConfig;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Email of the user the token was issued to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Not before (Unix timestamp)
    pub nbf: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies bearer tokens
///
/// Built once from `AppConfig` at startup and shared read-only through
/// `AppState`.
///
/// # Example
///
/// ```rust
/// use palabrator::backend::auth::sessions::TokenService;
/// use palabrator::shared::AppConfig;
///
/// let config = AppConfig::builder().jwt_secret("doc-secret").build().unwrap();
/// let tokens = TokenService::from_config(&config);
///
/// let token = tokens.sign("user@example.com").unwrap();
/// let claims = tokens.verify(&token).unwrap();
/// assert_eq!(claims.email.as_deref(), Some("user@example.com"));
/// ```
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    ttl_seconds: i64,
    validation: Validation,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    pub fn from_config(config: &AppConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.jwt_issuer.as_str()]);
        validation.set_audience(&[config.jwt_audience.as_str()]);
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp", "iss", "aud", "nbf"]);

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            ttl_seconds: i64::try_from(config.token_ttl.as_secs()).unwrap_or(i64::MAX / 2),
            validation,
        }
    }

    /// Create a token for `email`, valid from now until now + ttl
    pub fn sign(&self, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign_at(email, Utc::now())
    }

    /// Create a token as if issued at `issued_at`
    pub fn sign_at(
        &self,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            email: Some(email.to_string()),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat,
            nbf: iat,
            exp: iat.saturating_add(self.ttl_seconds),
        };

        self.encode(&claims)
    }

    /// Sign arbitrary claims with this service's key
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
    }

    /// Verify a token and return its claims
    ///
    /// # Errors
    ///
    /// Fails if the signature, issuer, audience, `exp` or `nbf` do not check
    /// out, or if the token is not a well-formed JWT.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }
}
