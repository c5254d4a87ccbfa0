//! HS256 token issuing and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    model::auth::{TokenClaims, TokenKind},
    server::error::{auth::AuthError, Error},
};

/// Signing keys and token lifetimes
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_lifetime: Duration,
    refresh_lifetime: Duration,
}

impl JwtKeys {
    pub fn new(secret: &str, access_token_minutes: i64, refresh_token_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_lifetime: Duration::minutes(access_token_minutes),
            refresh_lifetime: Duration::days(refresh_token_days),
        }
    }

    /// Signs a token of the given kind for `user_id`.
    pub fn issue(&self, user_id: i32, kind: TokenKind) -> Result<String, Error> {
        let now = Utc::now();
        let lifetime = match kind {
            TokenKind::Access => self.access_lifetime,
            TokenKind::Refresh => self.refresh_lifetime,
        };

        let claims = TokenClaims {
            user_id,
            token_type: kind,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies signature, expiry and token kind.
    ///
    /// # Returns
    /// - `Ok(TokenClaims)` - The token is valid and of the expected kind
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed token
    /// - `Err(AuthError::WrongTokenType)` - A refresh token used as access token or vice versa
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<TokenClaims, AuthError> {
        let data = decode::<TokenClaims>(
            token,
            &self.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::InvalidToken)?;

        if data.claims.token_type != expected {
            return Err(AuthError::WrongTokenType {
                expected: match expected {
                    TokenKind::Access => "access",
                    TokenKind::Refresh => "refresh",
                },
            });
        }

        Ok(data.claims)
    }
}
