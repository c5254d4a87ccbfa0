use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{
    model::auth::TokenKind,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// Schemes accepted in the `Authorization` header
static AUTH_SCHEMES: [&str; 2] = ["Bearer", "Token"];

/// The user a verified access token belongs to.
///
/// Rejects the request with 401 when the header is absent, uses an unknown scheme, or
/// carries a token that fails verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub i32);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;

        let token = bearer_token(header).ok_or(AuthError::MalformedHeader)?;
        let claims = state.jwt.verify(token, TokenKind::Access)?;

        Ok(AuthUser(claims.user_id))
    }
}

/// Extracts the credential from `<scheme> <token>`, the scheme matched case-insensitively.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();

    let known = AUTH_SCHEMES
        .iter()
        .any(|accepted| accepted.eq_ignore_ascii_case(scheme));

    (known && !token.is_empty()).then_some(token)
}
