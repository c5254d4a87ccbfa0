use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column widths of a stored user, in characters
pub const USER_NAME_MAX_LEN: usize = 100;
pub const LOGIN_MAX_LEN: usize = 100;
pub const EMAIL_MAX_LEN: usize = 255;

/// Credentials exchanged for a token pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RefreshDto {
    pub refresh: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AccessTokenDto {
    pub access: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterUserDto {
    pub name: String,
    pub login: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub login: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by every issued JWT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub user_id: i32,
    pub token_type: TokenKind,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Error, Debug)]
pub enum TokenDecodeError {
    #[error("Token is not a three part JWT")]
    Malformed,
    #[error("Token payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Token payload does not carry a user ID: {0}")]
    Payload(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct UserIdPayload {
    user_id: i32,
}

/// Reads the user ID from a JWT payload without verifying the signature.
///
/// The client only uses this to scope its own requests; the server verifies every token it
/// receives.
pub fn decode_user_id(token: &str) -> Result<i32, TokenDecodeError> {
    let mut parts = token.split('.');

    let (Some(_header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenDecodeError::Malformed);
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    let payload: UserIdPayload = serde_json::from_slice(&bytes)?;

    Ok(payload.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        format!(
            "{}.{}.signature",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn decodes_user_id() {
        let token = token_with_payload(r#"{"user_id":42,"token_type":"access","exp":1}"#);

        assert_eq!(decode_user_id(&token).unwrap(), 42);
    }

    #[test]
    fn accepts_padded_payload() {
        let padded = format!(
            "h.{}.s",
            base64::engine::general_purpose::URL_SAFE.encode(r#"{"user_id":3}"#)
        );

        assert_eq!(decode_user_id(&padded).unwrap(), 3);
    }

    #[test]
    fn rejects_token_without_three_parts() {
        assert!(matches!(
            decode_user_id("not-a-jwt"),
            Err(TokenDecodeError::Malformed)
        ));
        assert!(matches!(
            decode_user_id("a.b.c.d"),
            Err(TokenDecodeError::Malformed)
        ));
    }

    #[test]
    fn rejects_payload_without_user_id() {
        let token = token_with_payload(r#"{"sub":"someone"}"#);

        assert!(matches!(
            decode_user_id(&token),
            Err(TokenDecodeError::Payload(_))
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode_user_id("h.***.s"),
            Err(TokenDecodeError::Base64(_))
        ));
    }
}
