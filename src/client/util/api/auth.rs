use crate::{
    client::util::api::{http, ApiError},
    model::auth::{LoginDto, TokenPairDto},
};

/// Exchanges credentials for an access and refresh token
pub async fn obtain_token(credentials: &LoginDto) -> Result<TokenPairDto, ApiError> {
    http::post("/token/", credentials).await
}
