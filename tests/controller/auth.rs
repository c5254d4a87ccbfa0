use pokedex::{
    model::auth::{
        decode_user_id, AccessTokenDto, LoginDto, RefreshDto, TokenKind, TokenPairDto,
    },
    server::controller::auth::{obtain_token, refresh_token},
};

use super::*;
use crate::util::test_jwt_keys;

fn credentials(login: &str, password: &str) -> LoginDto {
    LoginDto {
        login: login.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 with an access and refresh token for valid credentials
async fn token_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;

    let result = obtain_token(
        State(test.into_app_state()),
        Json(credentials("ash", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let tokens: TokenPairDto = response_json(resp).await;
    assert_eq!(decode_user_id(&tokens.access).unwrap(), 1);
    assert!(test_jwt_keys()
        .verify(&tokens.refresh, TokenKind::Refresh)
        .is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password
async fn token_for_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;

    let result = obtain_token(
        State(test.into_app_state()),
        Json(credentials("ash", "pikachu")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 for an unknown login
async fn token_for_unknown_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = obtain_token(
        State(test.into_app_state()),
        Json(credentials("gary", TEST_PASSWORD)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 with a new access token for a refresh token
async fn refresh_issues_access_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;
    let refresh = test_jwt_keys().issue(1, TokenKind::Refresh).unwrap();

    let result = refresh_token(State(test.into_app_state()), Json(RefreshDto { refresh })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let access: AccessTokenDto = response_json(resp).await;
    assert!(test_jwt_keys()
        .verify(&access.access, TokenKind::Access)
        .is_ok());

    Ok(())
}

#[tokio::test]
/// Expect 401 when an access token is presented as a refresh token
async fn refresh_rejects_access_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;
    let refresh = test_jwt_keys().issue(1, TokenKind::Access).unwrap();

    let result = refresh_token(State(test.into_app_state()), Json(RefreshDto { refresh })).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
