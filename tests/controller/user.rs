use pokedex::{
    model::auth::{RegisterUserDto, UserDto, LOGIN_MAX_LEN},
    server::controller::{
        user::{get_current_user, register_user},
        util::auth_user::AuthUser,
    },
};

use super::*;

fn registration(login: &str, email: &str) -> RegisterUserDto {
    RegisterUserDto {
        name: "Brock".to_string(),
        login: login.to_string(),
        email: email.to_string(),
        password: "onix-is-rock".to_string(),
    }
}

#[tokio::test]
/// Expect 201 with the created user, without any password material
async fn register_creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register_user(
        State(test.into_app_state()),
        Json(registration("brock", "brock@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = response_json(resp).await;
    assert_eq!(body["login"], "brock");
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());

    Ok(())
}

#[tokio::test]
/// Expect 409 when the login is taken
async fn register_taken_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("brock")
        .build()
        .await?;

    let result = register_user(
        State(test.into_app_state()),
        Json(registration("brock", "other@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 when a required field is blank
async fn register_blank_field() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register_user(
        State(test.into_app_state()),
        Json(registration("  ", "brock@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the name is blank
async fn register_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register_user(
        State(test.into_app_state()),
        Json(RegisterUserDto {
            name: String::new(),
            ..registration("brock", "brock@example.com")
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the login is longer than its column
async fn register_long_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register_user(
        State(test.into_app_state()),
        Json(registration(
            &"b".repeat(LOGIN_MAX_LEN + 1),
            "brock@example.com",
        )),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the user the token belongs to
async fn current_user_is_returned() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user("misty")
        .build()
        .await?;

    let result = get_current_user(State(test.into_app_state()), AuthUser(2)).await;

    assert!(result.is_ok());
    let user: UserDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(user.id, 2);
    assert_eq!(user.login, "misty");

    Ok(())
}

#[tokio::test]
/// Expect 401 when the token's user no longer exists
async fn current_user_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_current_user(State(test.into_app_state()), AuthUser(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
