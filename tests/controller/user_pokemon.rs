use pokedex::{
    model::user_pokemon::{
        CreateUserPokemonDto, UpdateUserPokemonDto, UserPokemonDto, UserPokemonQuery,
        IMAGE_URL_MAX_LEN, NAME_MAX_LEN, TEAM_SIZE_LIMIT,
    },
    server::controller::{
        user_pokemon::{
            create_user_pokemon, delete_user_pokemon, get_user_pokemon, list_user_pokemon,
            update_user_pokemon,
        },
        util::auth_user::AuthUser,
    },
};

use super::*;

fn new_record(code: &str, favorite: bool, team: bool) -> CreateUserPokemonDto {
    CreateUserPokemonDto {
        code: code.to_string(),
        name: format!("pokemon-{}", code),
        image_url: None,
        favorite,
        team,
    }
}

#[tokio::test]
/// Expect only the caller's records matching the filter
async fn list_filters_by_flag_and_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user("misty")
        .with_user_pokemon(1, "25", true, false)
        .with_user_pokemon(1, "6", false, true)
        .with_user_pokemon(2, "121", true, false)
        .build()
        .await?;

    let result = list_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Query(UserPokemonQuery::favorites()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let records: Vec<UserPokemonDto> = response_json(resp).await;
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["25"]);

    Ok(())
}

#[tokio::test]
/// Expect 404 when reading another user's record
async fn get_other_users_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user("misty")
        .with_user_pokemon(2, "121", true, false)
        .build()
        .await?;

    let result = get_user_pokemon(State(test.into_app_state()), AuthUser(1), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 201 with the created record
async fn create_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;

    let result = create_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Json(new_record("25", true, false)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let record: UserPokemonDto = response_json(resp).await;
    assert_eq!(record.code, "25");
    assert!(record.favorite);
    assert!(!record.team);

    Ok(())
}

#[tokio::test]
/// Expect 400 when creating a record with neither flag set
async fn create_without_flags() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;

    let result = create_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Json(new_record("25", false, false)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the name is longer than its column
async fn create_with_long_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;

    let result = create_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Json(CreateUserPokemonDto {
            name: "p".repeat(NAME_MAX_LEN + 1),
            ..new_record("25", true, false)
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 409 when the caller already has a record for the Pokémon
async fn create_duplicate_code() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user_pokemon(1, "25", true, false)
        .build()
        .await?;

    let result = create_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Json(new_record("25", false, true)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 403 when adding a team member to a full team
async fn create_with_full_team() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_user_tables().with_user("ash");
    for code in 1..=TEAM_SIZE_LIMIT {
        builder = builder.with_user_pokemon(1, code.to_string(), false, true);
    }
    let test = builder.build().await?;

    let result = create_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Json(new_record("150", false, true)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the updated record when a flag remains set
async fn update_returns_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user_pokemon(1, "25", true, false)
        .build()
        .await?;

    let result = update_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Path(1),
        Json(UpdateUserPokemonDto {
            team: Some(true),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let record: UserPokemonDto = response_json(resp).await;
    assert!(record.favorite);
    assert!(record.team);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the new image URL is longer than its column
async fn update_with_long_image_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user_pokemon(1, "25", true, false)
        .build()
        .await?;

    let result = update_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Path(1),
        Json(UpdateUserPokemonDto {
            image_url: Some("x".repeat(IMAGE_URL_MAX_LEN + 1)),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 204 and the record gone once both flags are cleared
async fn update_clearing_both_flags_deletes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user_pokemon(1, "25", true, false)
        .build()
        .await?;
    let state = test.into_app_state();

    let result = update_user_pokemon(
        State(state.clone()),
        AuthUser(1),
        Path(1),
        Json(UpdateUserPokemonDto {
            favorite: Some(false),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::NO_CONTENT);

    let resp = list_user_pokemon(State(state), AuthUser(1), Query(UserPokemonQuery::default()))
        .await
        .unwrap()
        .into_response();
    let records: Vec<UserPokemonDto> = response_json(resp).await;
    assert!(records.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 204 when deleting an owned record and 404 on the second attempt
async fn delete_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user_pokemon(1, "25", true, true)
        .build()
        .await?;
    let state = test.into_app_state();

    let first = delete_user_pokemon(State(state.clone()), AuthUser(1), Path(1)).await;
    let second = delete_user_pokemon(State(state), AuthUser(1), Path(1)).await;

    assert!(first.is_ok());
    assert_eq!(first.unwrap().into_response().status(), StatusCode::NO_CONTENT);
    assert!(second.is_err());
    assert_eq!(
        second.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

#[tokio::test]
/// Expect 500 when the record tables do not exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = list_user_pokemon(
        State(test.into_app_state()),
        AuthUser(1),
        Query(UserPokemonQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
