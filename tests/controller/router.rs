use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
};
use pokedex::{model::user_pokemon::UserPokemonDto, server::router::routes};
use tower::ServiceExt;

use super::*;
use crate::util::bearer;

fn records_request(authorization: Option<&str>) -> Request<Body> {
    let mut request = Request::builder().uri("/api/pokemon-usuario/?favorite=true");
    if let Some(value) = authorization {
        request = request.header(AUTHORIZATION, value);
    }

    request.body(Body::empty()).unwrap()
}

#[tokio::test]
/// Expect 401 from a protected route without an Authorization header
async fn protected_route_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app.oneshot(records_request(None)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 for a token signed with another secret
async fn protected_route_rejects_forged_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let app = routes().with_state(test.into_app_state());

    let forged = pokedex::server::util::jwt::JwtKeys::new("not-the-secret", 30, 1)
        .issue(1, pokedex::model::auth::TokenKind::Access)
        .unwrap();
    let header = format!("Bearer {}", forged);

    let resp = app.oneshot(records_request(Some(&header))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect the bearer token to scope the listing to its user
async fn protected_route_with_bearer_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .with_user("misty")
        .with_user_pokemon(1, "25", true, false)
        .with_user_pokemon(2, "121", true, false)
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(records_request(Some(&bearer(2))))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let records: Vec<UserPokemonDto> = response_json(resp).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].code, "121");

    Ok(())
}

#[tokio::test]
/// Expect the legacy `Token` scheme to be accepted as well
async fn protected_route_with_token_scheme() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_user("ash")
        .build()
        .await?;
    let app = routes().with_state(test.into_app_state());
    let header = bearer(1).replacen("Bearer", "Token", 1);

    let resp = app.oneshot(records_request(Some(&header))).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to be served
async fn openapi_document_is_served() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = routes().with_state(test.into_app_state());

    let resp = app
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let document: serde_json::Value = response_json(resp).await;
    assert!(document["paths"].get("/api/pokemon-usuario/{id}/").is_some());

    Ok(())
}
