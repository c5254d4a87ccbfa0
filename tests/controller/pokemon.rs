use pokedex::{
    model::pokemon::{PokemonDto, PokemonListDto, PokemonPageDto, TypeListDto},
    server::controller::pokemon::{
        filter_by_type, filter_combined, get_pokemon, get_types, list_pokemon, search_by_name,
        CombinedFilterParams, FilterParams, PageParams, SearchParams,
    },
};

use super::*;

#[tokio::test]
/// Expect 200 with one page of entries and clamped limit in the page links
async fn list_returns_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokemon_list_endpoint(
            factory::pokemon_list(1302, &[(1, "bulbasaur"), (2, "ivysaur")]),
            1,
        )
        .build()
        .await?;

    let result = list_pokemon(
        State(test.into_app_state()),
        Query(PageParams {
            offset: Some(0),
            limit: Some(500),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PokemonPageDto = response_json(resp).await;
    assert_eq!(page.count, 1302);
    assert_eq!(page.results.len(), 2);
    assert!(page.previous.is_none());
    assert!(page
        .next
        .is_some_and(|next| next.contains("offset=100") && next.contains("limit=100")));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect 502 when PokeAPI fails
async fn list_upstream_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_endpoint("/pokemon", 503, 1)
        .build()
        .await?;

    let result = list_pokemon(State(test.into_app_state()), Query(PageParams::default())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the Pokémon and its types in slot order
async fn get_returns_pokemon_with_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokemon_endpoint(
            "6",
            factory::pokemon(6, "charizard", &["fire", "flying"]),
            1,
        )
        .build()
        .await?;

    let result = get_pokemon(State(test.into_app_state()), Path(6)).await;

    assert!(result.is_ok());
    let pokemon: PokemonDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(pokemon.name, "charizard");
    assert_eq!(pokemon.types, vec!["fire", "flying"]);
    assert_eq!(pokemon.image_url, "https://img.example/artwork/6.png");

    Ok(())
}

#[tokio::test]
/// Expect 404 for an ID PokeAPI does not know
async fn get_unknown_pokemon() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_endpoint("/pokemon/99999", 404, 1)
        .build()
        .await?;

    let result = get_pokemon(State(test.into_app_state()), Path(99999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 with every type listed by PokeAPI
async fn types_are_listed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_type_list_endpoint(factory::type_list(&[(10, "fire"), (11, "water")]), 1)
        .build()
        .await?;

    let result = get_types(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let types: TypeListDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(types.types.len(), 2);
    assert_eq!(types.types[0].id, 10);

    Ok(())
}

#[tokio::test]
/// Expect the all sentinel to yield an empty list without calling PokeAPI
async fn filter_type_sentinel_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = filter_by_type(State(test.into_app_state()), Query(FilterParams { id: 0 })).await;

    assert!(result.is_ok());
    let list: PokemonListDto = response_json(result.unwrap().into_response()).await;
    assert!(list.results.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 400 when both combined filters are set to all
async fn filter_combined_both_sentinels() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = filter_combined(
        State(test.into_app_state()),
        Query(CombinedFilterParams {
            gen_id: 0,
            type_id: 0,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the intersection of type and generation, sorted by ID
async fn filter_combined_intersects() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_type_endpoint(
            10,
            factory::type_detail(
                10,
                "fire",
                &[(155, "cyndaquil"), (6, "charizard"), (4, "charmander")],
            ),
            1,
        )
        .with_generation_endpoint(
            1,
            factory::generation_detail(
                1,
                "generation-i",
                &[(4, "charmander"), (1, "bulbasaur"), (6, "charizard")],
            ),
            1,
        )
        .build()
        .await?;

    let result = filter_combined(
        State(test.into_app_state()),
        Query(CombinedFilterParams {
            gen_id: 1,
            type_id: 10,
        }),
    )
    .await;

    assert!(result.is_ok());
    let list: PokemonListDto = response_json(result.unwrap().into_response()).await;
    let ids: Vec<i32> = list.results.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4, 6]);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the search to match regardless of case and surrounding whitespace
async fn search_is_case_insensitive() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_pokemon_endpoint("pikachu", factory::pokemon(25, "pikachu", &["electric"]), 1)
        .build()
        .await?;

    let result = search_by_name(
        State(test.into_app_state()),
        Query(SearchParams {
            name: "  PikaChu ".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let pokemon: PokemonDto = response_json(result.unwrap().into_response()).await;
    assert_eq!(pokemon.id, 25);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a name with no match
async fn search_unknown_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_status_endpoint("/pokemon/missingno", 404, 1)
        .build()
        .await?;

    let result = search_by_name(
        State(test.into_app_state()),
        Query(SearchParams {
            name: "missingno".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
