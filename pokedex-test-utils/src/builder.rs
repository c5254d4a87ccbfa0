//! Declarative test builder.
//!
//! All configuration calls are queued and executed in `build()`: tables first, then database
//! fixtures, then mock PokeAPI endpoints.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

enum Endpoint {
    Pokemon(String, Value),
    PokemonList(Value),
    TypeList(Value),
    GenerationList(Value),
    Type(i32, Value),
    Generation(i32, Value),
    Status(String, usize),
}

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,

    users: Vec<String>,
    // (user_id, code, favorite, team)
    user_pokemon: Vec<(i32, String, bool, bool)>,

    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    endpoints: Vec<(Endpoint, usize)>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            users: Vec::new(),
            user_pokemon: Vec::new(),
            mock_builders: Vec::new(),
            endpoints: Vec::new(),
        }
    }

    /// Add the `poke_user` and `user_pokemon` tables.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the given login.
    ///
    /// Users are inserted in call order, so the first one gets ID 1, the second ID 2, and
    /// so on. Requires the user tables.
    pub fn with_user(mut self, login: impl Into<String>) -> Self {
        self.users.push(login.into());
        self
    }

    /// Insert a per-user record, after all users have been inserted.
    pub fn with_user_pokemon(
        mut self,
        user_id: i32,
        code: impl Into<String>,
        favorite: bool,
        team: bool,
    ) -> Self {
        self.user_pokemon
            .push((user_id, code.into(), favorite, team));
        self
    }

    /// Mock `/pokemon/{id_or_name}` returning `body`.
    pub fn with_pokemon_endpoint(
        mut self,
        id_or_name: impl Into<String>,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints
            .push((Endpoint::Pokemon(id_or_name.into(), body), expected_requests));
        self
    }

    /// Mock the paginated `/pokemon` listing.
    pub fn with_pokemon_list_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.endpoints
            .push((Endpoint::PokemonList(body), expected_requests));
        self
    }

    pub fn with_type_list_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.endpoints
            .push((Endpoint::TypeList(body), expected_requests));
        self
    }

    pub fn with_generation_list_endpoint(mut self, body: Value, expected_requests: usize) -> Self {
        self.endpoints
            .push((Endpoint::GenerationList(body), expected_requests));
        self
    }

    pub fn with_type_endpoint(
        mut self,
        type_id: i32,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints
            .push((Endpoint::Type(type_id, body), expected_requests));
        self
    }

    pub fn with_generation_endpoint(
        mut self,
        generation_id: i32,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints
            .push((Endpoint::Generation(generation_id, body), expected_requests));
        self
    }

    /// Mock any GET on `path` answering with a bare `status`.
    pub fn with_status_endpoint(
        mut self,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints
            .push((Endpoint::Status(path.into(), status), expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by creating all configured tables, fixtures and mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHash)` - Hashing a fixture password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PokeUser),
                schema.create_table_from_entity(entity::prelude::UserPokemon),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for login in self.users {
            setup.user().insert_user(&login).await?;
        }

        for (user_id, code, favorite, team) in self.user_pokemon {
            setup
                .user()
                .insert_user_pokemon(user_id, &code, favorite, team)
                .await?;
        }

        // 3. Create mock endpoints, custom ones first so they take precedence
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (endpoint, expected) in self.endpoints {
            let mut pokeapi = setup.pokeapi();

            let mock = match endpoint {
                Endpoint::Pokemon(id_or_name, body) => {
                    pokeapi.create_pokemon_endpoint(&id_or_name, body, expected)
                }
                Endpoint::PokemonList(body) => {
                    pokeapi.create_pokemon_list_endpoint(body, expected)
                }
                Endpoint::TypeList(body) => pokeapi.create_type_list_endpoint(body, expected),
                Endpoint::GenerationList(body) => {
                    pokeapi.create_generation_list_endpoint(body, expected)
                }
                Endpoint::Type(type_id, body) => {
                    pokeapi.create_type_endpoint(type_id, body, expected)
                }
                Endpoint::Generation(generation_id, body) => {
                    pokeapi.create_generation_endpoint(generation_id, body, expected)
                }
                Endpoint::Status(path, status) => {
                    pokeapi.create_status_endpoint(&path, status, expected)
                }
            };

            mocks.push(mock);
        }

        // Store mocks so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
