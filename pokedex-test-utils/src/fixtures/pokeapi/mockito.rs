//! PokeAPI mock endpoint creation utilities.
//!
//! Each method registers a GET endpoint on the mock server that verifies it was called
//! exactly `expected_requests` times.

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::fixtures::pokeapi::PokeApiFixtures;

impl<'a> PokeApiFixtures<'a> {
    fn json_endpoint(&mut self, path: &str, body: &Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// `/pokemon/{id_or_name}` returning `body`
    pub fn create_pokemon_endpoint(
        &mut self,
        id_or_name: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(&format!("/pokemon/{}", id_or_name), &body, expected_requests)
    }

    /// `/pokemon` listing, any query string
    pub fn create_pokemon_list_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.json_endpoint("/pokemon", &body, expected_requests)
    }

    pub fn create_type_list_endpoint(&mut self, body: Value, expected_requests: usize) -> Mock {
        self.json_endpoint("/type", &body, expected_requests)
    }

    pub fn create_generation_list_endpoint(
        &mut self,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint("/generation", &body, expected_requests)
    }

    pub fn create_type_endpoint(
        &mut self,
        type_id: i32,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(&format!("/type/{}", type_id), &body, expected_requests)
    }

    pub fn create_generation_endpoint(
        &mut self,
        generation_id: i32,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.json_endpoint(
            &format!("/generation/{}", generation_id),
            &body,
            expected_requests,
        )
    }

    /// Any GET on `path` answering with `status` and an empty JSON object
    pub fn create_status_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }
}
