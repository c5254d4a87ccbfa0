//! Placeholder values shared across tests.

/// User agent sent to the mock PokeAPI server.
pub static TEST_USER_AGENT: &str = "pokedex-tests/0.1 (contact@example.com)";

/// Secret used to sign tokens in tests.
pub static TEST_JWT_SECRET: &str = "pokedex-test-secret";

/// Password of every user inserted by the fixtures.
pub static TEST_PASSWORD: &str = "correct horse battery staple";
