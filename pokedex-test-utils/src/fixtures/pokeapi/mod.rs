use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn pokeapi<'a>(&'a mut self) -> PokeApiFixtures<'a> {
        PokeApiFixtures { setup: self }
    }
}

pub struct PokeApiFixtures<'a> {
    pub setup: &'a mut TestContext,
}
