/// Query for listing every Pokemon. Carries no parameters; there is no
/// pagination or filtering on this endpoint.
#[derive(Debug, Clone, Default)]
pub struct ListPokemonQuery;

impl ListPokemonQuery {
    pub fn new() -> Self {
        Self
    }
}
