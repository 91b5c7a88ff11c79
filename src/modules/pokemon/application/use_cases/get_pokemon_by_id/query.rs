/// Query for fetching a single Pokemon by its id, as received in the URL
/// path (still a string at this point).
#[derive(Debug, Clone)]
pub struct GetPokemonByIdQuery {
    pub id: String,
}

impl GetPokemonByIdQuery {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}
