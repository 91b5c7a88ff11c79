/// Command for registering a new Pokemon, carrying the already
/// shape-validated scalars from the HTTP boundary.
#[derive(Debug, Clone)]
pub struct CreatePokemonCommand {
    pub name: String,
    pub pokemon_type: String,
    pub hp: i32,
    pub status: String,
}

impl CreatePokemonCommand {
    pub fn new(name: String, pokemon_type: String, hp: i32, status: String) -> Self {
        Self {
            name,
            pokemon_type,
            hp,
            status,
        }
    }
}
