use crate::modules::pokemon::application::views::PokemonView;

/// Result of creating a new Pokemon
#[derive(Debug, Clone)]
pub struct CreatePokemonResponse {
    pub pokemon: PokemonView,
}

impl CreatePokemonResponse {
    pub fn from_view(pokemon: PokemonView) -> Self {
        Self { pokemon }
    }
}
