use serde::Serialize;

use crate::modules::pokemon::domain::Pokemon;

/// Transport-safe projection of a Pokemon: every domain wrapper unwrapped to
/// a scalar. `id` is null for a not-yet-persisted entity.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PokemonView {
    pub id: Option<i32>,
    pub name: String,
    #[serde(rename = "type")]
    pub pokemon_type: String,
    pub hp: i32,
    pub status: String,
}

impl From<&Pokemon> for PokemonView {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            id: pokemon.id().value(),
            name: pokemon.name().value().to_string(),
            pokemon_type: pokemon.pokemon_type().to_string(),
            hp: pokemon.hp().value(),
            status: pokemon.status().to_string(),
        }
    }
}

/// Flat list projection with its computed total.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonListView {
    pub pokemon: Vec<PokemonView>,
    pub total: usize,
}

impl PokemonListView {
    pub fn from_pokemon(pokemon: &[Pokemon]) -> Self {
        let views: Vec<PokemonView> = pokemon.iter().map(PokemonView::from).collect();
        let total = views.len();

        Self {
            pokemon: views,
            total,
        }
    }
}
