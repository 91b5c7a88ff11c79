use chrono::Utc;

use crate::infrastructure::database::models::{NewPokemonRow, PokemonChangeset, PokemonModel};
use crate::modules::pokemon::domain::{Pokemon, PokemonHp, PokemonId, PokemonName};
use crate::shared::errors::AppResult;

/// Maps between the persistence row representation and the domain entity.
///
/// Row values re-enter the domain through the value-object constructors, so
/// a corrupted row surfaces as an `InvalidData` error instead of a malformed
/// entity. The enum columns arrive already typed via diesel.
pub struct PokemonMapper;

impl PokemonMapper {
    pub fn to_domain(model: PokemonModel) -> AppResult<Pokemon> {
        Ok(Pokemon::create(
            PokemonId::new(Some(model.id))?,
            PokemonName::new(&model.name)?,
            model.type_,
            PokemonHp::new(model.hp)?,
            model.status,
        ))
    }

    pub fn to_insert_row(pokemon: &Pokemon) -> NewPokemonRow {
        NewPokemonRow {
            name: pokemon.name().value().to_string(),
            type_: pokemon.pokemon_type(),
            hp: pokemon.hp().value(),
            status: pokemon.status(),
        }
    }

    pub fn to_changeset(pokemon: &Pokemon) -> PokemonChangeset {
        PokemonChangeset {
            name: pokemon.name().value().to_string(),
            type_: pokemon.pokemon_type(),
            hp: pokemon.hp().value(),
            status: pokemon.status(),
            updated_at: Utc::now(),
        }
    }
}
