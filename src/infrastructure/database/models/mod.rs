pub mod pokemon_model;

pub use pokemon_model::{NewPokemonRow, PokemonChangeset, PokemonModel};
