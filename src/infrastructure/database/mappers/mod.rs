pub mod pokemon_mapper;

pub use pokemon_mapper::PokemonMapper;
