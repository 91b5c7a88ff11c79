pub mod pokemon_repository_impl;

pub use pokemon_repository_impl::PokemonRepositoryImpl;
