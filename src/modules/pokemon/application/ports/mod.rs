pub mod event_bus;
pub mod pokemon_repository;

pub use event_bus::EventBus;
pub use pokemon_repository::PokemonRepository;
