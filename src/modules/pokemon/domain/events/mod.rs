pub mod pokemon_events;

pub use pokemon_events::{DomainEvent, PokemonCaptured};
