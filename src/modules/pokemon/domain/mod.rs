pub mod entities;
pub mod events;
pub mod value_objects;

pub use entities::Pokemon;
pub use events::{DomainEvent, PokemonCaptured};
pub use value_objects::{CaptureStatus, PokemonHp, PokemonId, PokemonName, PokemonType};
