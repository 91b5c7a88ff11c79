pub mod capture_status;
pub mod pokemon_hp;
pub mod pokemon_id;
pub mod pokemon_name;
pub mod pokemon_type;

pub use capture_status::CaptureStatus;
pub use pokemon_hp::PokemonHp;
pub use pokemon_id::PokemonId;
pub use pokemon_name::PokemonName;
pub use pokemon_type::PokemonType;
