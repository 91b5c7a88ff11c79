pub mod create_pokemon;
pub mod get_pokemon_by_id;
pub mod list_pokemon;
