pub mod handler;
pub mod query;

pub use handler::GetPokemonByIdHandler;
pub use query::GetPokemonByIdQuery;
