pub mod handler;
pub mod query;

pub use handler::ListPokemonHandler;
pub use query::ListPokemonQuery;
