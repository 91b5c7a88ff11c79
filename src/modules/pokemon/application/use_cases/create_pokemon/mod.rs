pub mod command;
pub mod handler;
pub mod response;

pub use command::CreatePokemonCommand;
pub use handler::CreatePokemonHandler;
pub use response::CreatePokemonResponse;
