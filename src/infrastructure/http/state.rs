use std::sync::Arc;

use crate::infrastructure::bus::SyncEventBus;
use crate::infrastructure::database::{connection::Database, repositories::PokemonRepositoryImpl};
use crate::modules::pokemon::application::ports::{EventBus, PokemonRepository};
use crate::modules::pokemon::application::use_cases::{
    create_pokemon::CreatePokemonHandler, get_pokemon_by_id::GetPokemonByIdHandler,
    list_pokemon::ListPokemonHandler,
};

/// Shared application state: the command/query handlers with their ports
/// wired in. Adapters are injected explicitly here; there is no ambient
/// registry.
pub struct AppState {
    pub create_handler: CreatePokemonHandler,
    pub get_by_id_handler: GetPokemonByIdHandler,
    pub list_handler: ListPokemonHandler,
}

impl AppState {
    /// Production wiring: Postgres repository and the logging event bus.
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_ports(Arc::new(PokemonRepositoryImpl::new(db)), Arc::new(SyncEventBus))
    }

    /// Wiring with explicit port implementations; tests pass in-memory
    /// doubles here.
    pub fn with_ports(
        repository: Arc<dyn PokemonRepository>,
        event_bus: Arc<dyn EventBus>,
    ) -> Self {
        Self {
            create_handler: CreatePokemonHandler::new(Arc::clone(&repository), event_bus),
            get_by_id_handler: GetPokemonByIdHandler::new(Arc::clone(&repository)),
            list_handler: ListPokemonHandler::new(repository),
        }
    }
}
