use async_trait::async_trait;

use crate::modules::pokemon::domain::{Pokemon, PokemonId};
use crate::shared::errors::AppResult;

/// Port (interface) for Pokemon persistence following Hexagonal Architecture.
/// The application layer consumes this; infrastructure provides the
/// implementation.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Persist a Pokemon and return the stored copy. An unassigned id means
    /// insert; the adapter assigns the identity. An assigned id means update.
    async fn save(&self, pokemon: &Pokemon) -> AppResult<Pokemon>;

    /// Find a Pokemon by id, `None` when absent.
    async fn find_by_id(&self, id: &PokemonId) -> AppResult<Option<Pokemon>>;

    /// All Pokemon, in default table scan order.
    async fn find_all(&self) -> AppResult<Vec<Pokemon>>;

    /// Whether a Pokemon with this id exists.
    async fn exists(&self, id: &PokemonId) -> AppResult<bool>;

    /// Delete by id. Silently no-ops on an unassigned id.
    async fn delete(&self, id: &PokemonId) -> AppResult<()>;

    /// Identity placeholder for a new Pokemon. The database assigns real
    /// ids, so this wraps `None`.
    fn next_identity(&self) -> PokemonId;
}
