use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::pokemon::application::ports::PokemonRepository;
use crate::modules::pokemon::application::views::PokemonView;
use crate::modules::pokemon::domain::PokemonId;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::query::GetPokemonByIdQuery;

/// Query handler for fetching a Pokemon by id
pub struct GetPokemonByIdHandler {
    repository: Arc<dyn PokemonRepository>,
}

impl GetPokemonByIdHandler {
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<GetPokemonByIdQuery, PokemonView> for GetPokemonByIdHandler {
    async fn execute(&self, query: GetPokemonByIdQuery) -> AppResult<PokemonView> {
        let id = PokemonId::parse(&query.id)?;

        let pokemon = self
            .repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Pokemon with ID \"{}\" not found", id)))?;

        Ok(PokemonView::from(&pokemon))
    }
}
