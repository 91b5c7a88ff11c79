use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::pokemon::application::ports::PokemonRepository;
use crate::modules::pokemon::application::views::PokemonListView;
use crate::shared::{application::use_case::Query, errors::AppResult};

use super::query::ListPokemonQuery;

/// Query handler for listing all Pokemon
pub struct ListPokemonHandler {
    repository: Arc<dyn PokemonRepository>,
}

impl ListPokemonHandler {
    pub fn new(repository: Arc<dyn PokemonRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Query<ListPokemonQuery, PokemonListView> for ListPokemonHandler {
    async fn execute(&self, _query: ListPokemonQuery) -> AppResult<PokemonListView> {
        let pokemon = self.repository.find_all().await?;

        Ok(PokemonListView::from_pokemon(&pokemon))
    }
}
