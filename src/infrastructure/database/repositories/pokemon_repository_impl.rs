use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::infrastructure::database::{
    connection::Database, mappers::PokemonMapper, models::PokemonModel, schema::pokemon,
};
use crate::modules::pokemon::application::ports::PokemonRepository;
use crate::modules::pokemon::domain::{Pokemon as PokemonEntity, PokemonId};
use crate::shared::errors::AppResult;

/// Postgres adapter for the Pokemon repository port.
///
/// Diesel is synchronous, so every query runs on the blocking thread pool.
/// The name-uniqueness constraint lives in the database; a violation comes
/// back as a unique-violation error that `AppError::from` turns into a
/// field-level validation error.
pub struct PokemonRepositoryImpl {
    db: Arc<Database>,
}

impl PokemonRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PokemonRepository for PokemonRepositoryImpl {
    async fn save(&self, entity: &PokemonEntity) -> AppResult<PokemonEntity> {
        let db = Arc::clone(&self.db);
        let existing_id = entity.id().value();
        let insert_row = PokemonMapper::to_insert_row(entity);
        let changeset = PokemonMapper::to_changeset(entity);

        let model = task::spawn_blocking(move || -> AppResult<PokemonModel> {
            let mut conn = db.get_connection()?;
            let m = match existing_id {
                None => diesel::insert_into(pokemon::table)
                    .values(&insert_row)
                    .get_result::<PokemonModel>(&mut conn)?,
                Some(id) => diesel::update(pokemon::table.find(id))
                    .set(&changeset)
                    .get_result::<PokemonModel>(&mut conn)?,
            };
            Ok(m)
        })
        .await??;

        PokemonMapper::to_domain(model)
    }

    async fn find_by_id(&self, id: &PokemonId) -> AppResult<Option<PokemonEntity>> {
        let Some(id) = id.value() else {
            return Ok(None);
        };
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<PokemonModel>> {
            let mut conn = db.get_connection()?;
            let m = pokemon::table
                .find(id)
                .first::<PokemonModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model.map(PokemonMapper::to_domain).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<PokemonEntity>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<PokemonModel>> {
            let mut conn = db.get_connection()?;
            let m = pokemon::table.load::<PokemonModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        models.into_iter().map(PokemonMapper::to_domain).collect()
    }

    async fn exists(&self, id: &PokemonId) -> AppResult<bool> {
        let Some(id) = id.value() else {
            return Ok(false);
        };
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let found = diesel::select(diesel::dsl::exists(
                pokemon::table.filter(pokemon::id.eq(id)),
            ))
            .get_result::<bool>(&mut conn)?;
            Ok(found)
        })
        .await?
    }

    async fn delete(&self, id: &PokemonId) -> AppResult<()> {
        // Deleting an unassigned id is a silent no-op.
        let Some(id) = id.value() else {
            return Ok(());
        };
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            diesel::delete(pokemon::table.find(id)).execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    fn next_identity(&self) -> PokemonId {
        PokemonId::generate()
    }
}
