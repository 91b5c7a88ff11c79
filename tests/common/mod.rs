//! In-memory port implementations for integration tests: a repository double
//! backed by a Vec and an event bus that records what was dispatched.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use pokedex_api::modules::pokemon::application::ports::{EventBus, PokemonRepository};
use pokedex_api::modules::pokemon::domain::{
    CaptureStatus, DomainEvent, Pokemon, PokemonHp, PokemonId, PokemonName, PokemonType,
};
use pokedex_api::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
struct StoredPokemon {
    id: i32,
    name: String,
    pokemon_type: PokemonType,
    hp: i32,
    status: CaptureStatus,
}

impl StoredPokemon {
    fn to_entity(&self) -> Pokemon {
        Pokemon::create(
            PokemonId::new(Some(self.id)).unwrap(),
            PokemonName::new(&self.name).unwrap(),
            self.pokemon_type,
            PokemonHp::new(self.hp).unwrap(),
            self.status,
        )
    }
}

/// Vec-backed repository double. Mirrors the production adapter's contract,
/// including the name-uniqueness violation surfacing as a field-level
/// validation error.
#[derive(Default)]
pub struct InMemoryPokemonRepository {
    rows: Mutex<Vec<StoredPokemon>>,
    next_id: AtomicI32,
}

impl InMemoryPokemonRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn save(&self, pokemon: &Pokemon) -> AppResult<Pokemon> {
        let mut rows = self.rows.lock().unwrap();

        match pokemon.id().value() {
            None => {
                if rows.iter().any(|r| r.name == pokemon.name().value()) {
                    return Err(AppError::validation(
                        "name",
                        "A Pokemon with this name already exists",
                    ));
                }

                let stored = StoredPokemon {
                    id: self.next_id.fetch_add(1, Ordering::SeqCst),
                    name: pokemon.name().value().to_string(),
                    pokemon_type: pokemon.pokemon_type(),
                    hp: pokemon.hp().value(),
                    status: pokemon.status(),
                };
                let entity = stored.to_entity();
                rows.push(stored);
                Ok(entity)
            }
            Some(id) => {
                let row = rows
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or_else(|| AppError::NotFound("Record not found".to_string()))?;
                row.name = pokemon.name().value().to_string();
                row.pokemon_type = pokemon.pokemon_type();
                row.hp = pokemon.hp().value();
                row.status = pokemon.status();
                Ok(row.to_entity())
            }
        }
    }

    async fn find_by_id(&self, id: &PokemonId) -> AppResult<Option<Pokemon>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| Some(r.id) == id.value())
            .map(StoredPokemon::to_entity))
    }

    async fn find_all(&self) -> AppResult<Vec<Pokemon>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().map(StoredPokemon::to_entity).collect())
    }

    async fn exists(&self, id: &PokemonId) -> AppResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|r| Some(r.id) == id.value()))
    }

    async fn delete(&self, id: &PokemonId) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|r| Some(r.id) != id.value());
        Ok(())
    }

    fn next_identity(&self) -> PokemonId {
        PokemonId::generate()
    }
}

/// Event bus double recording each dispatched event's type and payload.
#[derive(Default)]
pub struct RecordingEventBus {
    events: Mutex<Vec<(String, serde_json::Value)>>,
}

impl RecordingEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<(String, serde_json::Value)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventBus for RecordingEventBus {
    async fn dispatch(&self, event: Box<dyn DomainEvent>) -> AppResult<()> {
        self.events
            .lock()
            .unwrap()
            .push((event.event_type().to_string(), event.payload()));
        Ok(())
    }

    async fn dispatch_all(&self, events: Vec<Box<dyn DomainEvent>>) -> AppResult<()> {
        for event in events {
            self.dispatch(event).await?;
        }
        Ok(())
    }
}
