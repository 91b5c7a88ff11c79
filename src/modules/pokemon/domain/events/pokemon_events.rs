//! Domain events for the Pokemon aggregate.
//!
//! Events record business-meaningful state changes after they have happened.
//! The aggregate buffers them; the command handler drains the buffer once per
//! execution and hands the events to the event bus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Base trait for all domain events
pub trait DomainEvent: Send + Sync {
    /// When the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Unique identifier for this event
    fn event_id(&self) -> Uuid;

    /// Type of event (for serialization/routing)
    fn event_type(&self) -> &'static str;

    /// Transport-safe payload for logging and subscribers
    fn payload(&self) -> serde_json::Value;
}

/// A wild Pokemon was captured.
///
/// Recorded by the aggregate at the moment of the wild -> captured
/// transition. At that point the Pokemon may not be persisted yet, so
/// `pokemon_id` is absent until the create handler stamps the id assigned
/// by the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonCaptured {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pokemon_id: Option<i32>,
    pub pokemon_name: String,
}

impl PokemonCaptured {
    pub fn new(pokemon_id: Option<i32>, pokemon_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pokemon_id,
            pokemon_name,
        }
    }

    /// Re-stamp the event with the identity the persistence adapter
    /// assigned, keeping event id and timestamp intact.
    pub fn with_pokemon_id(mut self, pokemon_id: i32) -> Self {
        self.pokemon_id = Some(pokemon_id);
        self
    }
}

impl DomainEvent for PokemonCaptured {
    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    fn event_id(&self) -> Uuid {
        self.event_id
    }

    fn event_type(&self) -> &'static str {
        "PokemonCaptured"
    }

    fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
