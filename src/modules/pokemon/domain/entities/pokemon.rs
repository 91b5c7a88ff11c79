use crate::modules::pokemon::domain::events::PokemonCaptured;
use crate::modules::pokemon::domain::value_objects::{
    CaptureStatus, PokemonHp, PokemonId, PokemonName, PokemonType,
};

/// Pokemon aggregate root.
///
/// Identity, name, type and hp are fixed at construction; capture status is
/// the only mutable field and moves wild -> captured exactly once. Capture
/// records a domain event in a buffer that the command handler drains via
/// `pull_domain_events`.
#[derive(Debug, Clone)]
pub struct Pokemon {
    id: PokemonId,
    name: PokemonName,
    pokemon_type: PokemonType,
    hp: PokemonHp,
    status: CaptureStatus,
    domain_events: Vec<PokemonCaptured>,
}

impl Pokemon {
    pub fn create(
        id: PokemonId,
        name: PokemonName,
        pokemon_type: PokemonType,
        hp: PokemonHp,
        status: CaptureStatus,
    ) -> Self {
        Self {
            id,
            name,
            pokemon_type,
            hp,
            status,
            domain_events: Vec::new(),
        }
    }

    /// Transition to captured. A no-op on an already-captured Pokemon:
    /// status stays captured and no event is recorded.
    pub fn capture(&mut self) {
        if self.status.is_captured() {
            return;
        }

        self.status = self.status.capture();
        self.record_event(PokemonCaptured::new(
            self.id.value(),
            self.name.value().to_string(),
        ));
    }

    pub fn id(&self) -> &PokemonId {
        &self.id
    }

    pub fn name(&self) -> &PokemonName {
        &self.name
    }

    pub fn pokemon_type(&self) -> PokemonType {
        self.pokemon_type
    }

    pub fn hp(&self) -> PokemonHp {
        self.hp
    }

    pub fn status(&self) -> CaptureStatus {
        self.status
    }

    /// Drain the buffered domain events. Read-and-clear: a second call
    /// returns an empty list.
    pub fn pull_domain_events(&mut self) -> Vec<PokemonCaptured> {
        std::mem::take(&mut self.domain_events)
    }

    fn record_event(&mut self, event: PokemonCaptured) {
        self.domain_events.push(event);
    }
}

/// Identity equality: two Pokemon with the same id compare equal regardless
/// of their other fields.
impl PartialEq for Pokemon {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
