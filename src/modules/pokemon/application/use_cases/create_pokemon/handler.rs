use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::pokemon::application::ports::{EventBus, PokemonRepository};
use crate::modules::pokemon::application::views::PokemonView;
use crate::modules::pokemon::domain::{
    CaptureStatus, DomainEvent, Pokemon, PokemonHp, PokemonName, PokemonType,
};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::{command::CreatePokemonCommand, response::CreatePokemonResponse};

/// Use case handler for registering a new Pokemon
pub struct CreatePokemonHandler {
    repository: Arc<dyn PokemonRepository>,
    event_bus: Arc<dyn EventBus>,
}

impl CreatePokemonHandler {
    pub fn new(repository: Arc<dyn PokemonRepository>, event_bus: Arc<dyn EventBus>) -> Self {
        Self {
            repository,
            event_bus,
        }
    }
}

#[async_trait]
impl UseCase<CreatePokemonCommand, CreatePokemonResponse> for CreatePokemonHandler {
    async fn execute(&self, command: CreatePokemonCommand) -> AppResult<CreatePokemonResponse> {
        let id = self.repository.next_identity();
        let name = PokemonName::new(&command.name)?;
        let pokemon_type = command.pokemon_type.parse::<PokemonType>()?;
        let hp = PokemonHp::new(command.hp)?;
        let status = command.status.parse::<CaptureStatus>()?;

        // Everything enters the pokedex as wild; capture() drives the status
        // transition so the domain event gets recorded.
        let mut pokemon = Pokemon::create(id, name, pokemon_type, hp, CaptureStatus::Wild);

        if status.is_captured() {
            pokemon.capture();
        }

        let persisted = self.repository.save(&pokemon).await?;

        // Events were recorded before the id existed; stamp the assigned
        // identity so subscribers observe the persisted Pokemon. Dispatch
        // happens after the save committed; a dispatch failure leaves the
        // row in place.
        let events: Vec<Box<dyn DomainEvent>> = pokemon
            .pull_domain_events()
            .into_iter()
            .map(|event| match persisted.id().value() {
                Some(id) => Box::new(event.with_pokemon_id(id)) as Box<dyn DomainEvent>,
                None => Box::new(event) as Box<dyn DomainEvent>,
            })
            .collect();
        self.event_bus.dispatch_all(events).await?;

        Ok(CreatePokemonResponse::from_view(PokemonView::from(
            &persisted,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::pokemon::domain::PokemonId;
    use crate::shared::errors::AppError;
    use mockall::mock;
    use mockall::predicate::always;

    mock! {
        Repo {}

        #[async_trait]
        impl PokemonRepository for Repo {
            async fn save(&self, pokemon: &Pokemon) -> AppResult<Pokemon>;
            async fn find_by_id(&self, id: &PokemonId) -> AppResult<Option<Pokemon>>;
            async fn find_all(&self) -> AppResult<Vec<Pokemon>>;
            async fn exists(&self, id: &PokemonId) -> AppResult<bool>;
            async fn delete(&self, id: &PokemonId) -> AppResult<()>;
            fn next_identity(&self) -> PokemonId;
        }
    }

    mock! {
        Bus {}

        #[async_trait]
        impl EventBus for Bus {
            async fn dispatch(&self, event: Box<dyn DomainEvent>) -> AppResult<()>;
            async fn dispatch_all(&self, events: Vec<Box<dyn DomainEvent>>) -> AppResult<()>;
        }
    }

    fn persisted_pokemon(id: i32, name: &str, status: CaptureStatus) -> Pokemon {
        Pokemon::create(
            PokemonId::new(Some(id)).unwrap(),
            PokemonName::new(name).unwrap(),
            PokemonType::Electric,
            PokemonHp::new(35).unwrap(),
            status,
        )
    }

    fn command(status: &str) -> CreatePokemonCommand {
        CreatePokemonCommand::new(
            "Pikachu".to_string(),
            "Electric".to_string(),
            35,
            status.to_string(),
        )
    }

    #[tokio::test]
    async fn captured_create_dispatches_one_event_with_assigned_id() {
        let mut repo = MockRepo::new();
        repo.expect_next_identity().return_const(PokemonId::generate());
        repo.expect_save()
            .withf(|p: &Pokemon| p.status().is_captured())
            .returning(|_| Ok(persisted_pokemon(1, "Pikachu", CaptureStatus::Captured)));

        let mut bus = MockBus::new();
        bus.expect_dispatch_all()
            .withf(|events: &Vec<Box<dyn DomainEvent>>| {
                events.len() == 1
                    && events[0].event_type() == "PokemonCaptured"
                    && events[0].payload()["pokemon_id"] == 1
                    && events[0].payload()["pokemon_name"] == "Pikachu"
            })
            .times(1)
            .returning(|_| Ok(()));

        let handler = CreatePokemonHandler::new(Arc::new(repo), Arc::new(bus));
        let response = handler.execute(command("captured")).await.unwrap();

        assert_eq!(response.pokemon.id, Some(1));
        assert_eq!(response.pokemon.status, "captured");
    }

    #[tokio::test]
    async fn wild_create_dispatches_no_events() {
        let mut repo = MockRepo::new();
        repo.expect_next_identity().return_const(PokemonId::generate());
        repo.expect_save()
            .withf(|p: &Pokemon| !p.status().is_captured())
            .returning(|_| Ok(persisted_pokemon(2, "Pikachu", CaptureStatus::Wild)));

        let mut bus = MockBus::new();
        bus.expect_dispatch_all()
            .withf(|events: &Vec<Box<dyn DomainEvent>>| events.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let handler = CreatePokemonHandler::new(Arc::new(repo), Arc::new(bus));
        let response = handler.execute(command("wild")).await.unwrap();

        assert_eq!(response.pokemon.status, "wild");
    }

    #[tokio::test]
    async fn invalid_hp_fails_before_touching_persistence() {
        let mut repo = MockRepo::new();
        repo.expect_next_identity().return_const(PokemonId::generate());
        repo.expect_save().never();

        let mut bus = MockBus::new();
        bus.expect_dispatch_all().never();

        let handler = CreatePokemonHandler::new(Arc::new(repo), Arc::new(bus));
        let mut cmd = command("wild");
        cmd.hp = 0;

        let err = handler.execute(cmd).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidData(_)));
    }

    #[tokio::test]
    async fn unknown_type_tag_is_rejected() {
        let mut repo = MockRepo::new();
        repo.expect_next_identity().return_const(PokemonId::generate());
        repo.expect_save().never();

        let mut bus = MockBus::new();
        bus.expect_dispatch_all().never();

        let handler = CreatePokemonHandler::new(Arc::new(repo), Arc::new(bus));
        let mut cmd = command("wild");
        cmd.pokemon_type = "Shadow".to_string();

        let err = handler.execute(cmd).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidData(_)));
    }

    #[tokio::test]
    async fn save_failure_skips_event_dispatch() {
        let mut repo = MockRepo::new();
        repo.expect_next_identity().return_const(PokemonId::generate());
        repo.expect_save()
            .with(always())
            .returning(|_| Err(AppError::validation("name", "A Pokemon with this name already exists")));

        let mut bus = MockBus::new();
        bus.expect_dispatch_all().never();

        let handler = CreatePokemonHandler::new(Arc::new(repo), Arc::new(bus));
        let err = handler.execute(command("captured")).await.unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }
}
