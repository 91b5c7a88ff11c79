use async_trait::async_trait;

use crate::modules::pokemon::application::ports::EventBus;
use crate::modules::pokemon::domain::DomainEvent;
use crate::shared::errors::AppResult;

/// Synchronous event bus adapter that logs each dispatched event.
///
/// No listeners are registered yet; once they exist, dispatch should move to
/// an outbox so delivery survives a crash between commit and dispatch.
pub struct SyncEventBus;

#[async_trait]
impl EventBus for SyncEventBus {
    async fn dispatch(&self, event: Box<dyn DomainEvent>) -> AppResult<()> {
        tracing::info!(
            event_type = event.event_type(),
            event_id = %event.event_id(),
            event_data = %event.payload(),
            "Domain event dispatched"
        );
        Ok(())
    }

    async fn dispatch_all(&self, events: Vec<Box<dyn DomainEvent>>) -> AppResult<()> {
        for event in events {
            self.dispatch(event).await?;
        }
        Ok(())
    }
}
