use async_trait::async_trait;

use crate::modules::pokemon::domain::DomainEvent;
use crate::shared::errors::AppResult;

/// Port (interface) for dispatching domain events.
///
/// Delivery is synchronous and best-effort within the current request; there
/// is no retry and no persistence of undelivered events. An outbox upgrade is
/// the designated follow-up once listeners exist.
#[async_trait]
pub trait EventBus: Send + Sync {
    /// Dispatch a single domain event
    async fn dispatch(&self, event: Box<dyn DomainEvent>) -> AppResult<()>;

    /// Dispatch multiple domain events in order
    async fn dispatch_all(&self, events: Vec<Box<dyn DomainEvent>>) -> AppResult<()>;
}
