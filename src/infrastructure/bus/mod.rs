pub mod sync_event_bus;

pub use sync_event_bus::SyncEventBus;
