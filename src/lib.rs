//! Mini Pokedex REST API.
//!
//! Hexagonal layout: the `modules::pokemon` domain and application layers
//! know nothing about HTTP or Postgres; `infrastructure` holds the adapters
//! (diesel repository, logging event bus, axum routes) that plug into the
//! application ports.

pub mod infrastructure;
pub mod modules;
pub mod shared;

// Diesel's derive attributes reference the schema by this crate-root path.
pub use infrastructure::database::schema;
