pub mod error;
pub mod pokemon_routes;
pub mod requests;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use pokemon_routes::{create_pokemon, get_pokemon_by_id, list_pokemon};
use state::AppState;

/// Build the API router with all routes wired to the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/pokemon", get(list_pokemon).post(create_pokemon))
        .route("/api/pokemon/{id}", get(get_pokemon_by_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
