//! Pokemon API routes
//!
//! Thin translation layer: validate the payload, build the command or query,
//! run the handler, wrap the view in the response envelope.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::infrastructure::http::requests::CreatePokemonHttpRequest;
use crate::infrastructure::http::state::AppState;
use crate::modules::pokemon::application::use_cases::{
    create_pokemon::CreatePokemonCommand, get_pokemon_by_id::GetPokemonByIdQuery,
    list_pokemon::ListPokemonQuery,
};
use crate::shared::application::use_case::{Query, UseCase};
use crate::shared::errors::AppError;

/// List all Pokemon
pub async fn list_pokemon(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let result = state.list_handler.execute(ListPokemonQuery::new()).await?;

    Ok(Json(json!({
        "data": result.pokemon,
        "total": result.total,
    })))
}

/// Fetch a single Pokemon by id
pub async fn get_pokemon_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let view = state
        .get_by_id_handler
        .execute(GetPokemonByIdQuery::new(id))
        .await?;

    Ok(Json(json!({ "data": view })))
}

/// Create a new Pokemon
pub async fn create_pokemon(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePokemonHttpRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let validated = request.validate()?;

    let command = CreatePokemonCommand::new(
        validated.name,
        validated.pokemon_type,
        validated.hp,
        validated.status,
    );

    let result = state.create_handler.execute(command).await?;

    Ok((StatusCode::CREATED, Json(json!({ "data": result.pokemon }))))
}
