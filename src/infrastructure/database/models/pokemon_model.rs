use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::infrastructure::database::schema::pokemon;
use crate::modules::pokemon::domain::{CaptureStatus, PokemonType};

/// DB row model (read)
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = pokemon)]
pub struct PokemonModel {
    pub id: i32,
    pub name: String,
    pub type_: PokemonType,
    pub hp: i32,
    pub status: CaptureStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload (write) — `id` and timestamps come from the database
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = pokemon)]
pub struct NewPokemonRow {
    pub name: String,
    pub type_: PokemonType,
    pub hp: i32,
    pub status: CaptureStatus,
}

/// Update payload (write) — excludes `id` and `created_at`
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = pokemon)]
pub struct PokemonChangeset {
    pub name: String,
    pub type_: PokemonType,
    pub hp: i32,
    pub status: CaptureStatus,
    pub updated_at: DateTime<Utc>,
}
