use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// The closed set of elemental types a Pokemon can have.
///
/// Maps onto the `pokemon_type` Postgres enum; database values keep the
/// capitalized variant names.
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::PokemonType"]
#[DbValueStyle = "verbatim"]
pub enum PokemonType {
    Electric,
    Fire,
    Water,
    Grass,
    Rock,
    Flying,
    Bug,
    Normal,
    Fighting,
    Poison,
    Ground,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PokemonType::Electric => "Electric",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Grass => "Grass",
            PokemonType::Rock => "Rock",
            PokemonType::Flying => "Flying",
            PokemonType::Bug => "Bug",
            PokemonType::Normal => "Normal",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Psychic => "Psychic",
            PokemonType::Ice => "Ice",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electric" => Ok(PokemonType::Electric),
            "Fire" => Ok(PokemonType::Fire),
            "Water" => Ok(PokemonType::Water),
            "Grass" => Ok(PokemonType::Grass),
            "Rock" => Ok(PokemonType::Rock),
            "Flying" => Ok(PokemonType::Flying),
            "Bug" => Ok(PokemonType::Bug),
            "Normal" => Ok(PokemonType::Normal),
            "Fighting" => Ok(PokemonType::Fighting),
            "Poison" => Ok(PokemonType::Poison),
            "Ground" => Ok(PokemonType::Ground),
            "Psychic" => Ok(PokemonType::Psychic),
            "Ice" => Ok(PokemonType::Ice),
            "Dragon" => Ok(PokemonType::Dragon),
            "Dark" => Ok(PokemonType::Dark),
            "Steel" => Ok(PokemonType::Steel),
            "Fairy" => Ok(PokemonType::Fairy),
            other => Err(AppError::InvalidData(format!(
                "Unknown Pokemon type \"{}\"",
                other
            ))),
        }
    }
}
