use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::shared::errors::{AppError, AppResult, ValidationErrors};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z \-'.]+$").expect("invalid name pattern"));

const VALID_TYPES: [&str; 17] = [
    "Electric", "Fire", "Water", "Grass", "Rock", "Flying", "Bug", "Normal", "Fighting", "Poison",
    "Ground", "Psychic", "Ice", "Dragon", "Dark", "Steel", "Fairy",
];

/// Raw POST /api/pokemon payload. Fields are optional so that missing values
/// reach `validate` and come back as field-level errors instead of a bare
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreatePokemonHttpRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pokemon_type: Option<String>,
    pub hp: Option<i32>,
    pub status: Option<String>,
}

/// Shape-validated payload, with the status default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCreatePokemon {
    pub name: String,
    pub pokemon_type: String,
    pub hp: i32,
    pub status: String,
}

impl CreatePokemonHttpRequest {
    /// Shape-level validation mirroring the domain constraints field by
    /// field, so constraint violations surface as 422 with a per-field error
    /// map before the domain sees them. Name uniqueness is not checked here;
    /// the database constraint reports it on insert.
    pub fn validate(self) -> AppResult<ValidatedCreatePokemon> {
        let mut errors = ValidationErrors::new();

        let name = match self.name.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("name", "Pokemon name is required");
                None
            }
            Some(name) => {
                if name.len() > 50 {
                    errors.add("name", "Pokemon name cannot exceed 50 characters");
                }
                if !NAME_PATTERN.is_match(name) {
                    errors.add(
                        "name",
                        "Pokemon name can only contain letters, spaces, hyphens, apostrophes and dots",
                    );
                }
                Some(name.to_string())
            }
        };

        let pokemon_type = match self.pokemon_type.as_deref() {
            None | Some("") => {
                errors.add("type", "Pokemon type is required");
                None
            }
            Some(t) => {
                if !VALID_TYPES.contains(&t) {
                    errors.add("type", "Pokemon type must be one of the valid types");
                }
                Some(t.to_string())
            }
        };

        let hp = match self.hp {
            None => {
                errors.add("hp", "Pokemon HP is required");
                None
            }
            Some(hp) => {
                if hp < 1 {
                    errors.add("hp", "Pokemon HP must be at least 1");
                }
                if hp > 100 {
                    errors.add("hp", "Pokemon HP cannot exceed 100");
                }
                Some(hp)
            }
        };

        // Status is optional and defaults to wild.
        let status = match self.status.as_deref() {
            None => Some("wild".to_string()),
            Some(s) => {
                if s != "wild" && s != "captured" {
                    errors.add("status", "Pokemon status must be either wild or captured");
                }
                Some(s.to_string())
            }
        };

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        // The per-field matches only leave `None` behind when an error was
        // recorded, so these unwraps cannot be reached on the Ok path.
        Ok(ValidatedCreatePokemon {
            name: name.unwrap_or_default(),
            pokemon_type: pokemon_type.unwrap_or_default(),
            hp: hp.unwrap_or_default(),
            status: status.unwrap_or_default(),
        })
    }
}
