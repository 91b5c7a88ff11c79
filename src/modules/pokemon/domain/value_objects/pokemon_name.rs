use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

const MAX_LENGTH: usize = 50;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z \-'.]+$").expect("invalid name pattern"));

/// A Pokemon's name.
///
/// Trims the input and keeps the trimmed value; rejects empty names, names
/// over 50 characters, and any character outside letters, spaces, hyphens,
/// apostrophes and dots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonName(String);

impl PokemonName {
    pub fn new(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::InvalidData(
                "Pokemon name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > MAX_LENGTH {
            return Err(AppError::InvalidData(
                "Pokemon name cannot exceed 50 characters".to_string(),
            ));
        }

        if !NAME_PATTERN.is_match(trimmed) {
            return Err(AppError::InvalidData(
                "Pokemon name can only contain letters, spaces, hyphens, apostrophes and dots"
                    .to_string(),
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PokemonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
