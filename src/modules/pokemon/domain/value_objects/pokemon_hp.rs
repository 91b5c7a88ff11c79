use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

const MIN_HP: i32 = 1;
const MAX_HP: i32 = 100;

/// A Pokemon's hit points, between 1 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonHp(i32);

impl PokemonHp {
    pub fn new(value: i32) -> AppResult<Self> {
        if !(MIN_HP..=MAX_HP).contains(&value) {
            return Err(AppError::InvalidData(format!(
                "Pokemon HP must be between {} and {}, got {}",
                MIN_HP, MAX_HP, value
            )));
        }

        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for PokemonHp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
