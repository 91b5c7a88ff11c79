use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// A Pokemon's identity.
///
/// Wraps `None` before persistence; the database assigns the real id on
/// insert. Once wrapped, a value must be strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonId(Option<i32>);

impl PokemonId {
    pub fn new(value: Option<i32>) -> AppResult<Self> {
        if let Some(v) = value {
            if v <= 0 {
                return Err(AppError::InvalidData(
                    "Pokemon ID must be a positive integer".to_string(),
                ));
            }
        }

        Ok(Self(value))
    }

    /// Parse an id from its string form, as received in URL paths.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AppError::InvalidData(
                "Pokemon ID cannot be empty".to_string(),
            ));
        }

        let value = trimmed.parse::<i32>().map_err(|_| {
            AppError::InvalidData("Pokemon ID must be a valid integer".to_string())
        })?;

        Self::new(Some(value))
    }

    /// Identity placeholder for a not-yet-persisted Pokemon. The repository
    /// assigns the real id on insert; auto-increment keys make this the
    /// "generate" step of the identity lifecycle.
    pub fn generate() -> Self {
        Self(None)
    }

    pub fn value(&self) -> Option<i32> {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => write!(f, ""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_and_unassigned_ids() {
        assert_eq!(PokemonId::new(Some(1)).unwrap().value(), Some(1));
        assert_eq!(PokemonId::new(None).unwrap().value(), None);
    }

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert!(PokemonId::new(Some(0)).is_err());
        assert!(PokemonId::new(Some(-5)).is_err());
    }

    #[test]
    fn parses_numeric_strings() {
        assert_eq!(PokemonId::parse("42").unwrap().value(), Some(42));
    }

    #[test]
    fn parse_rejects_empty_and_non_numeric() {
        assert!(PokemonId::parse("").is_err());
        assert!(PokemonId::parse("  ").is_err());
        assert!(PokemonId::parse("abc").is_err());
        assert!(PokemonId::parse("1.5").is_err());
    }

    #[test]
    fn generate_yields_unassigned_identity() {
        let id = PokemonId::generate();
        assert!(!id.is_assigned());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(PokemonId::generate(), PokemonId::generate());
        assert_eq!(
            PokemonId::new(Some(7)).unwrap(),
            PokemonId::new(Some(7)).unwrap()
        );
        assert_ne!(
            PokemonId::new(Some(7)).unwrap(),
            PokemonId::new(Some(8)).unwrap()
        );
    }
}
