use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Field-level validation errors, keyed by request field name.
///
/// Serialized as `{"name": ["..."], "hp": ["..."]}` in 422 responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// A value object or enum rejected its input after shape validation.
    #[error("{0}")]
    InvalidData(String),

    #[error("{0}")]
    NotFound(String),

    /// Shape-level request validation failed; carries the field error map.
    #[error("The given data was invalid.")]
    Validation(ValidationErrors),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Single-field validation error, e.g. the name-uniqueness violation
    /// surfaced by the database constraint.
    pub fn validation(field: &str, message: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        AppError::Validation(errors)
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::DatabaseErrorKind;

        match err {
            diesel::result::Error::NotFound => {
                AppError::NotFound("Record not found in database".to_string())
            }
            // The only unique constraint on the pokemon table is on `name`.
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                AppError::validation("name", "A Pokemon with this name already exists")
            }
            _ => AppError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Database pool error: {}", err))
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_maps_to_name_validation_error() {
        let err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value violates unique constraint".to_string()),
        );

        match AppError::from(err) {
            AppError::Validation(errors) => {
                assert_eq!(
                    errors.0.get("name"),
                    Some(&vec!["A Pokemon with this name already exists".to_string()])
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let err = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
