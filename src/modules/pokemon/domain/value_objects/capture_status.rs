use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// Capture state of a Pokemon. The only allowed transition is
/// wild -> captured; there is no release.
///
/// Maps onto the `capture_status` Postgres enum with lowercase values.
#[derive(diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[ExistingTypePath = "crate::schema::sql_types::CaptureStatus"]
#[serde(rename_all = "lowercase")]
pub enum CaptureStatus {
    Wild,
    Captured,
}

impl CaptureStatus {
    pub fn is_captured(&self) -> bool {
        matches!(self, CaptureStatus::Captured)
    }

    pub fn capture(&self) -> Self {
        CaptureStatus::Captured
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureStatus::Wild => "wild",
            CaptureStatus::Captured => "captured",
        }
    }
}

impl fmt::Display for CaptureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaptureStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wild" => Ok(CaptureStatus::Wild),
            "captured" => Ok(CaptureStatus::Captured),
            other => Err(AppError::InvalidData(format!(
                "Unknown capture status \"{}\"",
                other
            ))),
        }
    }
}
