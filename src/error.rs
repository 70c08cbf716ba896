//! Error type for fallible library operations.
//!
//! The scorer itself never fails; errors only come from loading reference
//! tables and resolving user-supplied identifiers (crop ids, districts,
//! PIN codes, coordinates, months).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("unknown crop '{0}'")]
    UnknownCrop(String),

    #[error("unknown district '{0}'")]
    UnknownDistrict(String),

    #[error("'{0}' is not a valid Karnataka PIN code")]
    InvalidPincode(String),

    #[error("({0}, {1}) is outside Karnataka")]
    OutsideKarnataka(f64, f64),

    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("invalid crop database: {0}")]
    InvalidDatabase(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
