//! Crop reference data: definitions and the embedded database.

pub mod definition;
pub mod database;

pub use definition::{CropDefinition, Level, RainfallRequirement, RangeFit, ToleranceRange};
pub use database::CropDatabase;
