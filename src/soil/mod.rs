//! Soil samples, district soil profiles and soil management advice.
//!
//! - `profiles.rs` - District soil table, coordinate-based estimate, moisture by month
//! - `advice.rs` - pH / organic matter / moisture / soil-type recommendations

pub mod profiles;
pub mod advice;

use serde::{Deserialize, Serialize};

use crate::crops::Level;

pub use profiles::{
    estimate_from_coordinates, estimate_moisture, soil_profile_for, soil_type_info,
    crops_for_soil, SoilCropGroups, SoilProfile, SoilTypeInfo,
};
pub use advice::{soil_recommendations, SoilRecommendation};

/// Soil conditions at a location, as supplied to the scorer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    /// Texture / soil category ("red", "black", "sandy loam", ...)
    pub texture: String,

    /// Soil pH, if measured
    #[serde(default)]
    pub ph: Option<f64>,

    #[serde(default = "default_level")]
    pub organic_matter: Level,

    #[serde(default = "default_level")]
    pub moisture: Level,
}

fn default_level() -> Level {
    Level::Medium
}

impl SoilSample {
    pub fn new(texture: impl Into<String>, ph: Option<f64>) -> Self {
        Self {
            texture: texture.into(),
            ph,
            organic_matter: Level::Medium,
            moisture: Level::Medium,
        }
    }

    /// A sample with no texture carries no usable soil information
    pub fn has_texture(&self) -> bool {
        !self.texture.trim().is_empty()
    }
}
