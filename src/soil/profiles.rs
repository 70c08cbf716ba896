//! District Soil Profiles
//!
//! Static soil characterisation for Karnataka districts (`data/soil_profiles.json`),
//! with a coarse latitude/longitude fallback for locations outside the table.
//!
//! Soil classes used across the state:
//! - red: plateau regions, well-drained, low fertility
//! - black: northern districts, clay-rich, alkaline, water-retentive
//! - laterite: Western Ghats and coast, acidic, iron-rich
//! - alluvial: river valleys in the south, fertile

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::SoilSample;
use crate::crops::Level;
use crate::i18n::{pick, Language};

const SOIL_PROFILES_JSON: &str = include_str!("../../data/soil_profiles.json");

static DISTRICT_PROFILES: OnceLock<FxHashMap<String, SoilProfile>> = OnceLock::new();

/// Typical soil of a district
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoilProfile {
    pub texture: String,
    pub ph: f64,
    pub organic: Level,
    pub characteristics: Vec<String>,
}

impl SoilProfile {
    fn new(texture: &str, ph: f64, organic: Level, characteristics: &[&str]) -> Self {
        Self {
            texture: texture.to_string(),
            ph,
            organic,
            characteristics: characteristics.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Combine with a moisture estimate into a scorer input
    pub fn to_sample(&self, moisture: Level) -> SoilSample {
        SoilSample {
            texture: self.texture.clone(),
            ph: Some(self.ph),
            organic_matter: self.organic,
            moisture,
        }
    }
}

fn district_profiles() -> &'static FxHashMap<String, SoilProfile> {
    DISTRICT_PROFILES.get_or_init(|| {
        match serde_json::from_str::<FxHashMap<String, SoilProfile>>(SOIL_PROFILES_JSON) {
            Ok(table) => table,
            Err(e) => {
                tracing::error!("Embedded soil profile table is invalid: {}", e);
                FxHashMap::default()
            }
        }
    })
}

/// Profile for a normalised district key ("dakshina-kannada")
pub fn district_profile(district_key: &str) -> Option<&'static SoilProfile> {
    district_profiles().get(district_key)
}

/// Coarse soil estimate from coordinates when no district profile exists
pub fn estimate_from_coordinates(lat: f64, lon: f64) -> SoilProfile {
    if lat > 16.5 {
        // Northern Karnataka
        SoilProfile::new("black", 7.5, Level::High, &["clay-rich", "alkaline", "fertile"])
    } else if lat < 13.0 && lon < 76.0 {
        // Western Ghats
        SoilProfile::new("laterite", 5.8, Level::Medium, &["well-drained", "acidic", "iron-rich"])
    } else if lat < 13.5 && lon > 77.0 {
        // Eastern plains
        SoilProfile::new("red", 6.1, Level::Medium, &["well-drained", "acidic", "low-fertility"])
    } else {
        SoilProfile::new("red", 6.2, Level::Medium, &["well-drained", "slightly-acidic"])
    }
}

/// Seasonal soil moisture: monsoon high, post-monsoon medium, summer low
pub fn estimate_moisture(month: u32) -> Level {
    match month {
        6..=9 => Level::High,
        10..=12 | 1 | 2 => Level::Medium,
        _ => Level::Low,
    }
}

/// Soil sample for a location: district table first, coordinates otherwise
pub fn soil_profile_for(district_key: Option<&str>, lat: f64, lon: f64, month: u32) -> SoilSample {
    let profile = district_key
        .and_then(district_profile)
        .cloned()
        .unwrap_or_else(|| {
            tracing::debug!("No soil profile for {:?}, estimating from ({}, {})", district_key, lat, lon);
            estimate_from_coordinates(lat, lon)
        });
    profile.to_sample(estimate_moisture(month))
}

/// Display information for a soil class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoilTypeInfo {
    pub key: &'static str,
    pub name_en: &'static str,
    pub name_kn: &'static str,
    pub description_en: &'static str,
    pub description_kn: &'static str,
}

impl SoilTypeInfo {
    pub fn name(&self, lang: Language) -> &'static str {
        pick(lang, self.name_en, self.name_kn)
    }

    pub fn description(&self, lang: Language) -> &'static str {
        pick(lang, self.description_en, self.description_kn)
    }
}

pub fn soil_type_info(texture: &str) -> Option<SoilTypeInfo> {
    let info = match texture.trim().to_lowercase().as_str() {
        "red" => SoilTypeInfo {
            key: "red",
            name_en: "Red Soil",
            name_kn: "ಕೆಂಪು ಮಣ್ಣು",
            description_en: "Rich in iron oxide, well-drained but low in fertility. Common in Karnataka plateau regions.",
            description_kn: "ಕಬ್ಬಿಣದ ಆಕ್ಸೈಡ್‌ನಿಂದ ಭರಪೂರ, ಚೆನ್ನಾಗಿ ನೀರಿನಿಂದ ಖಾಲಿಯಾದ ಆದರೆ ಫಲವತ್ತತೆ ಕಡಿಮೆ.",
        },
        "black" => SoilTypeInfo {
            key: "black",
            name_en: "Black Cotton Soil",
            name_kn: "ಕಪ್ಪು ಹತ್ತಿ ಮಣ್ಣು",
            description_en: "Clay-rich, highly fertile soil ideal for cotton and cereals. Excellent water retention.",
            description_kn: "ಮಣ್ಣಿನಿಂದ ಭರಪೂರ, ಹೆಚ್ಚು ಫಲವತ್ತು ಮಣ್ಣು ಹತ್ತಿ ಮತ್ತು ಧಾನ್ಯಗಳಿಗೆ ಆದರ್ಶ.",
        },
        "laterite" => SoilTypeInfo {
            key: "laterite",
            name_en: "Laterite Soil",
            name_kn: "ಲ್ಯಾಟರೈಟ್ ಮಣ್ಣು",
            description_en: "Iron and aluminum-rich soil found in high rainfall areas. Good for cashew and coconut.",
            description_kn: "ಕಬ್ಬಿಣ ಮತ್ತು ಅಲುಮಿನಿಯಂ ಭರಿತ ಮಣ್ಣು ಹೆಚ್ಚು ಮಳೆಯ ಪ್ರದೇಶಗಳಲ್ಲಿ ಕಂಡುಬರುತ್ತದೆ.",
        },
        "alluvial" => SoilTypeInfo {
            key: "alluvial",
            name_en: "Alluvial Soil",
            name_kn: "ಮೆಕ್ಕಲು ಮಣ್ಣು",
            description_en: "River-deposited fertile soil, rich in nutrients. Excellent for agriculture.",
            description_kn: "ನದಿ ಸಂಚಾರದಿಂದ ರೂಪಗೊಂಡ ಫಲವತ್ತು ಮಣ್ಣು, ಪೋಷಕಾಂಶಗಳಿಂದ ಭರಪೂರ.",
        },
        _ => return None,
    };
    Some(info)
}

/// Crops grouped by how well they do on a soil class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoilCropGroups {
    pub highly_suitable: &'static [&'static str],
    pub moderately_suitable: &'static [&'static str],
    pub least_suitable: &'static [&'static str],
}

/// Crop groupings for a soil class; unknown classes use the red-soil groups
pub fn crops_for_soil(texture: &str) -> SoilCropGroups {
    match texture.trim().to_lowercase().as_str() {
        "black" => SoilCropGroups {
            highly_suitable: &["cotton", "wheat", "jowar", "safflower", "sunflower"],
            moderately_suitable: &["maize", "sugarcane", "pulses"],
            least_suitable: &["rice", "finger-millet", "cashew"],
        },
        "laterite" => SoilCropGroups {
            highly_suitable: &["cashew", "coconut", "pepper", "cardamom", "arecanut"],
            moderately_suitable: &["rice", "ginger", "turmeric"],
            least_suitable: &["cotton", "wheat", "jowar"],
        },
        "alluvial" => SoilCropGroups {
            highly_suitable: &["rice", "sugarcane", "wheat", "maize", "vegetables"],
            moderately_suitable: &["cotton", "pulses", "groundnut"],
            least_suitable: &["cashew", "pepper"],
        },
        _ => SoilCropGroups {
            highly_suitable: &["finger-millet", "groundnut", "sunflower", "castor", "pulses"],
            moderately_suitable: &["maize", "cotton", "jowar", "bajra"],
            least_suitable: &["rice", "sugarcane", "wheat"],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_district_table_loads() {
        assert_eq!(district_profiles().len(), 28);
        let mandya = district_profile("mandya").unwrap();
        assert_eq!(mandya.texture, "alluvial");
        assert_eq!(mandya.ph, 7.0);
        assert_eq!(mandya.organic, Level::High);
        assert!(district_profile("atlantis").is_none());
    }

    #[test]
    fn test_coordinate_estimate_regions() {
        assert_eq!(estimate_from_coordinates(17.3, 76.8).texture, "black");
        assert_eq!(estimate_from_coordinates(12.8, 75.2).texture, "laterite");
        assert_eq!(estimate_from_coordinates(13.1, 78.1).texture, "red");
        let central = estimate_from_coordinates(14.2, 76.4);
        assert_eq!(central.texture, "red");
        assert_eq!(central.ph, 6.2);
    }

    #[test]
    fn test_moisture_by_month() {
        assert_eq!(estimate_moisture(7), Level::High);
        assert_eq!(estimate_moisture(9), Level::High);
        assert_eq!(estimate_moisture(10), Level::Medium);
        assert_eq!(estimate_moisture(1), Level::Medium);
        assert_eq!(estimate_moisture(2), Level::Medium);
        assert_eq!(estimate_moisture(4), Level::Low);
    }

    #[test]
    fn test_profile_for_falls_back_to_coordinates() {
        let known = soil_profile_for(Some("belagavi"), 0.0, 0.0, 7);
        assert_eq!(known.texture, "black");
        assert_eq!(known.ph, Some(7.8));
        assert_eq!(known.moisture, Level::High);

        let unknown = soil_profile_for(None, 12.5, 75.5, 4);
        assert_eq!(unknown.texture, "laterite");
        assert_eq!(unknown.moisture, Level::Low);
    }

    #[test]
    fn test_soil_type_info_and_groups() {
        assert_eq!(soil_type_info("Black").unwrap().name(Language::En), "Black Cotton Soil");
        assert!(soil_type_info("sandy loam").is_none());
        assert!(crops_for_soil("laterite").highly_suitable.contains(&"cashew"));
        assert_eq!(crops_for_soil("peat"), crops_for_soil("red"));
    }
}
