//! Individual suitability factors
//!
//! Each factor returns a sub-score in 0-100:
//! - season: 100 when the month's season is one of the crop's seasons, else 0
//! - soil: texture match (60/20) plus pH fit (40/25/5, 20 when unknown)
//! - weather: temperature (40/25/5), humidity (30/20/5), weekly rainfall (30/20/10)
//! - timing: planting month 100, next to one 70, harvest month 30, else 10

use crate::crops::{CropDefinition, RangeFit};
use crate::season::{month_distance, Season};
use crate::soil::SoilSample;
use crate::weather::WeatherSample;

pub const SEASON_WEIGHT: f64 = 25.0;
pub const SOIL_WEIGHT: f64 = 25.0;
pub const WEATHER_WEIGHT: f64 = 30.0;
pub const TIMING_WEIGHT: f64 = 20.0;

/// Weather score when no weather reading is usable
const NEUTRAL_WEATHER_SCORE: f64 = 50.0;

// ============================================================================
// Season
// ============================================================================

pub fn season_score(crop: &CropDefinition, month: u32) -> f64 {
    if crop.grows_in(Season::from_month(month)) {
        100.0
    } else {
        0.0
    }
}

// ============================================================================
// Soil
// ============================================================================

pub fn soil_score(crop: &CropDefinition, soil: &SoilSample) -> f64 {
    let texture = if crop.accepts_soil(&soil.texture) { 60.0 } else { 20.0 };

    // A reported pH of 0 is a measurement, not a missing value
    let ph = match soil.ph {
        Some(ph) => match crop.ph.classify(ph) {
            RangeFit::Optimal => 40.0,
            RangeFit::Tolerable => 25.0,
            RangeFit::Outside => 5.0,
        },
        None => 20.0,
    };

    f64::min(texture + ph, 100.0)
}

// ============================================================================
// Weather
// ============================================================================

pub fn weather_score(crop: &CropDefinition, weather: &WeatherSample) -> f64 {
    let mut score = 0.0;
    let mut evaluated = 0;

    if let Some(temp) = weather.temperature {
        score += match crop.temperature.classify(temp) {
            RangeFit::Optimal => 40.0,
            RangeFit::Tolerable => 25.0,
            RangeFit::Outside => 5.0,
        };
        evaluated += 1;
    }

    if let Some(humidity) = weather.humidity {
        score += match crop.humidity.classify(humidity) {
            RangeFit::Optimal => 30.0,
            RangeFit::Tolerable => 20.0,
            RangeFit::Outside => 5.0,
        };
        evaluated += 1;
    }

    if let Some(rainfall) = weather.weekly_rainfall_mm {
        score += rainfall_score(crop, rainfall);
        evaluated += 1;
    }

    if evaluated == 0 {
        NEUTRAL_WEATHER_SCORE
    } else {
        f64::min(score, 100.0)
    }
}

/// Closeness of weekly rainfall to a quarter of the critical rainfall
fn rainfall_score(crop: &CropDefinition, weekly_mm: f64) -> f64 {
    let expected = crop.rainfall.expected_weekly();
    let deviation = (weekly_mm - expected).abs();
    if deviation <= expected * 0.3 {
        30.0
    } else if deviation <= expected * 0.6 {
        20.0
    } else {
        10.0
    }
}

// ============================================================================
// Timing
// ============================================================================

pub fn timing_score(crop: &CropDefinition, month: u32) -> f64 {
    if crop.is_planting_month(month) {
        100.0
    } else if crop
        .planting_months
        .iter()
        .any(|&planting| month_distance(month, planting) <= 1)
    {
        70.0
    } else if crop.is_harvest_month(month) {
        30.0
    } else {
        10.0
    }
}
