//! Crop Suitability Scorer
//!
//! Pure function from (crop, soil?, weather?, month) to a 0-100 score.
//!
//! Architecture:
//! - `factors.rs` - season / soil / weather / timing sub-scores and their weights
//! - `result.rs` - rating buckets and the per-factor breakdown
//!
//! The total is a weighted average over the factors actually evaluated:
//! missing soil or weather drop out of the denominator instead of scoring zero.

pub mod factors;
pub mod result;

use crate::crops::CropDefinition;
use crate::season::Season;
use crate::soil::SoilSample;
use crate::weather::WeatherSample;

use factors::{
    season_score, soil_score, timing_score, weather_score, SEASON_WEIGHT, SOIL_WEIGHT,
    TIMING_WEIGHT, WEATHER_WEIGHT,
};
pub use result::{FactorScore, Rating, SuitabilityFactors, SuitabilityResult};

/// Score one crop against the supplied conditions
///
/// Soil is evaluated only when the sample names a texture; weather whenever a
/// sample is given (an empty sample scores the neutral 50).
pub fn score(
    crop: &CropDefinition,
    soil: Option<&SoilSample>,
    weather: Option<&WeatherSample>,
    month: u32,
) -> SuitabilityResult {
    let season = FactorScore {
        score: season_score(crop, month),
        weight: SEASON_WEIGHT,
        details: format!(
            "Current season: {}, Suitable seasons: {}",
            Season::from_month(month),
            crop.season_list()
        ),
    };

    let soil = soil.filter(|s| s.has_texture()).map(|s| FactorScore {
        score: soil_score(crop, s),
        weight: SOIL_WEIGHT,
        details: format!("Soil type: {}, pH: {}", s.texture.trim(), display_or_unknown(s.ph)),
    });

    let weather = weather.map(|w| FactorScore {
        score: weather_score(crop, w),
        weight: WEATHER_WEIGHT,
        details: format!(
            "Temperature: {}°C, Humidity: {}%",
            display_or_unknown(w.temperature),
            display_or_unknown(w.humidity)
        ),
    });

    let timing = FactorScore {
        score: timing_score(crop, month),
        weight: TIMING_WEIGHT,
        details: format!(
            "Current month: {}, Planting months: {}",
            month,
            crop.planting_months
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
    };

    let factors = SuitabilityFactors { season, soil, weather, timing };

    let (weighted, total_weight) = factors
        .iter()
        .fold((0.0, 0.0), |(sum, weights), (_, f)| (sum + f.score * f.weight, weights + f.weight));
    let total_score = if total_weight > 0.0 { weighted / total_weight } else { 0.0 };

    tracing::debug!(
        crop = %crop.id,
        month,
        total_score,
        factors = total_weight,
        "scored crop"
    );

    SuitabilityResult {
        total_score,
        rating: Rating::from_score(total_score),
        confidence: f64::min(100.0, total_weight),
        factors,
    }
}

fn display_or_unknown(value: Option<f64>) -> String {
    value.map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crops::CropDatabase;
    use approx::assert_relative_eq;

    fn crop(id: &str) -> &'static CropDefinition {
        CropDatabase::builtin().get(id).unwrap()
    }

    #[test]
    fn test_rice_in_july_is_perfect() {
        let result = score(crop("rice"), None, None, 7);
        assert_eq!(result.factors.season.score, 100.0);
        assert_eq!(result.factors.timing.score, 100.0);
        assert_relative_eq!(result.total_score, 100.0);
        assert_eq!(result.rating, Rating::Excellent);
        assert_eq!(result.confidence, 45.0);
    }

    #[test]
    fn test_wheat_in_july_is_poor() {
        let result = score(crop("wheat"), None, None, 7);
        assert_eq!(result.factors.season.score, 0.0);
        assert_eq!(result.factors.timing.score, 10.0);
        assert_relative_eq!(result.total_score, 200.0 / 45.0, epsilon = 1e-9);
        assert_eq!(result.rating, Rating::Poor);
    }

    #[test]
    fn test_without_inputs_only_season_and_timing_count() {
        for c in CropDatabase::builtin().iter() {
            for month in 1..=12 {
                let r = score(c, None, None, month);
                assert!(r.factors.soil.is_none());
                assert!(r.factors.weather.is_none());
                let expected = (r.factors.season.score * 25.0 + r.factors.timing.score * 20.0) / 45.0;
                assert_relative_eq!(r.total_score, expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_all_factors_normalise_by_100() {
        let soil = SoilSample::new("clay", Some(6.5));
        let weather = WeatherSample::current(28.0, 75.0);
        let r = score(crop("rice"), Some(&soil), Some(&weather), 7);
        // 100*25 + 100*25 + 70*30 + 100*20 = 9100
        assert_relative_eq!(r.total_score, 91.0, epsilon = 1e-9);
        assert_eq!(r.confidence, 100.0);
        assert_eq!(r.factors.iter().count(), 4);
    }

    #[test]
    fn test_blank_soil_texture_is_skipped() {
        let blank = SoilSample::new("  ", Some(6.5));
        let r = score(crop("rice"), Some(&blank), None, 7);
        assert!(r.factors.soil.is_none());
        assert_eq!(r.confidence, 45.0);
    }

    #[test]
    fn test_empty_weather_still_counts_as_neutral() {
        let r = score(crop("wheat"), None, Some(&WeatherSample::default()), 7);
        let weather = r.factors.weather.as_ref().unwrap();
        assert_eq!(weather.score, 50.0);
        assert!(weather.details.contains("unknown"));
        assert_relative_eq!(r.total_score, (0.0 + 50.0 * 30.0 + 10.0 * 20.0) / 75.0, epsilon = 1e-9);
    }

    #[test]
    fn test_details_text() {
        let soil = SoilSample::new("red", None);
        let r = score(crop("ragi"), Some(&soil), None, 7);
        assert_eq!(r.factors.season.details, "Current season: kharif, Suitable seasons: kharif");
        assert_eq!(r.factors.soil.as_ref().unwrap().details, "Soil type: red, pH: unknown");
        assert_eq!(r.factors.timing.details, "Current month: 7, Planting months: 6, 7, 8");
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let soil = SoilSample::new("black", Some(7.9));
        let weather = WeatherSample::current(31.5, 58.0).with_weekly_rainfall(12.3);
        for c in CropDatabase::builtin().iter() {
            for month in 1..=12 {
                let a = score(c, Some(&soil), Some(&weather), month);
                let b = score(c, Some(&soil), Some(&weather), month);
                assert_eq!(a.total_score.to_bits(), b.total_score.to_bits());
                assert_eq!(a, b);
            }
        }
    }
}
