//! Crop Definition Types
//!
//! Immutable reference records describing where and when a crop grows well.
//! Each climatic/soil requirement is a tolerance range with an absolute
//! min/max and a narrower optimal sub-range.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::i18n::Bilingual;
use crate::season::Season;

/// Where a value falls relative to a tolerance range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeFit {
    /// Inside the optimal sub-range (inclusive)
    Optimal,
    /// Inside min/max but outside the optimal sub-range
    Tolerable,
    /// Outside min/max
    Outside,
}

/// Absolute limits plus an optimal sub-range, e.g. temperature 20–35 °C, optimal 25–30 °C
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToleranceRange {
    pub min: f64,
    pub max: f64,
    pub optimal: [f64; 2],
}

impl ToleranceRange {
    /// Classify a value; bounds are inclusive at both tiers
    pub fn classify(&self, value: f64) -> RangeFit {
        if value >= self.optimal[0] && value <= self.optimal[1] {
            RangeFit::Optimal
        } else if value >= self.min && value <= self.max {
            RangeFit::Tolerable
        } else {
            RangeFit::Outside
        }
    }

    /// min <= optimal low <= optimal high <= max
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.optimal[0] && self.optimal[0] <= self.optimal[1] && self.optimal[1] <= self.max
    }
}

/// Rainfall needs in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RainfallRequirement {
    /// Typical annual rainfall band
    pub annual: [f64; 2],
    /// Critical rainfall over the establishment period
    pub critical: f64,
}

impl RainfallRequirement {
    /// Rough weekly expectation: a quarter of the critical rainfall
    pub fn expected_weekly(&self) -> f64 {
        self.critical / 4.0
    }
}

/// Qualitative level used for water requirement, economic value and demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Level {
    pub fn key(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
            Level::VeryHigh => "very-high",
        }
    }
}

/// Complete reference record for one crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropDefinition {
    /// Stable identifier (e.g. "rice", "ragi")
    pub id: String,

    /// Display name in English and Kannada
    pub name: Bilingual,

    /// Seasons in which the crop is grown
    pub seasons: SmallVec<[Season; 3]>,

    /// Compatible soil texture categories (lowercase)
    pub soil_types: Vec<String>,

    /// Air temperature (°C)
    pub temperature: ToleranceRange,

    pub rainfall: RainfallRequirement,

    /// Relative humidity (%)
    pub humidity: ToleranceRange,

    /// Soil pH
    pub ph: ToleranceRange,

    pub growing_period_days: u32,

    /// Months (1-12) in which sowing is recommended
    pub planting_months: SmallVec<[u32; 4]>,

    /// Months (1-12) in which the crop is typically harvested
    pub harvest_months: SmallVec<[u32; 4]>,

    pub water_requirement: Level,
    pub economic_value: Level,
    pub market_demand: Level,

    pub diseases: Vec<String>,
    pub pests: Vec<String>,
}

impl CropDefinition {
    pub fn grows_in(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    pub fn is_planting_month(&self, month: u32) -> bool {
        self.planting_months.contains(&month)
    }

    pub fn is_harvest_month(&self, month: u32) -> bool {
        self.harvest_months.contains(&month)
    }

    /// Loose soil compatibility: case-insensitive substring match in either direction
    ///
    /// "sandy loam" matches "sandy" and "loam"; "clay" matches "clayloam".
    pub fn accepts_soil(&self, texture: &str) -> bool {
        let texture = texture.trim().to_lowercase();
        if texture.is_empty() {
            return false;
        }
        self.soil_types.iter().any(|accepted| {
            let accepted = accepted.to_lowercase();
            texture.contains(&accepted) || accepted.contains(&texture)
        })
    }

    /// Season keys joined for display ("kharif, rabi")
    pub fn season_list(&self) -> String {
        self.seasons.iter().map(|s| s.key()).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64, lo: f64, hi: f64) -> ToleranceRange {
        ToleranceRange { min, max, optimal: [lo, hi] }
    }

    #[test]
    fn test_classify_inclusive_bounds() {
        let r = range(20.0, 35.0, 25.0, 30.0);
        assert_eq!(r.classify(25.0), RangeFit::Optimal);
        assert_eq!(r.classify(30.0), RangeFit::Optimal);
        assert_eq!(r.classify(20.0), RangeFit::Tolerable);
        assert_eq!(r.classify(35.0), RangeFit::Tolerable);
        assert_eq!(r.classify(19.9), RangeFit::Outside);
        assert_eq!(r.classify(-4.0), RangeFit::Outside);
    }

    #[test]
    fn test_well_formed() {
        assert!(range(5.5, 7.0, 6.0, 6.8).is_well_formed());
        assert!(!range(5.5, 7.0, 6.8, 6.0).is_well_formed());
        assert!(!range(6.5, 7.0, 6.0, 6.8).is_well_formed());
    }

    #[test]
    fn test_level_serde_keys() {
        let level: Level = serde_json::from_str("\"very-high\"").unwrap();
        assert_eq!(level, Level::VeryHigh);
        assert_eq!(serde_json::to_string(&Level::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn test_expected_weekly_rainfall() {
        let r = RainfallRequirement { annual: [1000.0, 2500.0], critical: 150.0 };
        assert_eq!(r.expected_weekly(), 37.5);
    }
}
