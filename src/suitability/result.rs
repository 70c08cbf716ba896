//! Suitability result types: rating buckets and per-factor breakdowns.

use serde::{Deserialize, Serialize};

use crate::i18n::{pick, Language};

/// Qualitative rating derived from the total score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Rating {
    /// Inclusive lower bounds: 80 excellent, 65 good, 45 fair
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Rating::Excellent
        } else if score >= 65.0 {
            Rating::Good
        } else if score >= 45.0 {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Fair => "fair",
            Rating::Poor => "poor",
        }
    }

    pub fn display_text(&self, lang: Language) -> &'static str {
        match self {
            Rating::Excellent => pick(lang, "Excellent", "ಅತ್ಯುತ್ತಮ"),
            Rating::Good => pick(lang, "Good", "ಒಳ್ಳೆಯದು"),
            Rating::Fair => pick(lang, "Fair", "ಸಾಧಾರಣ"),
            Rating::Poor => pick(lang, "Poor", "ಕಳಪೆ"),
        }
    }

    /// Excellent or good
    pub fn is_suitable(&self) -> bool {
        matches!(self, Rating::Excellent | Rating::Good)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One evaluated factor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    /// Sub-score 0-100
    pub score: f64,
    /// Contribution weight in the total
    pub weight: f64,
    pub details: String,
}

/// Per-factor breakdown; soil and weather are absent when not supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityFactors {
    pub season: FactorScore,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil: Option<FactorScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<FactorScore>,
    pub timing: FactorScore,
}

impl SuitabilityFactors {
    /// Evaluated factors in fixed order: season, soil, weather, timing
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FactorScore)> {
        [
            Some(("season", &self.season)),
            self.soil.as_ref().map(|f| ("soil", f)),
            self.weather.as_ref().map(|f| ("weather", f)),
            Some(("timing", &self.timing)),
        ]
        .into_iter()
        .flatten()
    }

    pub fn total_weight(&self) -> f64 {
        self.iter().map(|(_, f)| f.weight).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityResult {
    /// Weighted average over evaluated factors (0-100)
    pub total_score: f64,
    pub rating: Rating,
    pub factors: SuitabilityFactors,
    /// Sum of evaluated factor weights, capped at 100
    pub confidence: f64,
}

impl SuitabilityResult {
    /// Total score rounded for display
    pub fn percent(&self) -> u32 {
        self.total_score.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds_are_inclusive() {
        assert_eq!(Rating::from_score(100.0), Rating::Excellent);
        assert_eq!(Rating::from_score(80.0), Rating::Excellent);
        assert_eq!(Rating::from_score(79.99), Rating::Good);
        assert_eq!(Rating::from_score(65.0), Rating::Good);
        assert_eq!(Rating::from_score(45.0), Rating::Fair);
        assert_eq!(Rating::from_score(44.9), Rating::Poor);
        assert_eq!(Rating::from_score(0.0), Rating::Poor);
    }

    #[test]
    fn test_rating_is_monotonic() {
        let order = |r: Rating| match r {
            Rating::Poor => 0,
            Rating::Fair => 1,
            Rating::Good => 2,
            Rating::Excellent => 3,
        };
        let mut previous = 0;
        for tenth in 0..=1000 {
            let current = order(Rating::from_score(tenth as f64 / 10.0));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_rating_text() {
        assert_eq!(Rating::Good.to_string(), "good");
        assert_eq!(Rating::Fair.display_text(Language::Kn), "ಸಾಧಾರಣ");
        assert!(Rating::Excellent.is_suitable());
        assert!(!Rating::Fair.is_suitable());
    }
}
