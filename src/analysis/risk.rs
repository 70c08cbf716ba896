//! Crop risk assessment.
//!
//! Weather, disease and drought risks need forecast insights; the timing risk
//! only needs the month.

use serde::{Deserialize, Serialize};

use crate::crops::CropDefinition;
use crate::i18n::{pick, Language};
use crate::season::Season;
use crate::weather::{AgriculturalInsights, ConditionStatus};

/// Humidity above which fungal/bacterial disease pressure is flagged
const DISEASE_HUMIDITY: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskKind {
    Weather,
    Disease,
    Drought,
    Timing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn display_text(&self, lang: Language) -> &'static str {
        match self {
            RiskLevel::Low => pick(lang, "low", "ಕಡಿಮೆ"),
            RiskLevel::Medium => pick(lang, "medium", "ಮಧ್ಯಮ"),
            RiskLevel::High => pick(lang, "high", "ಹೆಚ್ಚು"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRisk {
    pub kind: RiskKind,
    pub level: RiskLevel,
    pub description: String,
    pub mitigation: String,
}

impl CropRisk {
    fn new(kind: RiskKind, level: RiskLevel, description: &str, mitigation: &str) -> Self {
        Self {
            kind,
            level,
            description: description.to_string(),
            mitigation: mitigation.to_string(),
        }
    }
}

pub fn assess_risks(
    crop: &CropDefinition,
    insights: Option<&AgriculturalInsights>,
    month: u32,
    lang: Language,
) -> Vec<CropRisk> {
    let mut risks = Vec::new();

    if let Some(insights) = insights {
        if insights.current.overall == ConditionStatus::Caution {
            risks.push(CropRisk::new(
                RiskKind::Weather,
                RiskLevel::Medium,
                pick(lang, "Weather conditions may cause stress", "ಹವಾಮಾನ ಪರಿಸ್ಥಿತಿಗಳು ಒತ್ತಡ ಉಂಟುಮಾಡಬಹುದು"),
                pick(
                    lang,
                    "Monitor crop closely and adjust irrigation",
                    "ಬೆಳೆಯನ್ನು ಹತ್ತಿರದಿಂದ ಗಮನಿಸಿ ಮತ್ತು ನೀರಾವರಿ ಹೊಂದಿಸಿ",
                ),
            ));
        }

        if insights.today.humidity > DISEASE_HUMIDITY {
            risks.push(CropRisk::new(
                RiskKind::Disease,
                RiskLevel::High,
                pick(lang, "High humidity increases disease risk", "ಹೆಚ್ಚಿನ ಆರ್ದ್ರತೆ ರೋಗದ ಅಪಾಯವನ್ನು ಹೆಚ್ಚಿಸುತ್ತದೆ"),
                pick(
                    lang,
                    "Ensure good drainage and air circulation",
                    "ಉತ್ತಮ ಒಳಚರಂಡಿ ಮತ್ತು ಗಾಳಿ ಸಂಚಾರ ಖಚಿತಪಡಿಸಿ",
                ),
            ));
        }

        if insights.weekly_trend.rainfall_total < crop.rainfall.expected_weekly() {
            risks.push(CropRisk::new(
                RiskKind::Drought,
                RiskLevel::Medium,
                pick(lang, "Low rainfall may cause water stress", "ಕಡಿಮೆ ಮಳೆಯಿಂದ ನೀರಿನ ಒತ್ತಡ ಉಂಟಾಗಬಹುದು"),
                pick(lang, "Plan supplemental irrigation", "ಪೂರಕ ನೀರಾವರಿ ಯೋಜಿಸಿ"),
            ));
        }
    }

    if !crop.grows_in(Season::from_month(month)) {
        risks.push(CropRisk::new(
            RiskKind::Timing,
            RiskLevel::High,
            pick(lang, "Not the optimal season for this crop", "ಈ ಬೆಳೆಗೆ ಇದು ಸೂಕ್ತ ಋತುವಲ್ಲ"),
            pick(lang, "Consider waiting for appropriate season", "ಸೂಕ್ತ ಋತುವಿಗಾಗಿ ಕಾಯುವುದನ್ನು ಪರಿಗಣಿಸಿ"),
        ));
    }

    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crops::CropDatabase;
    use crate::weather::DailyObservation;

    fn insights(humidity: f64, precip: f64, temp: f64) -> AgriculturalInsights {
        let day = DailyObservation {
            temp: Some(temp),
            temp_max: temp + 4.0,
            temp_min: temp - 4.0,
            humidity,
            precip: Some(precip),
            wind_speed: Some(10.0),
        };
        AgriculturalInsights::from_days(&[day; 7]).unwrap()
    }

    #[test]
    fn test_no_insights_only_timing_risk() {
        let wheat = CropDatabase::builtin().get("wheat").unwrap();
        let risks = assess_risks(wheat, None, 7, Language::En);
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].kind, RiskKind::Timing);
        assert_eq!(risks[0].level, RiskLevel::High);

        assert!(assess_risks(wheat, None, 12, Language::En).is_empty());
    }

    #[test]
    fn test_humid_dry_week_flags_disease_and_drought() {
        let rice = CropDatabase::builtin().get("rice").unwrap();
        // 7 x 1 mm = 7 mm, below 37.5 mm expected
        let risks = assess_risks(rice, Some(&insights(90.0, 1.0, 28.0)), 7, Language::En);
        let kinds: Vec<_> = risks.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RiskKind::Disease, RiskKind::Drought]);
    }

    #[test]
    fn test_caution_weather_flags_stress() {
        let jowar = CropDatabase::builtin().get("jowar").unwrap();
        // 60 mm a day is heavy rain; weekly total is far above expectation
        let risks = assess_risks(jowar, Some(&insights(70.0, 60.0, 28.0)), 7, Language::Kn);
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].kind, RiskKind::Weather);
        assert_eq!(risks[0].description, "ಹವಾಮಾನ ಪರಿಸ್ಥಿತಿಗಳು ಒತ್ತಡ ಉಂಟುಮಾಡಬಹುದು");
    }
}
