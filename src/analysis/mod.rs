//! Crop Analysis
//!
//! Scores every crop in a database for one set of conditions and turns the
//! ranked scores into farmer-facing recommendations.
//!
//! Architecture:
//! - `risk.rs` - weather / disease / drought / timing risks
//! - `advice.rs` - verdict sentences, management and diversification advice
//! - `report.rs` - markdown rendering of a finished analysis

pub mod advice;
pub mod report;
pub mod risk;

use serde::{Deserialize, Serialize};

use crate::crops::{CropDatabase, CropDefinition};
use crate::i18n::Language;
use crate::location::ResolvedLocation;
use crate::season::{month_name, Season};
use crate::soil::{soil_profile_for, SoilSample};
use crate::suitability::{self, Rating, SuitabilityResult};
use crate::weather::{AgriculturalInsights, WeatherAlert, WeatherSample};

pub use advice::{diversification_advice, management_advice, recommendation_text, ManagementAdvice};
pub use report::render_markdown;
pub use risk::{assess_risks, CropRisk, RiskKind, RiskLevel};

/// Crops listed as the best options in the seasonal summary
const BEST_CROPS: usize = 3;

/// Inputs for a full-database analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Human-readable place name carried through to the report
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub soil: Option<SoilSample>,

    #[serde(default)]
    pub weather: Option<WeatherSample>,

    /// Forecast-derived insights; when present they supersede `weather`
    #[serde(default)]
    pub insights: Option<AgriculturalInsights>,

    pub month: u32,

    #[serde(default)]
    pub language: Language,
}

impl AnalysisRequest {
    pub fn for_month(month: u32) -> Self {
        Self {
            month,
            ..Default::default()
        }
    }

    /// Request for a resolved place, with the soil taken from its district profile
    /// (or estimated from its coordinates)
    pub fn for_location(location: &ResolvedLocation, month: u32, language: Language) -> Self {
        Self {
            location: Some(location.name.clone()),
            soil: Some(soil_profile_for(
                location.district_key.as_deref(),
                location.lat,
                location.lon,
                month,
            )),
            weather: None,
            insights: None,
            month,
            language,
        }
    }

    /// Weather sample fed to the scorer
    pub fn effective_weather(&self) -> Option<WeatherSample> {
        self.insights
            .as_ref()
            .map(WeatherSample::from_insights)
            .or(self.weather)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropTiming {
    pub planting: Vec<String>,
    pub harvest: Vec<String>,
    pub growing_period_days: u32,
}

impl CropTiming {
    pub fn for_crop(crop: &CropDefinition, lang: Language) -> Self {
        let names = |months: &[u32]| -> Vec<String> {
            months
                .iter()
                .filter_map(|&m| month_name(m, lang))
                .map(str::to_string)
                .collect()
        };
        Self {
            planting: names(crop.planting_months.as_slice()),
            harvest: names(crop.harvest_months.as_slice()),
            growing_period_days: crop.growing_period_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecommendation {
    pub crop_id: String,
    pub crop_name: String,
    pub seasons: Vec<Season>,
    pub suitability: SuitabilityResult,
    pub recommendation: String,
    pub timing: CropTiming,
    pub risks: Vec<CropRisk>,
    pub management: ManagementAdvice,
}

/// Crop ids grouped by rating, plus the leading options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalSummary {
    /// Excellent or good
    pub suitable: Vec<String>,
    /// Fair
    pub marginal: Vec<String>,
    /// Poor
    pub unsuitable: Vec<String>,
    pub best_crops: Vec<String>,
    pub diversification_advice: String,
}

impl SeasonalSummary {
    fn from_ranked(recommendations: &[CropRecommendation], lang: Language) -> Self {
        let ids_where = |pred: fn(Rating) -> bool| {
            recommendations
                .iter()
                .filter(|r| pred(r.suitability.rating))
                .map(|r| r.crop_id.clone())
                .collect::<Vec<_>>()
        };

        let suitable = ids_where(|r| r.is_suitable());
        let diversification = diversification_advice(suitable.len(), lang).to_string();

        Self {
            marginal: ids_where(|r| r == Rating::Fair),
            unsuitable: ids_where(|r| r == Rating::Poor),
            best_crops: recommendations
                .iter()
                .take(BEST_CROPS)
                .map(|r| r.crop_id.clone())
                .collect(),
            suitable,
            diversification_advice: diversification,
        }
    }
}

/// The current season's calendar entry, in the analysis language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonCalendar {
    pub name: String,
    pub planting_period: String,
    pub harvest_period: String,
    pub weather_requirements: String,
}

impl SeasonCalendar {
    pub fn for_season(season: Season, lang: Language) -> Self {
        let info = season.calendar();
        Self {
            name: season.display_name(lang).to_string(),
            planting_period: info.planting_period(lang).to_string(),
            harvest_period: info.harvest_period(lang).to_string(),
            weather_requirements: info.weather_requirements(lang).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropAnalysis {
    pub location: Option<String>,
    pub month: u32,
    pub season: Season,
    pub language: Language,
    pub calendar: SeasonCalendar,
    /// Alerts for today when a forecast was supplied
    pub weather_alerts: Vec<WeatherAlert>,
    /// Highest score first; ties keep database order
    pub recommendations: Vec<CropRecommendation>,
    pub seasonal: SeasonalSummary,
}

impl CropAnalysis {
    pub fn top(&self, n: usize) -> &[CropRecommendation] {
        &self.recommendations[..n.min(self.recommendations.len())]
    }

    pub fn get(&self, crop_id: &str) -> Option<&CropRecommendation> {
        self.recommendations.iter().find(|r| r.crop_id == crop_id)
    }
}

/// Score and rank every crop in `db`
pub fn analyze(db: &CropDatabase, request: &AnalysisRequest) -> CropAnalysis {
    let lang = request.language;
    let month = request.month;
    let weather = request.effective_weather();

    let mut recommendations: Vec<CropRecommendation> = db
        .iter()
        .map(|crop| {
            let suitability =
                suitability::score(crop, request.soil.as_ref(), weather.as_ref(), month);
            let rating = suitability.rating;
            CropRecommendation {
                crop_id: crop.id.clone(),
                crop_name: crop.name.get(lang).to_string(),
                seasons: crop.seasons.to_vec(),
                recommendation: recommendation_text(crop, rating, lang),
                timing: CropTiming::for_crop(crop, lang),
                risks: assess_risks(crop, request.insights.as_ref(), month, lang),
                management: management_advice(crop, rating, lang),
                suitability,
            }
        })
        .collect();

    // Stable sort keeps database order for equal scores
    recommendations.sort_by(|a, b| b.suitability.total_score.total_cmp(&a.suitability.total_score));

    let seasonal = SeasonalSummary::from_ranked(&recommendations, lang);

    tracing::debug!(
        month,
        crops = recommendations.len(),
        suitable = seasonal.suitable.len(),
        "analysis complete"
    );

    let season = Season::from_month(month);
    CropAnalysis {
        location: request.location.clone(),
        month,
        season,
        language: lang,
        calendar: SeasonCalendar::for_season(season, lang),
        weather_alerts: request
            .insights
            .as_ref()
            .map(|i| i.alerts.clone())
            .unwrap_or_default(),
        recommendations,
        seasonal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_descending_with_stable_ties() {
        let analysis = analyze(CropDatabase::builtin(), &AnalysisRequest::for_month(7));
        let scores: Vec<f64> = analysis.recommendations.iter().map(|r| r.suitability.total_score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));

        // every kharif crop planted in July scores 100; they keep table order
        let leaders: Vec<&str> = analysis.top(6).iter().map(|r| r.crop_id.as_str()).collect();
        assert_eq!(leaders, vec!["rice", "cotton", "groundnut", "jowar", "ragi", "maize"]);
        assert_eq!(analysis.seasonal.best_crops, vec!["rice", "cotton", "groundnut"]);
        assert_eq!(analysis.recommendations.last().unwrap().crop_id, "wheat");
        assert_eq!(analysis.seasonal.unsuitable, vec!["wheat"]);
    }

    #[test]
    fn test_effective_weather_prefers_insights() {
        let mut request = AnalysisRequest::for_month(7);
        request.weather = Some(WeatherSample::current(10.0, 10.0));
        assert_eq!(request.effective_weather(), request.weather);

        let day = crate::weather::DailyObservation {
            temp: Some(27.0),
            temp_max: 31.0,
            temp_min: 23.0,
            humidity: 72.0,
            precip: Some(5.0),
            wind_speed: None,
        };
        request.insights = AgriculturalInsights::from_days(&[day, day]);
        let weather = request.effective_weather().unwrap();
        assert_eq!(weather.temperature, Some(27.0));
        assert_eq!(weather.weekly_rainfall_mm, Some(10.0));
    }

    #[test]
    fn test_for_location_uses_district_soil() {
        let mandya = crate::location::resolve("Mandya").unwrap();
        let request = AnalysisRequest::for_location(&mandya, 7, Language::En);
        let soil = request.soil.as_ref().unwrap();
        assert_eq!(soil.texture, "alluvial");
        assert_eq!(request.location.as_deref(), Some("Mandya"));

        let analysis = analyze(CropDatabase::builtin(), &request);
        let rice = analysis.get("rice").unwrap();
        assert!(rice.suitability.factors.soil.is_some());
        assert_eq!(rice.suitability.confidence, 70.0);
    }

    #[test]
    fn test_calendar_and_alerts_follow_request() {
        let analysis = analyze(CropDatabase::builtin(), &AnalysisRequest::for_month(12));
        assert_eq!(analysis.calendar.name, "Rabi");
        assert_eq!(analysis.calendar.planting_period, "November-December");
        assert!(analysis.weather_alerts.is_empty());

        let mut request = AnalysisRequest::for_month(7);
        request.language = Language::Kn;
        let frosty = crate::weather::DailyObservation {
            temp: None,
            temp_max: 14.0,
            temp_min: 3.0,
            humidity: 60.0,
            precip: None,
            wind_speed: None,
        };
        request.insights = AgriculturalInsights::from_days(&[frosty]);
        let analysis = analyze(CropDatabase::builtin(), &request);
        assert_eq!(analysis.calendar.weather_requirements, "ಮುಂಗಾರು ಮಳೆ ಅತ್ಯಗತ್ಯ");
        assert_eq!(analysis.weather_alerts.len(), 1);
        assert_eq!(analysis.weather_alerts[0].kind, crate::weather::AlertKind::Frost);
    }

    #[test]
    fn test_timing_names_follow_language() {
        let rice = CropDatabase::builtin().get("rice").unwrap();
        let timing = CropTiming::for_crop(rice, Language::En);
        assert_eq!(timing.planting, vec!["Jun", "Jul", "Aug"]);
        assert_eq!(timing.harvest, vec!["Oct", "Nov", "Dec"]);
        assert_eq!(timing.growing_period_days, 120);
        assert_eq!(CropTiming::for_crop(rice, Language::Kn).planting[0], "ಜೂನ್");
    }
}
