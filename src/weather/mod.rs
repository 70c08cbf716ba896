//! Weather inputs for the scorer and agricultural weather insights.

pub mod insights;

use serde::{Deserialize, Serialize};

pub use insights::{
    agricultural_alerts, agricultural_rating, current_conditions, farming_recommendations,
    seasonal_outlook, weekly_trend, ActionPriority, AgriculturalInsights, AlertKind, AlertSeverity,
    ConditionStatus, CurrentConditions, DailyObservation, FarmingAction, FarmingRecommendations,
    NoteKind, RatedDay, SeasonalOutlook, TemperatureTrend, WeatherAlert, WeatherNote, WeeklyTrend,
};

/// Weather at a location, as supplied to the scorer
///
/// Every field is optional; the weather factor scores whatever is present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Current air temperature (°C)
    #[serde(default)]
    pub temperature: Option<f64>,

    /// Current relative humidity (%)
    #[serde(default)]
    pub humidity: Option<f64>,

    /// Rainfall total over the coming/recent week (mm)
    #[serde(default)]
    pub weekly_rainfall_mm: Option<f64>,
}

impl WeatherSample {
    pub fn current(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature: Some(temperature),
            humidity: Some(humidity),
            weekly_rainfall_mm: None,
        }
    }

    pub fn with_weekly_rainfall(mut self, rainfall_mm: f64) -> Self {
        self.weekly_rainfall_mm = Some(rainfall_mm);
        self
    }

    /// Today's reading plus the weekly rainfall aggregate
    pub fn from_insights(insights: &AgriculturalInsights) -> Self {
        Self {
            temperature: Some(insights.today.mean_temperature()),
            humidity: Some(insights.today.humidity),
            weekly_rainfall_mm: Some(insights.weekly_trend.rainfall_total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.humidity.is_none() && self.weekly_rainfall_mm.is_none()
    }
}
