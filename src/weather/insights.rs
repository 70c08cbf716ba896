//! Agricultural Weather Insights
//!
//! Turns a daily forecast into farming-oriented signals:
//! - per-day agricultural favorability rating (0-100)
//! - today's conditions (favorable / caution, with notes)
//! - weekly trend (rainfall total, rainy days, favorable days, temperature direction)
//! - alerts for heat, heavy rain, dry air, wind and frost, or a note that conditions are ideal
//! - immediate and weekly farming actions
//! - outlook over the whole forecast: favorable, challenging and planting days
//!
//! The weekly rainfall total is what the suitability scorer consumes.

use serde::{Deserialize, Serialize};

use crate::i18n::Bilingual;

/// Days considered for the weekly trend
const WEEK_DAYS: usize = 7;

/// Rating at or above which a day counts as favorable
const FAVORABLE_RATING: u32 = 70;

/// Outlook thresholds are stricter than the weekly trend's
const OUTLOOK_FAVORABLE_RATING: u32 = 75;
const OUTLOOK_CHALLENGING_RATING: u32 = 40;

/// Favorable days with index up to this one are listed as planting days
const PLANTING_WINDOW_LAST_DAY: usize = 7;

/// 10 m/s
const STRONG_WIND_KMH: f64 = 36.0;

/// One day of forecast or observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    /// Mean temperature (°C), if reported
    #[serde(default)]
    pub temp: Option<f64>,
    pub temp_max: f64,
    pub temp_min: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Precipitation (mm); missing means none
    #[serde(default)]
    pub precip: Option<f64>,
    /// Wind speed (km/h)
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

impl DailyObservation {
    /// Reported mean, or the midpoint of max/min
    pub fn mean_temperature(&self) -> f64 {
        self.temp.unwrap_or((self.temp_max + self.temp_min) / 2.0)
    }

    pub fn precipitation(&self) -> f64 {
        self.precip.unwrap_or(0.0)
    }
}

/// Favorability of a day for field work and crop growth (0-100)
///
/// Temperature up to 30, humidity up to 25, precipitation up to 25, wind up to 20.
pub fn agricultural_rating(day: &DailyObservation) -> u32 {
    let temp = day.mean_temperature();
    let temp_score = if (20.0..=35.0).contains(&temp) {
        30
    } else if (15.0..=40.0).contains(&temp) {
        20
    } else {
        10
    };

    let humidity_score = if (50.0..=80.0).contains(&day.humidity) {
        25
    } else if (40.0..=90.0).contains(&day.humidity) {
        15
    } else {
        5
    };

    let precip = day.precipitation();
    let precip_score = if (2.0..=15.0).contains(&precip) {
        25
    } else if (1.0..=25.0).contains(&precip) {
        15
    } else if precip == 0.0 {
        10
    } else {
        5
    };

    let wind_score = match day.wind_speed {
        Some(w) if (5.0..=15.0).contains(&w) => 20,
        Some(w) if (2.0..=25.0).contains(&w) => 15,
        _ => 5,
    };

    temp_score + humidity_score + precip_score + wind_score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionStatus {
    Favorable,
    Caution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteKind {
    Info,
    Warning,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherNote {
    pub kind: NoteKind,
    pub message: Bilingual,
}

impl WeatherNote {
    fn new(kind: NoteKind, en: &str, kn: &str) -> Self {
        Self {
            kind,
            message: Bilingual::new(en, kn),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub overall: ConditionStatus,
    pub notes: Vec<WeatherNote>,
}

/// Assess today's conditions
///
/// Cold (<15 °C), heat (>40 °C) and heavy rain (>50 mm) switch the overall
/// status to caution; high humidity (>85%) only adds a disease note.
pub fn current_conditions(today: &DailyObservation) -> CurrentConditions {
    let mut overall = ConditionStatus::Favorable;
    let mut notes = Vec::new();
    let temp = today.mean_temperature();

    if temp < 15.0 {
        notes.push(WeatherNote::new(
            NoteKind::Warning,
            "Low temperature may stress warm-season crops",
            "ಕಡಿಮೆ ತಾಪಮಾನವು ಬೆಚ್ಚನೆಯ ಋತುವಿನ ಬೆಳೆಗಳನ್ನು ಒತ್ತಡಕ್ಕೆ ಒಳಪಡಿಸಬಹುದು",
        ));
        overall = ConditionStatus::Caution;
    } else if temp > 40.0 {
        notes.push(WeatherNote::new(
            NoteKind::Warning,
            "High temperature - ensure adequate irrigation",
            "ಹೆಚ್ಚಿನ ತಾಪಮಾನ - ಸಾಕಷ್ಟು ನೀರಾವರಿ ಖಚಿತಪಡಿಸಿ",
        ));
        overall = ConditionStatus::Caution;
    }

    if today.humidity > 85.0 {
        notes.push(WeatherNote::new(
            NoteKind::Warning,
            "High humidity increases disease risk",
            "ಹೆಚ್ಚಿನ ಆರ್ದ್ರತೆ ರೋಗದ ಅಪಾಯವನ್ನು ಹೆಚ್ಚಿಸುತ್ತದೆ",
        ));
    }

    if today.precipitation() > 50.0 {
        notes.push(WeatherNote::new(
            NoteKind::Alert,
            "Heavy rainfall - check drainage systems",
            "ಭಾರೀ ಮಳೆ - ಒಳಚರಂಡಿ ವ್ಯವಸ್ಥೆಗಳನ್ನು ಪರಿಶೀಲಿಸಿ",
        ));
        overall = ConditionStatus::Caution;
    }

    CurrentConditions { overall, notes }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureTrend {
    Increasing,
    Stable,
    Decreasing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub temperature_trend: TemperatureTrend,
    /// Total precipitation over the week (mm)
    pub rainfall_total: f64,
    pub rainfall_days: u32,
    pub favorable_days: u32,
    pub notes: Vec<WeatherNote>,
}

/// Summarise the first seven days of a forecast
///
/// Temperature direction compares the mean of the last three days with the
/// first three; a shift of more than 2 °C counts as a trend.
pub fn weekly_trend(days: &[DailyObservation]) -> WeeklyTrend {
    let week = &days[..days.len().min(WEEK_DAYS)];

    let mut rainfall_total = 0.0;
    let mut rainfall_days = 0;
    let mut favorable_days = 0;
    let mut daily_means = Vec::with_capacity(week.len());

    for day in week {
        daily_means.push((day.temp_max + day.temp_min) / 2.0);
        let precip = day.precipitation();
        if precip > 0.0 {
            rainfall_total += precip;
            rainfall_days += 1;
        }
        if agricultural_rating(day) >= FAVORABLE_RATING {
            favorable_days += 1;
        }
    }

    let temperature_trend = match (head_mean(&daily_means), tail_mean(&daily_means)) {
        (Some(first), Some(last)) if last > first + 2.0 => TemperatureTrend::Increasing,
        (Some(first), Some(last)) if last < first - 2.0 => TemperatureTrend::Decreasing,
        _ => TemperatureTrend::Stable,
    };

    let mut notes = Vec::new();
    if rainfall_days >= 4 {
        notes.push(WeatherNote::new(
            NoteKind::Info,
            "Frequent rainfall expected - plan indoor activities",
            "ಆಗಾಗ್ಗೆ ಮಳೆ ನಿರೀಕ್ಷೆ - ಒಳಾಂಗಣ ಚಟುವಟಿಕೆಗಳನ್ನು ಯೋಜಿಸಿ",
        ));
    }

    WeeklyTrend {
        temperature_trend,
        rainfall_total,
        rainfall_days,
        favorable_days,
        notes,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn head_mean(values: &[f64]) -> Option<f64> {
    mean(&values[..values.len().min(3)])
}

fn tail_mean(values: &[f64]) -> Option<f64> {
    mean(&values[values.len().saturating_sub(3)..])
}


// ============================================================================
// Alerts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Heat,
    Rainfall,
    LowHumidity,
    Wind,
    Frost,
    Optimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub title: Bilingual,
    pub description: Bilingual,
    pub actions: Vec<Bilingual>,
}

impl WeatherAlert {
    fn new(kind: AlertKind, severity: AlertSeverity, title: Bilingual, description: Bilingual) -> Self {
        Self {
            kind,
            severity,
            title,
            description,
            actions: Vec::new(),
        }
    }

    fn with_action(mut self, en: &str, kn: &str) -> Self {
        self.actions.push(Bilingual::new(en, kn));
        self
    }
}

/// Alerts for today's observation
///
/// Heat and rain have two tiers: max above 40 °C or rain above 50 mm is
/// high severity, mean above 35 °C or rain above 25 mm is medium.
pub fn agricultural_alerts(today: &DailyObservation) -> Vec<WeatherAlert> {
    let mut alerts = Vec::new();
    let temp = today.mean_temperature();
    let precip = today.precipitation();

    if today.temp_max > 40.0 {
        alerts.push(
            WeatherAlert::new(
                AlertKind::Heat,
                AlertSeverity::High,
                Bilingual::new("Heat Stress Warning", "ಶಾಖದ ಒತ್ತಡ ಎಚ್ಚರಿಕೆ"),
                Bilingual::new(
                    "Extremely high temperatures may damage crops",
                    "ಅತಿ ಹೆಚ್ಚಿನ ತಾಪಮಾನವು ಬೆಳೆಗಳನ್ನು ಹಾನಿಗೊಳಿಸಬಹುದು",
                ),
            )
            .with_action("Increase irrigation", "ನೀರಾವರಿ ಹೆಚ್ಚಿಸಿ")
            .with_action("Provide shade if possible", "ಸಾಧ್ಯವಾದರೆ ನೆರಳು ಒದಗಿಸಿ"),
        );
    } else if temp > 35.0 {
        alerts.push(WeatherAlert::new(
            AlertKind::Heat,
            AlertSeverity::Medium,
            Bilingual::new("High Temperature Alert", "ಹೆಚ್ಚಿನ ತಾಪಮಾನ ಎಚ್ಚರಿಕೆ"),
            Bilingual::new(
                "Temperature above 35°C can stress crops. Consider additional watering and shade protection.",
                "35°C ಗಿಂತ ಹೆಚ್ಚಿನ ತಾಪಮಾನವು ಬೆಳೆಗಳಿಗೆ ಒತ್ತಡ ಉಂಟುಮಾಡಬಹುದು. ಹೆಚ್ಚುವರಿ ನೀರು ಮತ್ತು ನೆರಳಿನ ರಕ್ಷಣೆ ಪರಿಗಣಿಸಿ.",
            ),
        ));
    }

    if precip > 50.0 {
        alerts.push(
            WeatherAlert::new(
                AlertKind::Rainfall,
                AlertSeverity::High,
                Bilingual::new("Heavy Rainfall Alert", "ಭಾರೀ ಮಳೆಯ ಎಚ್ಚರಿಕೆ"),
                Bilingual::new(
                    "Heavy rainfall may cause waterlogging",
                    "ಭಾರೀ ಮಳೆಯು ನೀರು ಕಟ್ಟುವಿಕೆಗೆ ಕಾರಣವಾಗಬಹುದು",
                ),
            )
            .with_action("Check drainage systems", "ಒಳಚರಂಡಿ ವ್ಯವಸ್ಥೆಗಳನ್ನು ಪರಿಶೀಲಿಸಿ")
            .with_action("Avoid field operations", "ಹೊಲದ ಕೆಲಸಗಳನ್ನು ತಪ್ಪಿಸಿ"),
        );
    } else if precip > 25.0 {
        alerts.push(WeatherAlert::new(
            AlertKind::Rainfall,
            AlertSeverity::Medium,
            Bilingual::new("Heavy Rain Expected", "ಭಾರೀ ಮಳೆ ನಿರೀಕ್ಷೆ"),
            Bilingual::new(
                format!(
                    "Expected rainfall: {:.1}mm. Prepare drainage and avoid field activities.",
                    precip
                ),
                format!(
                    "ನಿರೀಕ್ಷಿತ ಮಳೆ: {:.1}ಮಿಮೀ. ಒಳಚರಂಡಿ ಸಿದ್ಧಪಡಿಸಿ ಮತ್ತು ಹೊಲದ ಕೆಲಸಗಳನ್ನು ತಪ್ಪಿಸಿ.",
                    precip
                ),
            ),
        ));
    }

    if today.humidity < 30.0 {
        alerts.push(WeatherAlert::new(
            AlertKind::LowHumidity,
            AlertSeverity::Medium,
            Bilingual::new("Low Humidity Alert", "ಕಡಿಮೆ ಆರ್ದ್ರತೆ ಎಚ್ಚರಿಕೆ"),
            Bilingual::new(
                "Low humidity can cause plant stress. Increase irrigation frequency.",
                "ಕಡಿಮೆ ಆರ್ದ್ರತೆಯು ಸಸ್ಯಗಳಿಗೆ ಒತ್ತಡ ಉಂಟುಮಾಡಬಹುದು. ನೀರಾವರಿ ಆವರ್ತನ ಹೆಚ್ಚಿಸಿ.",
            ),
        ));
    }

    if let Some(wind) = today.wind_speed.filter(|w| *w > STRONG_WIND_KMH) {
        alerts.push(WeatherAlert::new(
            AlertKind::Wind,
            AlertSeverity::Low,
            Bilingual::new("Strong Wind Alert", "ಬಲವಾದ ಗಾಳಿ ಎಚ್ಚರಿಕೆ"),
            Bilingual::new(
                format!("Wind speed: {} km/h. Secure crops and structures.", wind.round()),
                format!("ಗಾಳಿಯ ವೇಗ: {} ಕಿಮೀ/ಗಂ. ಬೆಳೆಗಳು ಮತ್ತು ರಚನೆಗಳನ್ನು ಭದ್ರಪಡಿಸಿ.", wind.round()),
            ),
        ));
    }

    if today.temp_min < 5.0 {
        alerts.push(
            WeatherAlert::new(
                AlertKind::Frost,
                AlertSeverity::High,
                Bilingual::new("Frost Warning", "ಹಿಮ ಎಚ್ಚರಿಕೆ"),
                Bilingual::new(
                    "Low temperatures may cause frost damage",
                    "ಕಡಿಮೆ ತಾಪಮಾನವು ಹಿಮ ಹಾನಿಗೆ ಕಾರಣವಾಗಬಹುದು",
                ),
            )
            .with_action("Protect sensitive crops", "ಸೂಕ್ಷ್ಮ ಬೆಳೆಗಳನ್ನು ರಕ್ಷಿಸಿ")
            .with_action("Cover young plants", "ಎಳೆಯ ಸಸಿಗಳನ್ನು ಮುಚ್ಚಿ"),
        );
    }

    if (20.0..=30.0).contains(&temp) && (50.0..=80.0).contains(&today.humidity) {
        alerts.push(WeatherAlert::new(
            AlertKind::Optimal,
            AlertSeverity::Low,
            Bilingual::new("Optimal Conditions", "ಅತ್ಯುತ್ತಮ ಪರಿಸ್ಥಿತಿಗಳು"),
            Bilingual::new(
                "Current conditions are ideal for most agricultural activities.",
                "ಪ್ರಸ್ತುತ ಪರಿಸ್ಥಿತಿಗಳು ಹೆಚ್ಚಿನ ಕೃಷಿ ಚಟುವಟಿಕೆಗಳಿಗೆ ಸೂಕ್ತವಾಗಿವೆ.",
            ),
        ));
    }

    alerts
}

// ============================================================================
// Farming Actions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmingAction {
    pub priority: ActionPriority,
    pub action: Bilingual,
    pub reason: Bilingual,
}

impl FarmingAction {
    fn new(priority: ActionPriority, action: (&str, &str), reason: (&str, &str)) -> Self {
        Self {
            priority,
            action: Bilingual::new(action.0, action.1),
            reason: Bilingual::new(reason.0, reason.1),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FarmingRecommendations {
    /// For today
    pub immediate: Vec<FarmingAction>,
    /// For the coming week
    pub weekly: Vec<FarmingAction>,
}

/// Actions for today (rain above 25 mm, max above 38 °C) and the week (under 10 mm of rain)
pub fn farming_recommendations(today: &DailyObservation, weekly_rainfall: f64) -> FarmingRecommendations {
    let mut recs = FarmingRecommendations::default();

    if today.precipitation() > 25.0 {
        recs.immediate.push(FarmingAction::new(
            ActionPriority::High,
            ("Postpone spraying operations", "ಸಿಂಪಣೆ ಕಾರ್ಯಾಚರಣೆಗಳನ್ನು ಮುಂದೂಡಿ"),
            ("Heavy rainfall expected", "ಭಾರೀ ಮಳೆ ನಿರೀಕ್ಷೆ"),
        ));
    }
    if today.temp_max > 38.0 {
        recs.immediate.push(FarmingAction::new(
            ActionPriority::High,
            ("Increase irrigation frequency", "ನೀರಾವರಿ ಆವರ್ತನ ಹೆಚ್ಚಿಸಿ"),
            ("High temperature stress", "ಹೆಚ್ಚಿನ ತಾಪಮಾನದ ಒತ್ತಡ"),
        ));
    }
    if weekly_rainfall < 10.0 {
        recs.weekly.push(FarmingAction::new(
            ActionPriority::Medium,
            ("Plan supplemental irrigation", "ಪೂರಕ ನೀರಾವರಿ ಯೋಜಿಸಿ"),
            ("Low rainfall expected this week", "ಈ ವಾರ ಕಡಿಮೆ ಮಳೆ ನಿರೀಕ್ಷೆ"),
        ));
    }

    recs
}

// ============================================================================
// Outlook
// ============================================================================

/// A forecast day picked out by the outlook; `day` 0 is today
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatedDay {
    pub day: usize,
    pub rating: u32,
    pub precipitation: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonalOutlook {
    /// Days rated 75 or more
    pub favorable_days: u32,
    /// Days rated below 40
    pub challenging_days: Vec<RatedDay>,
    /// Favorable days within the first eight
    pub optimal_planting_days: Vec<RatedDay>,
}

/// Rate every day of the forecast, not only the first week
pub fn seasonal_outlook(days: &[DailyObservation]) -> SeasonalOutlook {
    let mut outlook = SeasonalOutlook::default();

    for (index, day) in days.iter().enumerate() {
        let rated = RatedDay {
            day: index,
            rating: agricultural_rating(day),
            precipitation: day.precipitation(),
        };
        if rated.rating >= OUTLOOK_FAVORABLE_RATING {
            outlook.favorable_days += 1;
            if index <= PLANTING_WINDOW_LAST_DAY {
                outlook.optimal_planting_days.push(rated);
            }
        } else if rated.rating < OUTLOOK_CHALLENGING_RATING {
            outlook.challenging_days.push(rated);
        }
    }

    outlook
}

/// Everything derived from a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgriculturalInsights {
    pub today: DailyObservation,
    pub current: CurrentConditions,
    pub weekly_trend: WeeklyTrend,
    pub alerts: Vec<WeatherAlert>,
    pub recommendations: FarmingRecommendations,
    pub seasonal_outlook: SeasonalOutlook,
}

impl AgriculturalInsights {
    /// Build from a forecast whose first entry is today; `None` for an empty forecast
    pub fn from_days(days: &[DailyObservation]) -> Option<Self> {
        let today = *days.first()?;
        let weekly_trend = weekly_trend(days);
        Some(Self {
            today,
            current: current_conditions(&today),
            alerts: agricultural_alerts(&today),
            recommendations: farming_recommendations(&today, weekly_trend.rainfall_total),
            seasonal_outlook: seasonal_outlook(days),
            weekly_trend,
        })
    }
}
