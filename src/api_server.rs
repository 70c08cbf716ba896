// Axum API Server Module
//
// Purpose: JSON API over the crop database, suitability scorer and crop analysis
// Analysis responses are cached in a moka TTL cache keyed by the request body.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use chrono::Datelike;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::analysis::{analyze, AnalysisRequest};
use crate::crops::CropDatabase;
use crate::error::AdvisorError;
use crate::i18n::Language;
use crate::location::{self, ResolvedLocation};
use crate::season::validate_month;
use crate::soil::{
    crops_for_soil, soil_profile_for, soil_recommendations, soil_type_info, SoilSample,
};
use crate::suitability;
use crate::weather::{AgriculturalInsights, DailyObservation, WeatherSample};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub cache_ttl_secs: u64,
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            cache_ttl_secs: 300,    // 5 min TTL
            cache_capacity: 10_000, // 10K entries
        }
    }
}

impl ServerConfig {
    /// Read PORT, CACHE_TTL_SECS and CACHE_CAPACITY; unset or unparsable values keep defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env_or("PORT", defaults.port),
            cache_ttl_secs: env_or("CACHE_TTL_SECS", defaults.cache_ttl_secs),
            cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub crops: Arc<CropDatabase>,
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    /// State over the built-in crop database
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_database(CropDatabase::builtin().clone(), config)
    }

    pub fn with_database(crops: CropDatabase, config: &ServerConfig) -> Self {
        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Self {
            crops: Arc::new(crops),
            cache,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Crop database
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:id", get(get_crop))

        // Scoring
        .route("/api/suitability", post(score_crop))
        .route("/api/analysis", post(analyze_location))

        // Reference lookups
        .route("/api/soil/:district", get(get_soil))
        .route("/api/pincode/:pin", get(get_pincode))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_crops(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let crops: Vec<&_> = state.crops.iter().collect();
    Ok(Json(serde_json::json!({
        "count": crops.len(),
        "crops": crops,
    })))
}

async fn get_crop(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let crop = state.crops.require(&id)?;
    Ok(Json(serde_json::to_value(crop)?))
}

#[derive(Debug, Deserialize)]
struct SuitabilityBody {
    crop_id: String,
    #[serde(default)]
    soil: Option<SoilSample>,
    #[serde(default)]
    weather: Option<WeatherSample>,
    #[serde(default)]
    month: Option<u32>,
}

/// Score one crop
///
/// POST /api/suitability
/// Body: { "crop_id": "rice", "soil": {...}, "weather": {...}, "month": 7 }
async fn score_crop(
    State(state): State<AppState>,
    Json(body): Json<SuitabilityBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let month = month_or_current(body.month)?;
    let crop = state.crops.require(&body.crop_id)?;

    let result = suitability::score(crop, body.soil.as_ref(), body.weather.as_ref(), month);
    Ok(Json(serde_json::json!({
        "crop_id": crop.id,
        "month": month,
        "suitability": result,
    })))
}

/// Where to analyse: first of PIN code, district name, coordinates
#[derive(Debug, Deserialize, Serialize)]
struct AnalysisBody {
    #[serde(default)]
    pincode: Option<String>,
    #[serde(default)]
    district: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
    /// Overrides the district soil profile
    #[serde(default)]
    soil: Option<SoilSample>,
    #[serde(default)]
    weather: Option<WeatherSample>,
    /// Daily forecast, today first
    #[serde(default)]
    forecast: Vec<DailyObservation>,
    #[serde(default)]
    month: Option<u32>,
    #[serde(default)]
    language: Option<Language>,
}

/// Rank every crop for a location
///
/// POST /api/analysis
/// Body: { "district": "Mandya", "month": 7, "language": "kn", "forecast": [...] }
async fn analyze_location(
    State(state): State<AppState>,
    Json(mut body): Json<AnalysisBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    // Fix the month before keying the cache so "current month" entries expire with the month
    let month = month_or_current(body.month)?;
    body.month = Some(month);

    let cache_key = format!("analysis:{}", serde_json::to_string(&body)?);
    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for analysis");
        return Ok(Json(cached));
    }

    let language = body.language.unwrap_or_default();
    let location = resolve_body_location(&body)?;

    let mut request = match &location {
        Some(loc) => AnalysisRequest::for_location(loc, month, language),
        None => AnalysisRequest {
            month,
            language,
            ..Default::default()
        },
    };
    if body.soil.is_some() {
        request.soil = body.soil.clone();
    }
    request.weather = body.weather;
    request.insights = AgriculturalInsights::from_days(&body.forecast);

    let analysis = analyze(&state.crops, &request);
    let result = serde_json::json!({
        "location": location,
        "insights": request.insights,
        "analysis": analysis,
    });

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

fn resolve_body_location(body: &AnalysisBody) -> Result<Option<ResolvedLocation>, AppError> {
    if let Some(pin) = &body.pincode {
        return Ok(Some(location::resolve_pincode(pin)?));
    }
    if let Some(name) = &body.district {
        return Ok(Some(location::require_district(name)?.to_location()));
    }
    if let (Some(lat), Some(lon)) = (body.lat, body.lon) {
        return Ok(Some(location::resolve_coordinates(lat, lon)?));
    }
    Ok(None)
}

#[derive(Debug, Deserialize)]
struct SoilQuery {
    month: Option<u32>,
    lang: Option<String>,
}

/// District soil profile, soil-type info, crop groupings and management cards
///
/// GET /api/soil/:district?month=7&lang=kn
async fn get_soil(
    Path(district): Path<String>,
    Query(params): Query<SoilQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let month = month_or_current(params.month)?;
    let lang = params
        .lang
        .as_deref()
        .and_then(Language::from_code)
        .unwrap_or_default();

    let district = location::require_district(&district)?;
    let sample = soil_profile_for(Some(&district.key), district.lat, district.lon, month);
    let info = soil_type_info(&sample.texture);

    Ok(Json(serde_json::json!({
        "district": district,
        "month": month,
        "soil": sample,
        "soil_type": info.map(|i| serde_json::json!({
            "name": i.name(lang),
            "description": i.description(lang),
        })),
        "crops": crops_for_soil(&sample.texture),
        "recommendations": soil_recommendations(&sample, lang),
    })))
}

async fn get_pincode(Path(pin): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let resolved = location::resolve_pincode(&pin)?;
    Ok(Json(serde_json::to_value(resolved)?))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn month_or_current(month: Option<u32>) -> Result<u32, AppError> {
    match month {
        Some(m) => Ok(validate_month(m)?),
        None => Ok(chrono::Local::now().month()),
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<AdvisorError> for AppError {
    fn from(err: AdvisorError) -> Self {
        match err {
            AdvisorError::UnknownCrop(_) | AdvisorError::UnknownDistrict(_) => {
                AppError::NotFound(err.to_string())
            }
            AdvisorError::InvalidPincode(_)
            | AdvisorError::OutsideKarnataka(..)
            | AdvisorError::InvalidMonth(_) => {
                AppError::BadRequest(err.to_string())
            }
            AdvisorError::InvalidDatabase(_) | AdvisorError::Json(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
