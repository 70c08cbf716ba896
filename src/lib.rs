//! Crop Advisor
//!
//! Crop suitability scoring and recommendations for Karnataka districts.
//!
//! Modules:
//! - `crops/`: Crop definitions and the embedded crop database
//! - `suitability/`: Season / soil / weather / timing scorer
//! - `analysis/`: Ranked recommendations, risks, advice, markdown report
//! - `soil/`: District soil profiles and soil management advice
//! - `weather/`: Weather samples and agricultural weather insights
//! - `location`: District table, PIN-code resolution, nearest district
//! - `season`: Kharif / rabi / zaid calendar
//!
//! The HTTP API (`api_server`) is behind the `api` feature.

pub mod analysis;
pub mod crops;
pub mod error;
pub mod i18n;
pub mod location;
pub mod season;
pub mod soil;
pub mod suitability;
pub mod weather;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use analysis::{analyze, render_markdown, AnalysisRequest, CropAnalysis, CropRecommendation};
pub use crops::{CropDatabase, CropDefinition, Level};
pub use error::{AdvisorError, Result};
pub use i18n::{Bilingual, Language};
pub use location::{resolve, resolve_pincode, ResolvedLocation};
pub use season::{Season, SeasonInfo};
pub use soil::SoilSample;
pub use suitability::{score, Rating, SuitabilityResult};
pub use weather::{AgriculturalInsights, DailyObservation, WeatherSample};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState, ServerConfig};
