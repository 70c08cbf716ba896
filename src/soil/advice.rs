//! Soil Management Recommendations
//!
//! Four cards per sample: pH correction, organic matter, moisture management
//! and soil-type specific practice.

use serde::Serialize;

use super::profiles::soil_type_info;
use super::SoilSample;
use crate::crops::Level;
use crate::i18n::{pick, Language};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoilRecommendation {
    /// "ph", "organic_matter", "moisture", "soil_type"
    pub category: &'static str,
    pub title: String,
    pub text: String,
}

impl SoilRecommendation {
    fn new(category: &'static str, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            text: text.into(),
        }
    }
}

pub fn soil_recommendations(sample: &SoilSample, lang: Language) -> Vec<SoilRecommendation> {
    let mut cards = Vec::with_capacity(4);
    if let Some(ph) = sample.ph {
        cards.push(ph_recommendation(ph, lang));
    }
    cards.push(organic_matter_recommendation(sample.organic_matter, lang));
    cards.push(moisture_recommendation(sample.moisture, &sample.texture, lang));
    if let Some(card) = soil_type_recommendation(&sample.texture, lang) {
        cards.push(card);
    }
    cards
}

fn ph_recommendation(ph: f64, lang: Language) -> SoilRecommendation {
    if ph < 6.0 {
        SoilRecommendation::new(
            "ph",
            pick(lang, "Acidic Soil Management", "ಆಮ್ಲೀಯ ಮಣ್ಣಿನ ನಿರ್ವಹಣೆ"),
            pick(
                lang,
                "Add lime or dolomite to increase pH. Increase organic matter content through compost and green manure.",
                "ಸುಣ್ಣ ಅಥವಾ ಡೋಲೋಮೈಟ್ ಸೇರಿಸಿ pH ಹೆಚ್ಚಿಸಿ. ಸಾವಯವ ಪದಾರ್ಥಗಳನ್ನು ಹೆಚ್ಚಿಸಿ.",
            ),
        )
    } else if ph > 8.0 {
        SoilRecommendation::new(
            "ph",
            pick(lang, "Alkaline Soil Management", "ಕ್ಷಾರೀಯ ಮಣ್ಣಿನ ನಿರ್ವಹಣೆ"),
            pick(
                lang,
                "Add sulfur or organic acids to lower pH. Ensure proper drainage and regular irrigation to leach excess salts.",
                "ಗಂಧಕ ಅಥವಾ ಸಾವಯವ ಆಮ್ಲಗಳನ್ನು ಸೇರಿಸಿ pH ಕಡಿಮೆ ಮಾಡಿ. ನಿಯಮಿತ ಜಲಾಭಿಸಿಂಚನೆ ಮಾಡಿ.",
            ),
        )
    } else {
        SoilRecommendation::new(
            "ph",
            pick(lang, "Optimal pH Level", "ಸೂಕ್ತ pH ಮಟ್ಟ"),
            pick(
                lang,
                "Your soil pH is optimal for most crops. Maintain with regular organic matter additions.",
                "ನಿಮ್ಮ ಮಣ್ಣಿನ pH ಮಟ್ಟ ಸೂಕ್ತವಾಗಿದೆ. ಸಾವಯವ ಪದಾರ್ಥಗಳಿಂದ ನಿರ್ವಹಿಸಿ.",
            ),
        )
    }
}

fn organic_matter_recommendation(level: Level, lang: Language) -> SoilRecommendation {
    match level {
        Level::Low => SoilRecommendation::new(
            "organic_matter",
            pick(lang, "Increase Organic Matter", "ಸಾವಯವ ಪದಾರ್ಥ ಹೆಚ್ಚಿಸಿ"),
            pick(
                lang,
                "Add compost, green manure, and crop residues. Practice crop rotation with legumes to improve soil organic matter.",
                "ಕಂಪೋಸ್ಟ್, ಹಸಿರು ಗೊಬ್ಬರ, ಕೃಷಿ ತ್ಯಾಜ್ಯಗಳನ್ನು ಬಳಸಿ. ಬೆಳೆ ಸರದಿ ಅಳವಡಿಸಿ.",
            ),
        ),
        Level::High | Level::VeryHigh => SoilRecommendation::new(
            "organic_matter",
            pick(lang, "Excellent Organic Matter", "ಉತ್ತಮ ಸಾವಯವ ಪದಾರ್ಥ"),
            pick(
                lang,
                "Maintain current levels through continued organic practices. Encourage soil biological activity.",
                "ಪ್ರಸ್ತುತ ಮಟ್ಟವನ್ನು ನಿರ್ವಹಿಸಿ. ಮಣ್ಣಿನ ಜೈವಿಕ ಚಟುವಟಿಕೆಯನ್ನು ಪ್ರೋತ್ಸಾಹಿಸಿ.",
            ),
        ),
        Level::Medium => SoilRecommendation::new(
            "organic_matter",
            pick(lang, "Organic Matter Management", "ಸಾವಯವ ಪದಾರ್ಥ ನಿರ್ವಹಣೆ"),
            pick(
                lang,
                "Regularly add compost and maintain soil cover. Monitor soil health through regular testing.",
                "ನಿಯಮಿತವಾಗಿ ಕಂಪೋಸ್ಟ್ ಸೇರಿಸಿ. ಮಣ್ಣಿನ ಸ್ವಾಸ್ಥ್ಯವನ್ನು ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ.",
            ),
        ),
    }
}

fn moisture_recommendation(moisture: Level, texture: &str, lang: Language) -> SoilRecommendation {
    let is_black = texture.trim().eq_ignore_ascii_case("black");
    match moisture {
        Level::Low => SoilRecommendation::new(
            "moisture",
            pick(lang, "Moisture Management", "ತೇವಾಂಶ ನಿರ್ವಹಣೆ"),
            pick(
                lang,
                "Use drip irrigation for efficient water use. Apply mulching to reduce evaporation and conserve soil moisture.",
                "ಡ್ರಿಪ್ ಇರಿಗೇಷನ್ ಬಳಸಿ. ಮಲ್ಚಿಂಗ್ ಮಾಡಿ ನೀರಿನ ಆವಿಯಾಗುವಿಕೆ ಕಡಿಮೆ ಮಾಡಿ.",
            ),
        ),
        Level::High | Level::VeryHigh if is_black => SoilRecommendation::new(
            "moisture",
            pick(lang, "Drainage Management", "ಒಳಚರಂಡಿ ನಿರ್ವಹಣೆ"),
            pick(
                lang,
                "Ensure proper drainage to prevent waterlogging. Create raised beds for better water management in clay soils.",
                "ಉತ್ತಮ ಒಳಚರಂಡಿ ಖಚಿತಪಡಿಸಿ. ಬೆಳೆ ಬೆಡ್‌ಗಳನ್ನು ಮಾಡಿ ನೀರು ಸಂಗ್ರಹವಾಗುವುದನ್ನು ತಪ್ಪಿಸಿ.",
            ),
        ),
        _ => SoilRecommendation::new(
            "moisture",
            pick(lang, "Balanced Water Management", "ಸಮತೋಲಿತ ನೀರಾಧಾರ"),
            pick(
                lang,
                "Monitor soil moisture levels regularly. Water crops at optimal times for maximum efficiency.",
                "ಮಣ್ಣಿನ ತೇವಾಂಶವನ್ನು ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ. ಸೂಕ್ತ ಸಮಯದಲ್ಲಿ ನೀರು ಕೊಡಿ.",
            ),
        ),
    }
}

fn soil_type_recommendation(texture: &str, lang: Language) -> Option<SoilRecommendation> {
    let info = soil_type_info(texture)?;
    let text = match info.key {
        "red" => pick(
            lang,
            "Increase organic fertilizers. Add phosphorus and potash supplements. Focus on water conservation techniques.",
            "ಸಾವಯವ ಗೊಬ್ಬರ ಹೆಚ್ಚಿಸಿ. ಫಾಸ್ಫರಸ್ ಮತ್ತು ಪೋಟಾಶ್ ಸೇರಿಸಿ. ನೀರಿನ ನಿಯಂತ್ರಣ ಮುಖ್ಯ.",
        ),
        "black" => pick(
            lang,
            "Improve drainage systems. Monitor calcium and magnesium levels. Focus on soil structure improvement.",
            "ಒಳಚರಂಡಿ ಸುಧಾರಿಸಿ. ಕ್ಯಾಲ್ಸಿಯಂ ಮತ್ತು ಮೆಗ್ನೀಸಿಯಂ ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ. ಮಣ್ಣಿನ ರಚನೆ ಸುಧಾರಿಸಿ.",
        ),
        "laterite" => pick(
            lang,
            "Add lime to improve pH. Increase organic content. Supplement with micronutrients and trace elements.",
            "ಸುಣ್ಣ ಸೇರಿಸಿ pH ಸುಧಾರಿಸಿ. ಸಾವಯವ ಪದಾರ್ಥ ಹೆಚ್ಚಿಸಿ. ಮೈಕ್ರೊ ಪೋಷಕಾಂಶಗಳ ಪೂರಕತೆ.",
        ),
        _ => pick(
            lang,
            "Use balanced fertilization. Maintain soil fertility through proper nutrient management and crop rotation.",
            "ಸಮತೋಲಿತ ಗೊಬ್ಬರ ಬಳಕೆ. ಮಣ್ಣಿನ ಫಲವತ್ತತೆ ನಿರ್ವಹಿಸಿ. ಬೆಳೆ ಸರದಿ ಅಳವಡಿಸಿ.",
        ),
    };
    let title = match lang {
        Language::En => format!("{} Management", info.name_en),
        Language::Kn => format!("{} ನಿರ್ವಹಣೆ", info.name_kn),
    };
    Some(SoilRecommendation::new("soil_type", title, text))
}
