//! Recommendation sentences and crop management advice.

use serde::{Deserialize, Serialize};

use crate::crops::{CropDefinition, Level};
use crate::i18n::{pick, Language};
use crate::suitability::Rating;

/// Number of pests named in the pest-monitoring advice
const NAMED_PESTS: usize = 2;

/// Suitable crops needed before diversification is advised
const DIVERSIFY_MIN_SUITABLE: usize = 3;

/// One-sentence verdict for a crop at a given rating
pub fn recommendation_text(crop: &CropDefinition, rating: Rating, lang: Language) -> String {
    let name = crop.name.get(lang);
    match (lang, rating) {
        (Language::En, Rating::Excellent) => {
            format!("Highly recommended! {} is perfectly suited for current conditions.", name)
        }
        (Language::En, Rating::Good) => {
            format!("Recommended. {} should perform well with proper management.", name)
        }
        (Language::En, Rating::Fair) => {
            format!("Consider with caution. {} may face some challenges.", name)
        }
        (Language::En, Rating::Poor) => {
            format!("Not recommended. {} is not suitable for current conditions.", name)
        }
        (Language::Kn, Rating::Excellent) => {
            format!("ಹೆಚ್ಚು ಶಿಫಾರಸು! {} ಪ್ರಸ್ತುತ ಪರಿಸ್ಥಿತಿಗಳಿಗೆ ಸಂಪೂರ್ಣವಾಗಿ ಸೂಕ್ತವಾಗಿದೆ.", name)
        }
        (Language::Kn, Rating::Good) => {
            format!("ಶಿಫಾರಸು. {} ಸರಿಯಾದ ನಿರ್ವಹಣೆಯೊಂದಿಗೆ ಚೆನ್ನಾಗಿ ಬೆಳೆಯುತ್ತದೆ.", name)
        }
        (Language::Kn, Rating::Fair) => {
            format!("ಎಚ್ಚರಿಕೆಯೊಂದಿಗೆ ಪರಿಗಣಿಸಿ. {} ಕೆಲವು ಸವಾಲುಗಳನ್ನು ಎದುರಿಸಬಹುದು.", name)
        }
        (Language::Kn, Rating::Poor) => {
            format!("ಶಿಫಾರಸು ಮಾಡಲಾಗುವುದಿಲ್ಲ. {} ಪ್ರಸ್ತುತ ಪರಿಸ್ಥಿತಿಗಳಿಗೆ ಸೂಕ್ತವಲ್ಲ.", name)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementAdvice {
    pub irrigation: String,
    pub fertilization: String,
    pub pest_management: String,
    pub general: String,
}

pub fn management_advice(crop: &CropDefinition, rating: Rating, lang: Language) -> ManagementAdvice {
    ManagementAdvice {
        irrigation: irrigation_advice(crop.water_requirement, lang).to_string(),
        fertilization: fertilization_advice(rating, lang).to_string(),
        pest_management: pest_advice(crop, lang),
        general: general_advice(rating, lang).to_string(),
    }
}

fn irrigation_advice(water: Level, lang: Language) -> &'static str {
    match water {
        Level::VeryHigh => pick(
            lang,
            "Ensure continuous water supply. Monitor soil moisture daily.",
            "ನಿರಂತರ ನೀರಿನ ಪೂರೈಕೆಯನ್ನು ಖಚಿತಪಡಿಸಿ. ಮಣ್ಣಿನ ತೇವಾಂಶವನ್ನು ದೈನಂದಿನ ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ.",
        ),
        Level::High => pick(
            lang,
            "Maintain regular irrigation schedule. Check soil moisture frequently.",
            "ನಿಯಮಿತ ನೀರಾವರಿ ವೇಳಾಪಟ್ಟಿಯನ್ನು ನಿರ್ವಹಿಸಿ. ಮಣ್ಣಿನ ತೇವಾಂಶವನ್ನು ಆಗಾಗ್ಗೆ ಪರಿಶೀಲಿಸಿ.",
        ),
        Level::Medium => pick(
            lang,
            "Moderate irrigation required. Water when soil surface feels dry.",
            "ಮಧ್ಯಮ ನೀರಾವರಿ ಅಗತ್ಯ. ಮಣ್ಣಿನ ಮೇಲ್ಮೈ ಒಣಗಿದಾಗ ನೀರು ಕೊಡಿ.",
        ),
        Level::Low => pick(
            lang,
            "Minimal irrigation needed. Water only during dry spells.",
            "ಕನಿಷ್ಠ ನೀರಾವರಿ ಅಗತ್ಯ. ಒಣ ಅವಧಿಯಲ್ಲಿ ಮಾತ್ರ ನೀರು ಕೊಡಿ.",
        ),
    }
}

fn fertilization_advice(rating: Rating, lang: Language) -> &'static str {
    if rating.is_suitable() {
        pick(
            lang,
            "Apply balanced NPK fertilizer as per recommended dose.",
            "ಸಂಪೂರ್ಣ NPK ಗೊಬ್ಬರವನ್ನು ಶಿಫಾರಸಿನ ಪ್ರಮಾಣದಲ್ಲಿ ಅನ್ವಯಿಸಿ.",
        )
    } else {
        pick(
            lang,
            "Determine fertilizer dose after soil testing.",
            "ಮಣ್ಣಿನ ಪರೀಕ್ಷೆಯ ನಂತರ ಗೊಬ್ಬರ ಪ್ರಮಾಣವನ್ನು ನಿರ್ಧರಿಸಿ.",
        )
    }
}

fn pest_advice(crop: &CropDefinition, lang: Language) -> String {
    let pests = crop
        .pests
        .iter()
        .take(NAMED_PESTS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    match lang {
        Language::En => format!("Monitor regularly for pests like {}.", pests),
        Language::Kn => format!("{} ನಂತಹ ಕೀಟಗಳನ್ನು ನಿಯಮಿತವಾಗಿ ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ.", pests),
    }
}

fn general_advice(rating: Rating, lang: Language) -> &'static str {
    match rating {
        Rating::Excellent => pick(
            lang,
            "Excellent conditions. Use quality seeds and follow recommended spacing.",
            "ಅತ್ಯುತ್ತಮ ಪರಿಸ್ಥಿತಿಗಳು. ಗುಣಮಟ್ಟದ ಬೀಜಗಳನ್ನು ಬಳಸಿ ಮತ್ತು ಶಿಫಾರಸಿನ ಅಂತರದಲ್ಲಿ ಬಿತ್ತಿ.",
        ),
        Rating::Good => pick(
            lang,
            "Good conditions. Monitor regularly and provide appropriate care.",
            "ಒಳ್ಳೆಯ ಪರಿಸ್ಥಿತಿಗಳು. ನಿಯಮಿತ ಮೇಲ್ವಿಚಾರಣೆ ಮಾಡಿ ಮತ್ತು ಸೂಕ್ತ ಆರೈಕೆ ತೆಗೆದುಕೊಳ್ಳಿ.",
        ),
        Rating::Fair | Rating::Poor => pick(
            lang,
            "Challenging conditions. Consider alternative crop options.",
            "ಸವಾಲಿನ ಪರಿಸ್ಥಿತಿಗಳು. ಇತರ ಬೆಳೆ ಆಯ್ಕೆಗಳನ್ನು ಪರಿಗಣಿಸಿ.",
        ),
    }
}

/// Spread risk when enough crops are suitable, otherwise work on the soil
pub fn diversification_advice(suitable_count: usize, lang: Language) -> &'static str {
    if suitable_count >= DIVERSIFY_MIN_SUITABLE {
        pick(
            lang,
            "Consider growing multiple crops to reduce risk.",
            "ಅಪಾಯವನ್ನು ಕಡಿಮೆ ಮಾಡಲು ಬಹು ಬೆಳೆಗಳನ್ನು ಬೆಳೆಯುವುದನ್ನು ಪರಿಗಣಿಸಿ.",
        )
    } else {
        pick(
            lang,
            "Limited options. Focus on soil health improvement.",
            "ಸೀಮಿತ ಆಯ್ಕೆಗಳು. ಮಣ್ಣಿನ ಆರೋಗ್ಯ ಸುಧಾರಣೆಯ ಮೇಲೆ ಗಮನ ಹರಿಸಿ.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crops::CropDatabase;

    #[test]
    fn test_recommendation_text_uses_localised_name() {
        let ragi = CropDatabase::builtin().get("ragi").unwrap();
        assert_eq!(
            recommendation_text(ragi, Rating::Good, Language::En),
            "Recommended. Finger Millet should perform well with proper management."
        );
        assert!(recommendation_text(ragi, Rating::Poor, Language::Kn).contains("ರಾಗಿ"));
    }

    #[test]
    fn test_management_advice() {
        let sugarcane = CropDatabase::builtin().get("sugarcane").unwrap();
        let advice = management_advice(sugarcane, Rating::Fair, Language::En);
        assert_eq!(advice.irrigation, "Ensure continuous water supply. Monitor soil moisture daily.");
        assert_eq!(advice.fertilization, "Determine fertilizer dose after soil testing.");
        assert_eq!(advice.pest_management, "Monitor regularly for pests like borer, aphid.");
        assert_eq!(advice.general, "Challenging conditions. Consider alternative crop options.");

        let excellent = management_advice(sugarcane, Rating::Excellent, Language::En);
        assert_eq!(excellent.fertilization, "Apply balanced NPK fertilizer as per recommended dose.");
    }

    #[test]
    fn test_diversification_threshold() {
        assert_eq!(diversification_advice(3, Language::En), "Consider growing multiple crops to reduce risk.");
        assert_eq!(diversification_advice(2, Language::En), "Limited options. Focus on soil health improvement.");
    }
}
