//! Markdown rendering of a crop analysis.
//!
//! Layout: title, season line and calendar, weather alerts when a forecast was
//! given, ranking table, then one section per leading crop with factor scores,
//! timing, risks and management advice.

use super::{CropAnalysis, CropRecommendation};
use crate::i18n::{pick, Language};

/// Crops that get a detailed section
const DETAILED_CROPS: usize = 5;

pub fn render_markdown(analysis: &CropAnalysis, lang: Language) -> String {
    let mut sections = Vec::new();

    let title = pick(lang, "Crop Suitability Analysis", "ಬೆಳೆ ಸೂಕ್ತತೆ ವಿಶ್ಲೇಷಣೆ");
    match &analysis.location {
        Some(location) => sections.push(format!("# {} - {}", title, location)),
        None => sections.push(format!("# {}", title)),
    }
    sections.push(String::new());

    sections.push(format!(
        "**{}**: {} | **{}**: {}",
        pick(lang, "Season", "ಋತು"),
        analysis.season.display_name(lang),
        pick(lang, "Top Options", "ಅತ್ಯುತ್ತಮ ಆಯ್ಕೆಗಳು"),
        analysis.seasonal.suitable.len()
    ));
    let calendar = &analysis.calendar;
    sections.push(format!(
        "**{}**: {} | **{}**: {} | **{}**: {}",
        pick(lang, "Planting Period", "ಬಿತ್ತನೆ ಅವಧಿ"),
        calendar.planting_period,
        pick(lang, "Harvest Period", "ಕೊಯ್ಲು ಅವಧಿ"),
        calendar.harvest_period,
        pick(lang, "Weather Requirements", "ಹವಾಮಾನ ಅವಶ್ಯಕತೆಗಳು"),
        calendar.weather_requirements
    ));
    sections.push(String::new());

    if !analysis.weather_alerts.is_empty() {
        sections.push(format!("**{}**", pick(lang, "Weather Alerts", "ಹವಾಮಾನ ಎಚ್ಚರಿಕೆಗಳು")));
        for alert in &analysis.weather_alerts {
            sections.push(format!(
                "- {}: {}",
                alert.title.get(lang),
                alert.description.get(lang)
            ));
        }
        sections.push(String::new());
    }

    sections.push(format!(
        "| # | {} | {} | {} |",
        pick(lang, "Crop", "ಬೆಳೆ"),
        pick(lang, "Score", "ಅಂಕ"),
        pick(lang, "Rating", "ಮೌಲ್ಯಮಾಪನ")
    ));
    sections.push("|---|---|---|---|".to_string());
    for (i, rec) in analysis.recommendations.iter().enumerate() {
        sections.push(format!(
            "| {} | {} | {}% | {} |",
            i + 1,
            rec.crop_name,
            rec.suitability.percent(),
            rec.suitability.rating.display_text(lang)
        ));
    }

    for (i, rec) in analysis.top(DETAILED_CROPS).iter().enumerate() {
        sections.push(String::new());
        sections.push(crop_section(i + 1, rec, lang));
    }

    sections.push(String::new());
    sections.push(format!("> {}", analysis.seasonal.diversification_advice));
    sections.push(String::new());
    sections.join("\n")
}

fn crop_section(rank: usize, rec: &CropRecommendation, lang: Language) -> String {
    let mut lines = Vec::new();

    lines.push(format!("## {}. {} ({}%)", rank, rec.crop_name, rec.suitability.percent()));
    lines.push(String::new());
    lines.push(rec.recommendation.clone());
    lines.push(String::new());

    for (key, factor) in rec.suitability.factors.iter() {
        lines.push(format!("- {}: {}%", factor_label(key, lang), factor.score.round()));
    }
    lines.push(format!(
        "- {}: {}",
        pick(lang, "Planting", "ಬಿತ್ತನೆ"),
        rec.timing.planting.join(", ")
    ));
    lines.push(format!(
        "- {}: {}",
        pick(lang, "Harvest", "ಕೊಯ್ಲು"),
        rec.timing.harvest.join(", ")
    ));

    if !rec.risks.is_empty() {
        lines.push(String::new());
        lines.push(format!("**{}**", pick(lang, "Risks", "ಅಪಾಯಗಳು")));
        for risk in &rec.risks {
            lines.push(format!(
                "- [{}] {} ({})",
                risk.level.display_text(lang),
                risk.description,
                risk.mitigation
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!("**{}**", pick(lang, "Management Advice", "ನಿರ್ವಹಣಾ ಸಲಹೆ")));
    let advice = &rec.management;
    for item in [
        &advice.irrigation,
        &advice.fertilization,
        &advice.pest_management,
        &advice.general,
    ] {
        lines.push(format!("- {}", item));
    }

    lines.join("\n")
}

fn factor_label(key: &str, lang: Language) -> &'static str {
    match key {
        "season" => pick(lang, "Season", "ಋತು"),
        "soil" => pick(lang, "Soil", "ಮಣ್ಣು"),
        "weather" => pick(lang, "Weather", "ಹವಾಮಾನ"),
        _ => pick(lang, "Timing", "ಸಮಯ"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, AnalysisRequest};
    use crate::crops::CropDatabase;

    #[test]
    fn test_markdown_structure() {
        let mut request = AnalysisRequest::for_month(7);
        request.location = Some("Mandya".to_string());
        let analysis = analyze(CropDatabase::builtin(), &request);
        let md = render_markdown(&analysis, Language::En);

        assert!(md.starts_with("# Crop Suitability Analysis - Mandya\n"));
        assert!(md.contains("**Season**: Kharif | **Top Options**: 6"));
        assert!(md.contains("| 1 | Rice | 100% | Excellent |"));
        assert!(md.contains("| 8 | Wheat | 4% | Poor |"));
        assert_eq!(md.matches("\n## ").count(), 5);
        assert!(md.contains("- Planting: Jun, Jul, Aug"));
        assert!(md.contains(
            "**Planting Period**: June-July | **Harvest Period**: October-December | **Weather Requirements**: Monsoon rains essential"
        ));
        assert!(!md.contains("Weather Alerts"));
        assert!(md.ends_with("\n"));
    }

    #[test]
    fn test_markdown_lists_weather_alerts() {
        let mut request = AnalysisRequest::for_month(4);
        let hot = crate::weather::DailyObservation {
            temp: None,
            temp_max: 43.0,
            temp_min: 29.0,
            humidity: 25.0,
            precip: None,
            wind_speed: Some(12.0),
        };
        request.insights = crate::weather::AgriculturalInsights::from_days(&[hot]);
        let analysis = analyze(CropDatabase::builtin(), &request);
        let md = render_markdown(&analysis, Language::En);

        assert!(md.contains("**Weather Alerts**\n- Heat Stress Warning: "));
        assert!(md.contains("- Low Humidity Alert: "));
        assert!(md.contains("**Weather Requirements**: Irrigation required"));
    }

    #[test]
    fn test_markdown_kannada_labels() {
        let mut request = AnalysisRequest::for_month(12);
        request.language = Language::Kn;
        let analysis = analyze(CropDatabase::builtin(), &request);
        let md = render_markdown(&analysis, Language::Kn);
        assert!(md.starts_with("# ಬೆಳೆ ಸೂಕ್ತತೆ ವಿಶ್ಲೇಷಣೆ\n"));
        assert!(md.contains("ಹಿಂಗಾರು"));
        assert!(md.contains("ನಿರ್ವಹಣಾ ಸಲಹೆ"));
    }
}
