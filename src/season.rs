//! Agricultural Season Calendar
//!
//! Maps calendar months onto the three Indian cropping seasons and provides
//! the month arithmetic used by the timing factor:
//! - Kharif: June–October (monsoon)
//! - Rabi: November–March (post-monsoon / winter)
//! - Zaid: April–May (summer)
//!
//! Each season also has a calendar entry with its planting and harvest
//! periods and what it needs from the weather.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};
use crate::i18n::{pick, Language};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
}

impl Season {
    /// Season for a calendar month (1 = January)
    ///
    /// Months outside 1..=12 fall through to Zaid; callers validate first.
    pub fn from_month(month: u32) -> Self {
        match month {
            6..=10 => Season::Kharif,
            11 | 12 | 1..=3 => Season::Rabi,
            _ => Season::Zaid,
        }
    }

    pub fn all() -> &'static [Season] {
        &[Season::Kharif, Season::Rabi, Season::Zaid]
    }

    /// Lowercase key, as used in the crop tables
    pub fn key(&self) -> &'static str {
        match self {
            Season::Kharif => "kharif",
            Season::Rabi => "rabi",
            Season::Zaid => "zaid",
        }
    }

    pub fn display_name(&self, lang: Language) -> &'static str {
        match self {
            Season::Kharif => pick(lang, "Kharif", "ಮುಂಗಾರು"),
            Season::Rabi => pick(lang, "Rabi", "ಹಿಂಗಾರು"),
            Season::Zaid => pick(lang, "Zaid", "ಬೇಸಿಗೆ"),
        }
    }

    pub fn calendar(&self) -> &'static SeasonInfo {
        match self {
            Season::Kharif => &SEASON_CALENDAR[0],
            Season::Rabi => &SEASON_CALENDAR[1],
            Season::Zaid => &SEASON_CALENDAR[2],
        }
    }
}

/// Planting window, harvest window and weather needs of a season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeasonInfo {
    pub season: Season,
    pub planting_en: &'static str,
    pub planting_kn: &'static str,
    pub harvest_en: &'static str,
    pub harvest_kn: &'static str,
    pub weather_en: &'static str,
    pub weather_kn: &'static str,
}

impl SeasonInfo {
    pub fn planting_period(&self, lang: Language) -> &'static str {
        pick(lang, self.planting_en, self.planting_kn)
    }

    pub fn harvest_period(&self, lang: Language) -> &'static str {
        pick(lang, self.harvest_en, self.harvest_kn)
    }

    pub fn weather_requirements(&self, lang: Language) -> &'static str {
        pick(lang, self.weather_en, self.weather_kn)
    }
}

const SEASON_CALENDAR: [SeasonInfo; 3] = [
    SeasonInfo {
        season: Season::Kharif,
        planting_en: "June-July",
        planting_kn: "ಜೂನ್-ಜುಲೈ",
        harvest_en: "October-December",
        harvest_kn: "ಅಕ್ಟೋಬರ್-ಡಿಸೆಂಬರ್",
        weather_en: "Monsoon rains essential",
        weather_kn: "ಮುಂಗಾರು ಮಳೆ ಅತ್ಯಗತ್ಯ",
    },
    SeasonInfo {
        season: Season::Rabi,
        planting_en: "November-December",
        planting_kn: "ನವೆಂಬರ್-ಡಿಸೆಂಬರ್",
        harvest_en: "March-April",
        harvest_kn: "ಮಾರ್ಚ್-ಏಪ್ರಿಲ್",
        weather_en: "Cool and dry weather",
        weather_kn: "ತಂಪಾದ ಮತ್ತು ಒಣ ಹವಾಮಾನ",
    },
    SeasonInfo {
        season: Season::Zaid,
        planting_en: "March-April",
        planting_kn: "ಮಾರ್ಚ್-ಏಪ್ರಿಲ್",
        harvest_en: "June-July",
        harvest_kn: "ಜೂನ್-ಜುಲೈ",
        weather_en: "Irrigation required",
        weather_kn: "ನೀರಾವರಿ ಅಗತ್ಯ",
    },
];

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Reject months outside 1..=12
pub fn validate_month(month: u32) -> Result<u32> {
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        Err(AdvisorError::InvalidMonth(month))
    }
}

/// Circular distance between two months (0..=6), so December and January are 1 apart
pub fn month_distance(a: u32, b: u32) -> u32 {
    let diff = a.abs_diff(b) % 12;
    diff.min(12 - diff)
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_KN: [&str; 12] = [
    "ಜನ", "ಫೆಬ್", "ಮಾರ್ಚ್", "ಏಪ್ರಿ", "ಮೇ", "ಜೂನ್", "ಜುಲೈ", "ಆಗ", "ಸೆಪ್", "ಅಕ್ಟೋ", "ನವೆಂ", "ಡಿಸೆಂ",
];

/// Short month name; `None` for months outside 1..=12
pub fn month_name(month: u32, lang: Language) -> Option<&'static str> {
    let idx = month.checked_sub(1)? as usize;
    match lang {
        Language::En => MONTHS_EN.get(idx).copied(),
        Language::Kn => MONTHS_KN.get(idx).copied(),
    }
}
