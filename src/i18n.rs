//! Bilingual (English / Kannada) text support.

use serde::{Deserialize, Serialize};

/// Display language for generated text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Kn,
}

impl Language {
    /// Parse a language code ("en", "kn"); anything else is `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::En),
            "kn" | "kannada" => Some(Language::Kn),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Kn => "kn",
        }
    }
}

/// A piece of text available in both supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub kn: String,
}

impl Bilingual {
    pub fn new(en: impl Into<String>, kn: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            kn: kn.into(),
        }
    }

    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Kn => &self.kn,
        }
    }
}

/// Pick between two static strings by language
#[inline]
pub(crate) fn pick(lang: Language, en: &'static str, kn: &'static str) -> &'static str {
    match lang {
        Language::En => en,
        Language::Kn => kn,
    }
}
