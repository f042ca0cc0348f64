use serde::{Deserialize, Serialize};

use crate::layout::headings::HeadingRules;

/// The language whose rendering the structural heuristics apply to. The
/// heading rules only work reliably on a Roman-alphabet transliteration; every
/// other edition renders verbatim.
pub const REFERENCE_LANGUAGE: &str = "english";

/// One selectable edition of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    /// Opaque key, also the file stem of the edition in a library directory.
    pub id: String,
    /// English name, e.g. "Malayalam".
    pub name: String,
    /// Name as shown in the language picker, e.g. "മലയാളം (Malayalam)".
    pub display_name: String,
}

impl LanguageOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// Editions bundled with the reader, reference language first.
pub fn builtin_languages() -> Vec<LanguageOption> {
    vec![
        LanguageOption::new("english", "English", "English"),
        LanguageOption::new("malayalam", "Malayalam", "മലയാളം (Malayalam)"),
        LanguageOption::new("devanagari", "Devanagari", "देवनागरी (Devanagari)"),
        LanguageOption::new("bengali", "Bengali", "বাংলা (Bengali)"),
        LanguageOption::new("tamil", "Tamil", "தமிழ் (Tamil)"),
        LanguageOption::new("telugu", "Telugu", "తెలుగు (Telugu)"),
        LanguageOption::new("gujarati", "Gujarati", "ગુજરાતી (Gujarati)"),
        LanguageOption::new("kannada", "Kannada", "ಕನ್ನಡ (Kannada)"),
        LanguageOption::new("odia", "Odia", "ଓଡ଼ିଆ (Odia)"),
        LanguageOption::new("assamese", "Assamese", "অসমীয়া (Assamese)"),
        LanguageOption::new("punjabi", "Punjabi", "ਪੰਜਾਬੀ (Punjabi)"),
        LanguageOption::new("sinhala", "Sinhala", "සිංහල (Sinhala)"),
        LanguageOption::new("grantha", "Grantha", "Grantha (Grantha Script)"),
    ]
}

/// Look up a bundled edition by its id.
pub fn find_language(id: &str) -> Option<LanguageOption> {
    builtin_languages().into_iter().find(|l| l.id == id)
}

/// How a language's document is analysed for display.
#[derive(Debug, Clone)]
pub enum RenderStrategy {
    /// Heading heuristics plus verse-marker spacing.
    StructuralAnalysis(HeadingRules),
    /// Lines pass through untouched; only blank lines get handling.
    Verbatim,
}

impl RenderStrategy {
    /// Strategy for a language key: structural analysis for the reference
    /// language, verbatim for everything else.
    pub fn for_language(id: &str) -> Self {
        if id == REFERENCE_LANGUAGE {
            Self::StructuralAnalysis(HeadingRules::reference())
        } else {
            Self::Verbatim
        }
    }
}
