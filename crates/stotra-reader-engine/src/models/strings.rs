use std::collections::HashMap;

/// Fixed schema of UI label keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiLabel {
    Title,
    Subtitle,
    Languages,
    Play,
    Pause,
    PlaybackRate,
    FontSize,
    NowPlaying,
}

impl UiLabel {
    pub const ALL: [UiLabel; 8] = [
        UiLabel::Title,
        UiLabel::Subtitle,
        UiLabel::Languages,
        UiLabel::Play,
        UiLabel::Pause,
        UiLabel::PlaybackRate,
        UiLabel::FontSize,
        UiLabel::NowPlaying,
    ];

    /// Built-in default, the last resort when neither the selected language's
    /// table nor the reference table has the key.
    fn default_text(self) -> &'static str {
        match self {
            UiLabel::Title => "Vishnu Sahasranamam",
            UiLabel::Subtitle => "The Thousand Names of Vishnu",
            UiLabel::Languages => "Languages",
            UiLabel::Play => "Play",
            UiLabel::Pause => "Pause",
            UiLabel::PlaybackRate => "Speed",
            UiLabel::FontSize => "Text size",
            UiLabel::NowPlaying => "Recitation",
        }
    }
}

/// Label strings for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    labels: HashMap<UiLabel, String>,
}

impl StringTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (UiLabel, String)>) -> Self {
        Self {
            labels: pairs.into_iter().collect(),
        }
    }

    pub fn set(&mut self, label: UiLabel, text: impl Into<String>) {
        self.labels.insert(label, text.into());
    }

    pub fn get(&self, label: UiLabel) -> Option<&str> {
        self.labels.get(&label).map(String::as_str)
    }
}

/// Per-language UI string tables with reference-language fallback.
///
/// Lookup never fails: selected language's table, then the reference table,
/// then the built-in default.
#[derive(Debug, Clone)]
pub struct StringCatalog {
    reference: String,
    tables: HashMap<String, StringTable>,
}

impl StringCatalog {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            tables: HashMap::new(),
        }
    }

    pub fn insert(&mut self, language: impl Into<String>, table: StringTable) {
        self.tables.insert(language.into(), table);
    }

    pub fn label(&self, language: &str, label: UiLabel) -> &str {
        self.tables
            .get(language)
            .and_then(|table| table.get(label))
            .or_else(|| {
                self.tables
                    .get(&self.reference)
                    .and_then(|table| table.get(label))
            })
            .unwrap_or_else(|| label.default_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StringCatalog {
        let mut catalog = StringCatalog::new("english");
        catalog.insert(
            "english",
            StringTable::from_pairs([
                (UiLabel::Languages, "Languages".to_string()),
                (UiLabel::Play, "Play".to_string()),
            ]),
        );
        catalog.insert(
            "tamil",
            StringTable::from_pairs([(UiLabel::Languages, "மொழிகள்".to_string())]),
        );
        catalog
    }

    #[test]
    fn selected_language_table_wins() {
        assert_eq!(catalog().label("tamil", UiLabel::Languages), "மொழிகள்");
    }

    #[test]
    fn missing_key_falls_back_to_reference_table() {
        assert_eq!(catalog().label("tamil", UiLabel::Play), "Play");
    }

    #[test]
    fn missing_everywhere_falls_back_to_builtin_default() {
        assert_eq!(catalog().label("tamil", UiLabel::Pause), "Pause");
        // Even a language with no table at all resolves.
        assert_eq!(catalog().label("sinhala", UiLabel::Subtitle), "The Thousand Names of Vishnu");
    }
}
