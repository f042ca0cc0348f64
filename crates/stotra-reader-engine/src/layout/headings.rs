use std::collections::HashSet;

/// Section headers and speaker attributions of the reference edition.
///
/// The source text carries no structural markup, so these curated strings are
/// the first and most reliable signal for heading detection.
const REFERENCE_HEADERS: [&str; 18] = [
    "Pūrva Pīṭhikā",
    "Srī Vaiśampāyana Uvācha",
    "Yudhiṣṭhira Uvācha",
    "Srī Bhīṣma Uvācha",
    "Pūrvanyāsaḥ",
    "Karanyāsaḥ",
    "Aṅganyāsaḥ",
    "Pañchapūja",
    "Dhyānam",
    "Uttara pīṭhikā",
    "phalaśrutiḥ",
    "Arjuna Uvācha",
    "Srī Bhagavān Uvācha",
    "Vyāsa Uvācha",
    "Pārvati Uvācha",
    "Iśvara Uvācha",
    "Brahmōvācha",
    "Sañjaya Uvācha",
];

/// Heading detection as an ordered rule chain, first match wins:
///
/// 1. exact match against the curated header set → displayed unmodified;
/// 2. single token containing a letter → displayed upper-cased;
/// 3. every word all upper-case (after stripping non-letter punctuation) →
///    displayed unmodified.
///
/// The curated set is injectable so other editions can supply their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRules {
    known_headers: HashSet<String>,
}

impl HeadingRules {
    pub fn new(known_headers: impl IntoIterator<Item = String>) -> Self {
        Self {
            known_headers: known_headers.into_iter().collect(),
        }
    }

    /// Rules seeded with the reference edition's curated headers.
    pub fn reference() -> Self {
        Self::new(REFERENCE_HEADERS.iter().map(|h| (*h).to_string()))
    }

    /// Returns the display text when the trimmed line is a heading.
    pub fn match_heading(&self, trimmed: &str) -> Option<String> {
        if self.known_headers.contains(trimmed) {
            return Some(trimmed.to_string());
        }

        // Rules 2 and 3 only apply to lines with at least one letter.
        if !trimmed.chars().any(char::is_alphabetic) {
            return None;
        }

        if !trimmed.chars().any(char::is_whitespace) {
            // Single compact token: a Sanskrit loan-word or title.
            return Some(trimmed.to_uppercase());
        }

        // Keep apostrophes and hyphens within words.
        let letters_only: String = trimmed
            .chars()
            .filter(|c| c.is_alphabetic() || c.is_whitespace() || matches!(c, '\'' | '-'))
            .collect();
        let mut words = letters_only.split_whitespace().peekable();
        if words.peek().is_some() && words.all(|word| word == word.to_uppercase()) {
            return Some(trimmed.to_string());
        }

        None
    }
}
