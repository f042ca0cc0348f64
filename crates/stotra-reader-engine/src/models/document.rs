/// Immutable, ordered sequence of source lines for one edition of the text.
///
/// Insertion order is document order. A document is built once per language
/// selection and never mutated; re-selecting a language builds a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    lines: Vec<String>,
}

impl RawDocument {
    /// Build from newline-delimited text. Trailing `\r` is stripped per line so
    /// CRLF sources behave like LF sources.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self {
            lines: text
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect(),
        }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_produces_empty_document() {
        assert!(RawDocument::from_text("").is_empty());
    }

    #[test]
    fn crlf_terminators_are_stripped() {
        let doc = RawDocument::from_text("first ।\r\nsecond ॥ 1 ॥\r\n");
        assert_eq!(doc.lines(), ["first ।", "second ॥ 1 ॥", ""]);
    }

    #[test]
    fn interior_blank_lines_are_preserved() {
        let doc = RawDocument::from_text("a\n\nb");
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.lines()[1], "");
    }
}
