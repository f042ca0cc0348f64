use crate::models::language::RenderStrategy;

use super::markers::{EndingMarker, ending_marker};
use super::types::LineCategory;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of layout: each line is classified independently, without
/// reference to surrounding context. Neighbor-dependent spacing happens in
/// phase 2 over the whole classified array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// Index of the line in the source document.
    pub index: usize,
    /// Original line text with the terminator stripped.
    pub raw: String,
    /// Whitespace-trimmed text, the input to all classification rules.
    pub trimmed: String,
    pub category: LineCategory,
}

/// Classifies individual lines under a language's render strategy.
pub struct VerseLineClassifier<'a> {
    strategy: &'a RenderStrategy,
}

impl<'a> VerseLineClassifier<'a> {
    pub fn new(strategy: &'a RenderStrategy) -> Self {
        Self { strategy }
    }

    /// Classifies a line into a [`LineClass`].
    ///
    /// Blank lines are categorized first and are never evaluated against the
    /// heading rules. Under [`RenderStrategy::Verbatim`] every non-blank line
    /// is plain content with no marker tag.
    pub fn classify(&self, index: usize, raw: &str) -> LineClass {
        let raw = raw.trim_end_matches(['\r', '\n']);
        let trimmed = raw.trim();

        let category = if trimmed.is_empty() {
            LineCategory::Blank
        } else {
            match self.strategy {
                RenderStrategy::StructuralAnalysis(rules) => match rules.match_heading(trimmed) {
                    Some(display) => LineCategory::Heading { display },
                    None => LineCategory::Content {
                        marker: ending_marker(trimmed),
                    },
                },
                RenderStrategy::Verbatim => LineCategory::Content {
                    marker: EndingMarker::None,
                },
            }
        };

        LineClass {
            index,
            raw: raw.to_string(),
            trimmed: trimmed.to_string(),
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::headings::HeadingRules;

    fn structural() -> RenderStrategy {
        RenderStrategy::StructuralAnalysis(HeadingRules::reference())
    }

    #[test]
    fn blank_line_never_reaches_heading_rules() {
        let strategy = structural();
        let classifier = VerseLineClassifier::new(&strategy);
        assert_eq!(classifier.classify(0, "   \t ").category, LineCategory::Blank);
        assert_eq!(classifier.classify(1, "").category, LineCategory::Blank);
    }

    #[test]
    fn content_line_carries_its_marker() {
        let strategy = structural();
        let classifier = VerseLineClassifier::new(&strategy);
        let class = classifier.classify(3, "yo viṣṇur mahādyutiḥ ।");
        assert_eq!(
            class.category,
            LineCategory::Content {
                marker: EndingMarker::HalfVerseEnd
            }
        );
    }

    #[test]
    fn trailing_whitespace_does_not_hide_the_marker() {
        let strategy = structural();
        let classifier = VerseLineClassifier::new(&strategy);
        let class = classifier.classify(0, "oṁ namo bhagavate ।  ");
        assert_eq!(
            class.category,
            LineCategory::Content {
                marker: EndingMarker::HalfVerseEnd
            }
        );
        // Display text keeps the source form.
        assert_eq!(class.raw, "oṁ namo bhagavate ।  ");
    }

    #[test]
    fn verbatim_strategy_skips_heading_and_marker_analysis() {
        let strategy = RenderStrategy::Verbatim;
        let classifier = VerseLineClassifier::new(&strategy);
        let class = classifier.classify(0, "ॐ नमो भगवते वासुदेवाय ॥ 1 ॥");
        assert_eq!(
            class.category,
            LineCategory::Content {
                marker: EndingMarker::None
            }
        );
    }
}
