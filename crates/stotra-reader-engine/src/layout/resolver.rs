use super::classify::LineClass;
use super::markers::{EndingMarker, ending_marker};
use super::types::{LineCategory, RenderLine, RenderRole, Spacing};

/// Derives per-line display attributes from the classified array.
///
/// Single forward pass with one line of lookahead/lookback, plus a bounded
/// backward scan for `VerseEnd` lines. Neighbor markers are recomputed from the
/// neighbors' trimmed text, independent of their category, so a heading ending
/// in a danda still counts for its neighbor's rule.
pub fn resolve_spacing(lines: &[LineClass]) -> Vec<RenderLine> {
    let mut out = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        match &line.category {
            LineCategory::Blank => {
                // Intentional paragraph breaks stay visible as fixed-height
                // spacers, never suppressed or merged with neighbors.
                out.push(RenderLine {
                    index: line.index,
                    text: String::new(),
                    role: RenderRole::Spacer,
                    spacing: Spacing::default(),
                    emphasis: false,
                });
            }
            LineCategory::Heading { display } => {
                // A heading whose display text is empty is elided entirely.
                if display.is_empty() {
                    continue;
                }
                out.push(RenderLine {
                    index: line.index,
                    text: display.clone(),
                    role: RenderRole::Heading,
                    spacing: Spacing {
                        margin_top: true,
                        margin_bottom: true,
                    },
                    emphasis: true,
                });
            }
            LineCategory::Content { marker } => {
                out.push(RenderLine {
                    index: line.index,
                    text: line.raw.clone(),
                    role: RenderRole::Content { marker: *marker },
                    spacing: content_spacing(lines, i, *marker),
                    emphasis: false,
                });
            }
        }
    }

    out
}

fn content_spacing(lines: &[LineClass], i: usize, marker: EndingMarker) -> Spacing {
    let prev = neighbor_marker(lines, i.checked_sub(1));
    let next = neighbor_marker(lines, Some(i + 1));

    match marker {
        EndingMarker::StanzaEnd => Spacing {
            margin_top: prev != EndingMarker::HalfVerseEnd,
            margin_bottom: true,
        },
        EndingMarker::HalfVerseEnd => Spacing {
            margin_top: true,
            margin_bottom: !matches!(next, EndingMarker::StanzaEnd | EndingMarker::VerseEnd),
        },
        EndingMarker::VerseEnd => Spacing {
            margin_top: prev != EndingMarker::HalfVerseEnd
                && (i == 0 || follows_real_content(lines, i)),
            margin_bottom: true,
        },
        EndingMarker::None => Spacing::default(),
    }
}

/// Marker of a neighboring line, recomputed from its trimmed text. Out of
/// bounds counts as no marker.
fn neighbor_marker(lines: &[LineClass], index: Option<usize>) -> EndingMarker {
    index
        .and_then(|i| lines.get(i))
        .map(|line| ending_marker(&line.trimmed))
        .unwrap_or(EndingMarker::None)
}

/// Backward scan that skips headings: true when the nearest preceding
/// non-heading line exists and is content rather than blank.
fn follows_real_content(lines: &[LineClass], i: usize) -> bool {
    lines[..i]
        .iter()
        .rev()
        .find(|line| !matches!(line.category, LineCategory::Heading { .. }))
        .is_some_and(|line| matches!(line.category, LineCategory::Content { .. }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::VerseLineClassifier;
    use crate::models::language::RenderStrategy;
    use pretty_assertions::assert_eq;

    fn classify_all(lines: &[&str]) -> Vec<LineClass> {
        let strategy = RenderStrategy::for_language("english");
        let classifier = VerseLineClassifier::new(&strategy);
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| classifier.classify(i, l))
            .collect()
    }

    fn spacing_of(rendered: &[RenderLine], index: usize) -> Spacing {
        rendered.iter().find(|r| r.index == index).unwrap().spacing
    }

    #[test]
    fn stanza_end_after_half_verse_gets_no_top_margin() {
        let classes = classify_all(&["oṁ namo bhagavate ।", "vāsudevāya dhīmahi ॥ 1 ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 1),
            Spacing {
                margin_top: false,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn stanza_end_after_plain_content_gets_top_margin() {
        let classes = classify_all(&["viśvaṁ viṣṇur vaṣaṭkāro", "bhūtakṛd bhūtabhṛt ॥ 2 ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 1),
            Spacing {
                margin_top: true,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn half_verse_before_stanza_end_keeps_top_margin_but_not_bottom() {
        let classes = classify_all(&["yo viṣṇur mahādyutiḥ ।", "tam namāmi hariṁ param ॥ 3 ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 0),
            Spacing {
                margin_top: true,
                margin_bottom: false
            }
        );
    }

    #[test]
    fn half_verse_before_plain_content_gets_both_margins() {
        let classes = classify_all(&["yo viṣṇur mahādyutiḥ ।", "namāmi bhaktavatsalam"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 0),
            Spacing {
                margin_top: true,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn verse_end_on_first_line_gets_top_margin() {
        let classes = classify_all(&["śāntākāraṁ bhujagaśayanam ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 0),
            Spacing {
                margin_top: true,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn verse_end_backward_scan_skips_headings() {
        // Content, then a heading, then the verse end: the scan must look past
        // the heading and find the content line.
        let classes = classify_all(&[
            "viśvaṁ viṣṇur vaṣaṭkāro",
            "Dhyānam",
            "śāntākāraṁ bhujagaśayanam ॥",
        ]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 2),
            Spacing {
                margin_top: true,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn verse_end_after_blank_gets_no_top_margin() {
        let classes = classify_all(&["viśvaṁ viṣṇur vaṣaṭkāro", "", "śāntākāraṁ ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 2),
            Spacing {
                margin_top: false,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn verse_end_with_only_headings_before_it_gets_no_top_margin() {
        let classes = classify_all(&["Dhyānam", "śāntākāraṁ bhujagaśayanam ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(
            spacing_of(&rendered, 1),
            Spacing {
                margin_top: false,
                margin_bottom: true
            }
        );
    }

    #[test]
    fn unmarked_content_gets_no_margins() {
        let classes = classify_all(&["oṁ namo bhagavate", "vāsudevāya"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(spacing_of(&rendered, 0), Spacing::default());
        assert_eq!(spacing_of(&rendered, 1), Spacing::default());
    }

    #[test]
    fn blank_between_stanzas_renders_as_spacer() {
        let classes = classify_all(&["dhīmahi ॥ 1 ॥", "", "prachodayāt ॥ 2 ॥"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[1].role, RenderRole::Spacer);
        assert_eq!(rendered[1].index, 1);
    }

    #[test]
    fn heading_margins_are_fixed_and_emphasized() {
        let classes = classify_all(&["Dhyānam"]);
        let rendered = resolve_spacing(&classes);

        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].role, RenderRole::Heading);
        assert!(rendered[0].emphasis);
        assert_eq!(
            rendered[0].spacing,
            Spacing {
                margin_top: true,
                margin_bottom: true
            }
        );
    }
}
