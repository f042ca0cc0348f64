//! # Verse Layout
//!
//! Two-phase layout of a scripture document.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` containing local facts (blank status, heading match, trailing
//!    verse marker) without reference to surrounding context.
//!
//! 2. **Spacing Resolution** (`resolver`): a single pass over the classified
//!    array derives per-line display attributes from each line's own marker and
//!    its neighbors' markers, and emits `RenderLine`s.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`LineCategory`, `RenderLine`, `RenderRole`, `Spacing`)
//! - **`markers`**: `EndingMarker` and trailing-punctuation detection
//! - **`headings`**: `HeadingRules` priority chain with an injectable header set
//! - **`classify`**: `VerseLineClassifier` produces `LineClass` for each line
//! - **`resolver`**: `resolve_spacing` turns the classified array into a render plan
//!
//! ## Key Invariants
//!
//! - Both phases are total functions of their input; no branch can fail.
//! - `RenderLine` indices preserve source order; the only omission is a heading
//!   whose display text is empty.
//! - The `VerseEnd` backward scan reads already-classified lines only, it never
//!   re-enters classification.

pub mod classify;
pub mod headings;
pub mod markers;
pub mod resolver;
pub mod types;

pub use classify::{LineClass, VerseLineClassifier};
pub use headings::HeadingRules;
pub use markers::{EndingMarker, ending_marker};
pub use resolver::resolve_spacing;
pub use types::{LineCategory, RenderLine, RenderPlan, RenderRole, Spacing};

use crate::models::document::RawDocument;
use crate::models::language::RenderStrategy;

/// Lay out a whole document under the given strategy.
///
/// Deterministic and stateless: the same document and strategy always produce
/// an identical render plan.
pub fn render_document(doc: &RawDocument, strategy: &RenderStrategy) -> RenderPlan {
    let classifier = VerseLineClassifier::new(strategy);

    let classes: Vec<LineClass> = doc
        .lines()
        .iter()
        .enumerate()
        .map(|(index, raw)| classifier.classify(index, raw))
        .collect();

    RenderPlan {
        lines: resolve_spacing(&classes),
    }
}
