use serde::{Deserialize, Serialize};

use super::markers::EndingMarker;

/// Category of a single source line, derived during classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// A structural section label (invocation, speaker attribution).
    Heading {
        /// Text to display, already case-adjusted by the matching rule.
        display: String,
    },
    /// Empty or whitespace-only line.
    Blank,
    /// A verse line, tagged with its trailing marker.
    Content { marker: EndingMarker },
}

/// Vertical spacing attributes of one rendered line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub margin_top: bool,
    pub margin_bottom: bool,
}

/// Role of a line in the render plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderRole {
    /// Section label, rendered distinctly from verse content.
    Heading,
    /// Fixed-height gap standing in for an intentional blank source line.
    Spacer,
    /// Verse content with its trailing-marker tag.
    Content { marker: EndingMarker },
}

/// Display-ready representation of one source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLine {
    /// Index of the source line this was derived from.
    pub index: usize,
    /// Text to display. Untrimmed source text for content lines, the matched
    /// display form for headings, empty for spacers.
    pub text: String,
    pub role: RenderRole,
    pub spacing: Spacing,
    /// Headings carry an emphasis flag for the renderer.
    pub emphasis: bool,
}

/// Ordered render plan for one document, consumed by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub lines: Vec<RenderLine>,
}

impl RenderPlan {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
