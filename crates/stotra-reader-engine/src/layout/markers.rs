use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Single danda, marking the midpoint of a verse couplet.
pub const HALF_VERSE_MARK: char = '।';
/// Double danda, closing a verse unit.
pub const FULL_VERSE_MARK: char = '॥';

/// Classification of a line's trailing verse punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndingMarker {
    /// `॥ <number> ॥` — end of a numbered verse.
    StanzaEnd,
    /// `।` — midpoint of a verse couplet.
    HalfVerseEnd,
    /// `॥` with no number — end of an unnumbered verse unit.
    VerseEnd,
    /// No recognized trailing marker.
    None,
}

/// Detects the trailing marker of a trimmed line.
///
/// Only the end of the string is examined; markers elsewhere in the line are
/// ignored.
pub fn ending_marker(trimmed: &str) -> EndingMarker {
    static STANZA_NUMBER: OnceLock<Regex> = OnceLock::new();
    let stanza_number = STANZA_NUMBER
        .get_or_init(|| Regex::new(r"॥\s*\d+\s*॥$").expect("Invalid stanza number regex"));

    if stanza_number.is_match(trimmed) {
        EndingMarker::StanzaEnd
    } else if trimmed.ends_with(HALF_VERSE_MARK) {
        EndingMarker::HalfVerseEnd
    } else if trimmed.ends_with(FULL_VERSE_MARK) {
        EndingMarker::VerseEnd
    } else {
        EndingMarker::None
    }
}
