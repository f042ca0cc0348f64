use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::models::document::RawDocument;
use crate::models::language::{LanguageOption, builtin_languages};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid library directory: {0}")]
    InvalidLibraryDir(String),
}

/// One edition available on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryEntry {
    pub language: LanguageOption,
    pub relative_path: RelativePathBuf,
}

/// Scan a library directory for `<language-id>.txt` editions.
///
/// File stems are matched against the bundled language registry; unknown stems
/// still load, with the stem doubling as the display name, so users can drop
/// in their own editions. Registry editions sort first (reference language
/// leading), unknown ones alphabetically after.
pub fn scan_library(root: &Path) -> Result<Vec<LibraryEntry>, IoError> {
    if !root.is_dir() {
        return Err(IoError::InvalidLibraryDir(
            "library directory not found".to_string(),
        ));
    }

    let registry = builtin_languages();
    let mut entries = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let language = registry
            .iter()
            .find(|l| l.id == stem)
            .cloned()
            .unwrap_or_else(|| LanguageOption::new(stem, stem, stem));

        entries.push(LibraryEntry {
            language,
            relative_path: RelativePathBuf::from(format!("{stem}.txt")),
        });
    }

    entries.sort_by_key(|e| {
        let rank = registry
            .iter()
            .position(|l| l.id == e.language.id)
            .unwrap_or(registry.len());
        (rank, e.language.id.clone())
    });

    Ok(entries)
}

/// Read one edition into a [`RawDocument`].
pub fn read_document(relative_path: &RelativePath, root: &Path) -> Result<RawDocument, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    let text = fs::read_to_string(&absolute_path)?;
    Ok(RawDocument::from_text(&text))
}
