pub mod io;
pub mod layout;
pub mod models;
pub mod transport;

// Re-export key types for easier usage
pub use layout::{
    EndingMarker, HeadingRules, LineCategory, RenderLine, RenderPlan, RenderRole, Spacing,
    render_document,
};
pub use models::document::RawDocument;
pub use models::language::{
    LanguageOption, REFERENCE_LANGUAGE, RenderStrategy, builtin_languages, find_language,
};
pub use models::strings::{StringCatalog, StringTable, UiLabel};
pub use transport::{PlaybackRate, Transport, TransportState};
