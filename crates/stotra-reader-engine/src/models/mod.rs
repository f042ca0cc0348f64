pub mod document;
pub mod language;
pub mod strings;

pub use document::RawDocument;
pub use language::{LanguageOption, RenderStrategy};
pub use strings::{StringCatalog, StringTable, UiLabel};
