pub mod detect;
pub mod language;
pub mod preprocess;

pub use detect::DetectionRules;
pub use language::{Language, LanguageRegistry, UnknownLanguage};
pub use preprocess::{Preprocessor, TranscriptPreprocessor};
