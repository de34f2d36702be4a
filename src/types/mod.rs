pub mod identifiers;
pub mod record;
pub mod response;

pub use identifiers::ContentHash;
pub use record::{AnalyzedString, CharacterFrequencyMap, StringProperties};
pub use response::{InterpretedQuery, NaturalLanguageResponse, StringsResponse};
