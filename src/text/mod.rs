pub mod cleaner;
pub mod frequency;

pub use cleaner::clean;
pub use frequency::{WordFrequencyExtractor, WordFrequencyMap, top_words};
