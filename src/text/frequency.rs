use log::debug;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

/// Lowercase token to occurrence count.
pub type WordFrequencyMap = BTreeMap<String, usize>;

/// Common English words dropped from word clouds when filtering is enabled.
const STOPWORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
    "for", "from", "had", "has", "have", "he", "her", "here", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "me", "more", "my", "of", "on", "or", "our",
    "out", "she", "so", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "to", "too", "up", "us", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "why", "will", "with", "would", "you", "your",
];

#[derive(Debug, Clone, Default)]
pub struct WordFrequencyExtractor {
    stopwords: Option<HashSet<&'static str>>,
}

impl WordFrequencyExtractor {
    pub fn new() -> Self {
        WordFrequencyExtractor { stopwords: None }
    }

    pub fn with_stopwords(mut self, enabled: bool) -> Self {
        self.stopwords = enabled.then(|| STOPWORDS.iter().copied().collect());
        self
    }

    /// Counts whitespace-separated tokens of already cleaned text, case-folded.
    /// Returns `None` when there is nothing to count, in which case no word
    /// cloud should be produced.
    pub fn extract(&self, cleaned_text: &str) -> Option<WordFrequencyMap> {
        if cleaned_text.trim().is_empty() {
            debug!("Cleaned corpus is empty, skipping word frequencies");
            return None;
        }

        let mut frequencies = WordFrequencyMap::new();
        for token in cleaned_text.split_whitespace() {
            let token = token.to_lowercase();
            if let Some(stopwords) = &self.stopwords {
                if stopwords.contains(token.as_str()) {
                    continue;
                }
            }
            *frequencies.entry(token).or_insert(0) += 1;
        }

        debug!("Counted {} distinct words", frequencies.len());
        Some(frequencies)
    }
}

/// The `n` most frequent words, ties broken alphabetically.
pub fn top_words(frequencies: &WordFrequencyMap, n: usize) -> Vec<(String, usize)> {
    let mut words: Vec<(String, usize)> = frequencies
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    words.sort_by_key(|(word, count)| (Reverse(*count), word.clone()));
    words.truncate(n);
    words
}
