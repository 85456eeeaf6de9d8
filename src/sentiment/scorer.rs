use super::SentimentResult;
use super::lexicon::{self, Lexicon};
use crate::error::ScoringError;
use log::trace;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\w|')+|!").expect("token pattern is valid"));

const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_FACTOR: f64 = 1.25;

/// One lexicon hit, possibly merged with the intensifier right before it.
#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
    negated: bool,
}

impl Assessment {
    fn polarity(&self) -> f64 {
        if self.negated {
            (self.polarity * NEGATION_FACTOR).clamp(-1.0, 1.0)
        } else {
            self.polarity
        }
    }
}

/// Lexicon-based scorer. Cheap to copy and shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer {
    lexicon: &'static Lexicon,
}

impl SentimentScorer {
    pub fn new() -> Self {
        SentimentScorer {
            lexicon: lexicon::init(),
        }
    }

    pub fn score(&self, text: &str) -> Result<SentimentResult, ScoringError> {
        if let Some(pos) = text.find('\0') {
            return Err(ScoringError::UnsupportedInput(pos));
        }

        let assessments = self.assess(text);
        trace!("{} assessments for {:?}", assessments.len(), text);

        let (polarity, subjectivity) = if assessments.is_empty() {
            (0.0, 0.0)
        } else {
            let count = assessments.len() as f64;
            let polarity = assessments.iter().map(Assessment::polarity).sum::<f64>() / count;
            let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;
            (polarity, subjectivity)
        };

        if !polarity.is_finite() || !subjectivity.is_finite() {
            return Err(ScoringError::NonFinite {
                polarity,
                subjectivity,
            });
        }

        Ok(SentimentResult::new(
            polarity.clamp(-1.0, 1.0),
            subjectivity.clamp(0.0, 1.0),
        ))
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        // Typographic apostrophes count as plain ones so "isn’t" still negates.
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        let mut assessments: Vec<Assessment> = Vec::new();
        // Previous token was an intensifier that opened the last assessment.
        let mut pending_modifier = false;
        let mut pending_negation = false;

        for token in TOKEN_REGEX.find_iter(&lowered).map(|m| m.as_str()) {
            if token == "!" {
                if let Some(last) = assessments.last_mut() {
                    last.polarity = (last.polarity * EXCLAMATION_FACTOR).clamp(-1.0, 1.0);
                }
                pending_modifier = false;
                continue;
            }

            let word = token.trim_matches('\'');
            if word.is_empty() {
                continue;
            }

            if let Some(entry) = self.lexicon.get(word) {
                if let Some(last) = assessments.last_mut().filter(|_| pending_modifier) {
                    last.polarity = (entry.polarity * last.intensity).clamp(-1.0, 1.0);
                    last.subjectivity = (entry.subjectivity * last.intensity).clamp(0.0, 1.0);
                    last.intensity = entry.intensity;
                } else {
                    assessments.push(Assessment {
                        polarity: entry.polarity,
                        subjectivity: entry.subjectivity,
                        intensity: entry.intensity,
                        negated: false,
                    });
                }

                if pending_negation {
                    if let Some(last) = assessments.last_mut() {
                        last.negated = true;
                    }
                }
                pending_negation = false;
                pending_modifier = entry.intensifier;
            } else {
                if self.lexicon.is_negation(word) {
                    pending_negation = true;
                } else if word.chars().count() > 1 {
                    pending_negation = false;
                }
                pending_modifier = false;
            }
        }

        assessments
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores one text with the built-in lexicon.
pub fn score(text: &str) -> Result<SentimentResult, ScoringError> {
    SentimentScorer::new().score(text)
}
