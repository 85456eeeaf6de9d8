//! Built-in English sentiment lexicon.
//!
//! Each word carries a polarity in [-1, 1], a subjectivity in [0, 1] and an
//! intensity. Intensifiers are adverbs whose intensity scales the next
//! sentiment word instead of standing on their own.

use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    pub intensifier: bool,
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<&'static str, LexiconEntry>,
    negations: HashSet<&'static str>,
}

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Loads the built-in lexicon on first call and hands out the shared copy
/// afterwards. Safe to call from any thread, any number of times.
pub fn init() -> &'static Lexicon {
    LEXICON.get_or_init(|| {
        let lexicon = Lexicon::builtin();
        info!(
            "Loaded sentiment lexicon with {} words and {} negations",
            lexicon.len(),
            lexicon.negations.len()
        );
        lexicon
    })
}

// (word, polarity, subjectivity)
const WORDS: &[(&str, f64, f64)] = &[
    // positive
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("brilliant", 0.9, 1.0),
    ("calm", 0.3, 0.75),
    ("charming", 0.5, 1.0),
    ("cheap", 0.4, 0.7),
    ("clean", 0.37, 0.69),
    ("clever", 0.5, 1.0),
    ("comfortable", 0.4, 0.6),
    ("cool", 0.35, 0.65),
    ("delicious", 1.0, 1.0),
    ("delightful", 1.0, 1.0),
    ("easy", 0.43, 0.83),
    ("effective", 0.6, 0.8),
    ("efficient", 0.5, 0.6),
    ("elegant", 0.5, 1.0),
    ("enjoy", 0.4, 0.5),
    ("enjoyable", 0.5, 0.6),
    ("excellent", 1.0, 1.0),
    ("exceptional", 0.67, 0.67),
    ("exciting", 0.3, 0.8),
    ("fabulous", 0.4, 0.9),
    ("fantastic", 0.4, 0.9),
    ("fast", 0.2, 0.6),
    ("favorite", 0.5, 1.0),
    ("fine", 0.42, 0.5),
    ("fresh", 0.3, 0.5),
    ("friendly", 0.38, 0.5),
    ("fun", 0.3, 0.2),
    ("glad", 0.5, 1.0),
    ("good", 0.7, 0.6),
    ("gorgeous", 0.7, 1.0),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.5, 0.6),
    ("ideal", 0.9, 0.9),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 0.9),
    ("interesting", 0.5, 0.5),
    ("joy", 0.8, 0.9),
    ("kind", 0.6, 0.9),
    ("like", 0.2, 0.3),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("lucky", 0.33, 1.0),
    ("magnificent", 1.0, 1.0),
    ("marvelous", 1.0, 1.0),
    ("nice", 0.6, 1.0),
    ("outstanding", 0.5, 0.67),
    ("peaceful", 0.25, 0.5),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.73, 0.97),
    ("pleased", 0.5, 1.0),
    ("polite", 0.4, 0.6),
    ("positive", 0.23, 0.55),
    ("powerful", 0.3, 1.0),
    ("pretty", 0.25, 1.0),
    ("quick", 0.33, 0.5),
    ("recommend", 0.4, 0.5),
    ("reliable", 0.5, 0.6),
    ("remarkable", 0.75, 0.75),
    ("satisfied", 0.5, 1.0),
    ("smart", 0.21, 0.64),
    ("smooth", 0.4, 0.7),
    ("solid", 0.25, 0.6),
    ("splendid", 1.0, 1.0),
    ("stunning", 0.5, 1.0),
    ("super", 0.33, 0.67),
    ("superb", 1.0, 1.0),
    ("terrific", 1.0, 1.0),
    ("thank", 0.3, 0.4),
    ("thanks", 0.2, 0.2),
    ("top", 0.5, 0.5),
    ("useful", 0.3, 0.1),
    ("valuable", 0.5, 0.6),
    ("well", 0.3, 0.3),
    ("win", 0.8, 0.4),
    ("wonderful", 1.0, 1.0),
    ("worth", 0.3, 0.1),
    ("wow", 0.1, 1.0),
    // negative
    ("angry", -0.5, 1.0),
    ("annoying", -0.8, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("boring", -1.0, 1.0),
    ("broken", -0.4, 0.4),
    ("cold", -0.6, 1.0),
    ("confusing", -0.3, 0.6),
    ("cruel", -1.0, 1.0),
    ("damaged", -0.4, 0.4),
    ("dangerous", -0.6, 0.9),
    ("dead", -0.2, 0.4),
    ("difficult", -0.5, 1.0),
    ("dirty", -0.6, 0.8),
    ("disappointed", -0.75, 0.75),
    ("disappointing", -0.6, 0.7),
    ("disgusting", -1.0, 1.0),
    ("dull", -0.3, 0.6),
    ("expensive", -0.5, 0.7),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("fake", -0.5, 1.0),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("horrible", -1.0, 1.0),
    ("hurt", -0.5, 0.5),
    ("mad", -0.63, 1.0),
    ("mediocre", -0.5, 0.6),
    ("negative", -0.3, 0.4),
    ("nasty", -1.0, 1.0),
    ("painful", -0.7, 0.9),
    ("pathetic", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("problem", -0.2, 0.3),
    ("rude", -0.3, 0.7),
    ("sad", -0.5, 1.0),
    ("scary", -0.5, 1.0),
    ("sick", -0.71, 0.86),
    ("slow", -0.3, 0.39),
    ("stupid", -0.8, 1.0),
    ("terrible", -1.0, 1.0),
    ("ugly", -0.7, 1.0),
    ("unfortunately", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("upset", -0.5, 0.8),
    ("useless", -0.5, 0.2),
    ("waste", -0.2, 0.2),
    ("weak", -0.38, 0.81),
    ("weird", -0.5, 1.0),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
    // factual words with mild subjectivity
    ("big", 0.0, 0.1),
    ("new", 0.14, 0.45),
    ("old", 0.1, 0.2),
    ("small", -0.25, 0.4),
    ("long", -0.05, 0.4),
    ("real", 0.2, 0.3),
    ("simple", 0.0, 0.36),
    ("strange", -0.05, 0.15),
];

// (word, polarity, subjectivity, intensity)
const INTENSIFIERS: &[(&str, f64, f64, f64)] = &[
    ("absolutely", 0.2, 0.9, 1.8),
    ("completely", 0.1, 0.4, 1.6),
    ("extremely", -0.13, 1.0, 1.5),
    ("highly", 0.16, 0.54, 1.4),
    ("incredibly", 0.9, 0.9, 1.7),
    ("quite", 0.0, 1.0, 1.1),
    ("really", 0.2, 0.2, 1.4),
    ("slightly", -0.17, 0.4, 0.7),
    ("so", 0.0, 0.0, 1.3),
    ("somewhat", 0.0, 0.3, 0.8),
    ("too", 0.0, 0.0, 1.2),
    ("totally", 0.0, 0.75, 1.5),
    ("truly", 0.0, 1.0, 1.5),
    ("very", 0.2, 0.3, 1.3),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "n't", "nor", "neither"];

impl Lexicon {
    pub fn builtin() -> Self {
        let mut entries = HashMap::with_capacity(WORDS.len() + INTENSIFIERS.len());

        for &(word, polarity, subjectivity) in WORDS {
            entries.insert(
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity: 1.0,
                    intensifier: false,
                },
            );
        }

        for &(word, polarity, subjectivity, intensity) in INTENSIFIERS {
            entries.insert(
                word,
                LexiconEntry {
                    polarity,
                    subjectivity,
                    intensity,
                    intensifier: true,
                },
            );
        }

        let negations = NEGATIONS.iter().copied().collect();
        debug!("Built lexicon with {} entries", entries.len());

        Lexicon { entries, negations }
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    /// Contractions such as "don't" count as negations as well.
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
