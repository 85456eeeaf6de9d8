pub mod lexicon;
pub mod scorer;

pub use lexicon::{Lexicon, LexiconEntry};
pub use scorer::{SentimentScorer, score};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Green,
    Red,
    Amber,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Positive, Label::Negative, Label::Neutral];

    /// The [-0.1, 0.1] band, bounds included, is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Label::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Label::Positive => "😊",
            Label::Negative => "😞",
            Label::Neutral => "😐",
        }
    }

    pub fn color_tag(&self) -> ColorTag {
        match self {
            Label::Positive => ColorTag::Green,
            Label::Negative => ColorTag::Red,
            Label::Neutral => ColorTag::Amber,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Positive => "Positive",
            Label::Negative => "Negative",
            Label::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl ColorTag {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Green => "#28a745",
            ColorTag::Red => "#dc3545",
            ColorTag::Amber => "#ffc107",
        }
    }
}

/// Outcome of scoring one text. Symbol and color are derived from the label,
/// so a result can never disagree with itself.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
    pub label: Label,
}

impl SentimentResult {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        SentimentResult {
            polarity,
            subjectivity,
            label: Label::from_polarity(polarity),
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.label.symbol()
    }

    pub fn color_tag(&self) -> ColorTag {
        self.label.color_tag()
    }
}

impl Serialize for SentimentResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SentimentResult", 5)?;
        state.serialize_field("polarity", &self.polarity)?;
        state.serialize_field("subjectivity", &self.subjectivity)?;
        state.serialize_field("label", &self.label)?;
        state.serialize_field("symbol", self.symbol())?;
        state.serialize_field("color", self.color_tag().hex())?;
        state.end()
    }
}
