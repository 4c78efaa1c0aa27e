//! Keyword emotion classifier.
//!
//! `analyze` tokenizes the text, counts keyword hits per category, picks the
//! top category and derives an intensity from the hit ratio plus a length boost.

use serde::Serialize;

use crate::lexicon::EmotionCategory;
use crate::metrics;

const STRIP_CHARS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

const NEUTRAL_ENERGY: &str = "steady";
const BLEND_ENERGY: &str = "low-rising";
const NO_HIT_INTENSITY: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionLabel {
    Neutral,
    Category(EmotionCategory),
    MelancholicHope,
}

impl EmotionLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionLabel::Neutral => "neutral",
            EmotionLabel::Category(category) => category.as_str(),
            EmotionLabel::MelancholicHope => "melancholic-hope",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionResult {
    pub emotion: EmotionLabel,
    pub intensity: f64, // 0..1
    pub energy: &'static str,
}

/// Wire shape of a result, intensity rounded to two places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionPayload {
    pub emotion: &'static str,
    pub intensity: f64,
    pub energy: &'static str,
}

impl EmotionResult {
    fn neutral(intensity: f64) -> Self {
        Self {
            emotion: EmotionLabel::Neutral,
            intensity,
            energy: NEUTRAL_ENERGY,
        }
    }

    pub fn to_payload(&self) -> EmotionPayload {
        EmotionPayload {
            emotion: self.emotion.as_str(),
            intensity: metrics::round2(self.intensity),
            energy: self.energy,
        }
    }
}

/// Per-call hit counts, indexed by [`EmotionCategory::index`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreVector {
    counts: [u32; 6],
}

impl ScoreVector {
    pub fn get(&self, category: EmotionCategory) -> u32 {
        self.counts[category.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Highest-scoring category; ties resolve to the earliest entry of
    /// [`EmotionCategory::ALL`].
    pub fn top(&self) -> EmotionCategory {
        let mut best = EmotionCategory::ALL[0];
        for category in EmotionCategory::ALL.into_iter().skip(1) {
            if self.get(category) > self.get(best) {
                best = category;
            }
        }
        best
    }
}

/// Splits on whitespace runs, strips surrounding punctuation and lowercases.
/// Words made only of punctuation stay in the output as empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(STRIP_CHARS).to_lowercase())
        .collect()
}

pub fn score<S: AsRef<str>>(tokens: &[S]) -> ScoreVector {
    let mut scores = ScoreVector::default();
    for token in tokens {
        let token = token.as_ref();
        // every category is checked; the lexicon does not assume disjoint sets
        for category in EmotionCategory::ALL {
            if category.matches(token) {
                scores.counts[category.index()] += 1;
            }
        }
    }
    scores
}

pub fn analyze(text: &str) -> EmotionResult {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return EmotionResult::neutral(0.0);
    }

    let scores = score(tokens.as_slice());
    let top = scores.top();
    let top_hits = scores.get(top);
    let total_hits = scores.total();

    let base = if total_hits == 0 {
        0.0
    } else {
        top_hits as f64 / total_hits as f64
    };
    let intensity = metrics::clamp01(base + length_boost(tokens.len()));

    if top_hits == 0 {
        return EmotionResult::neutral(NO_HIT_INTENSITY);
    }

    if top == EmotionCategory::Melancholic && scores.get(EmotionCategory::Hope) > 0 {
        return EmotionResult {
            emotion: EmotionLabel::MelancholicHope,
            intensity,
            energy: BLEND_ENERGY,
        };
    }

    EmotionResult {
        emotion: EmotionLabel::Category(top),
        intensity,
        energy: top.energy(),
    }
}

fn length_boost(token_count: usize) -> f64 {
    ((token_count + 1) as f64).log10()
}
