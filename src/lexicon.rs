//! Static keyword lexicon and energy labels.
//!
//! Both tables are `'static` data: read-only for the whole process and safe to
//! share across any number of concurrent callers.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionCategory {
    Melancholic,
    Hope,
    Joy,
    Calm,
    Anger,
    Fear,
}

const MELANCHOLIC: &[&str] = &["sad", "heavy", "lonely", "tired", "quiet", "dark", "gloom"];
const HOPE: &[&str] = &["hope", "hopeful", "bright", "rise", "rising", "light", "promise"];
const JOY: &[&str] = &["joy", "happy", "warm", "glow", "smile", "delight"];
const CALM: &[&str] = &["calm", "still", "breathe", "soft", "gentle", "float"];
const ANGER: &[&str] = &["angry", "rage", "fury", "sharp", "burn", "storm"];
const FEAR: &[&str] = &["fear", "anxious", "nervous", "tense", "worry", "shadow"];

impl EmotionCategory {
    /// Fixed priority order. When several categories share the top score the
    /// earliest one in this list wins.
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Melancholic,
        EmotionCategory::Hope,
        EmotionCategory::Joy,
        EmotionCategory::Calm,
        EmotionCategory::Anger,
        EmotionCategory::Fear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmotionCategory::Melancholic => "melancholic",
            EmotionCategory::Hope => "hope",
            EmotionCategory::Joy => "joy",
            EmotionCategory::Calm => "calm",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Fear => "fear",
        }
    }

    /// Position in [`EmotionCategory::ALL`].
    pub fn index(self) -> usize {
        match self {
            EmotionCategory::Melancholic => 0,
            EmotionCategory::Hope => 1,
            EmotionCategory::Joy => 2,
            EmotionCategory::Calm => 3,
            EmotionCategory::Anger => 4,
            EmotionCategory::Fear => 5,
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Melancholic => MELANCHOLIC,
            EmotionCategory::Hope => HOPE,
            EmotionCategory::Joy => JOY,
            EmotionCategory::Calm => CALM,
            EmotionCategory::Anger => ANGER,
            EmotionCategory::Fear => FEAR,
        }
    }

    pub fn energy(self) -> &'static str {
        match self {
            EmotionCategory::Melancholic => "low",
            EmotionCategory::Hope => "rising",
            EmotionCategory::Joy => "high",
            EmotionCategory::Calm => "low-steady",
            EmotionCategory::Anger => "high",
            EmotionCategory::Fear => "uneasy",
        }
    }

    /// Exact membership test; `token` is expected already normalized.
    pub fn matches(self, token: &str) -> bool {
        self.keywords().contains(&token)
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
