pub mod config;
pub mod emotion;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod motion;
pub mod server;
pub mod viz;

pub use emotion::{EmotionLabel, EmotionPayload, EmotionResult, analyze};
pub use lexicon::EmotionCategory;
