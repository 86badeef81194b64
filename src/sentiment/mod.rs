//! Sentiment scoring module
//!
//! Scores free text (diary entries, chat messages) on a [-1.0, 1.0] scale by
//! blending two signals:
//! - a statistical polarity/subjectivity estimate from an external service
//! - keyword matches against positive/negative lexicons
//!
//! Blended scores fall into five bands (`very_negative` .. `very_positive`),
//! and stored score series aggregate into trend summaries.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use solace::config::AppConfig;
//! use solace::sentiment::HttpPolarityClient;
//! use solace::sentiment::SentimentAnalyzer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let polarity = Arc::new(HttpPolarityClient::new(&config)?);
//!     let analyzer = SentimentAnalyzer::new(&config, polarity)?;
//!
//!     let result = analyzer.analyze("I am so happy and grateful today!").await?;
//!     println!("{} ({:.3})", result.classification, result.score);
//!
//!     Ok(())
//! }
//! ```

pub mod analyzer;
pub mod lexicon;
pub mod normalize;
pub mod polarity;
pub mod trend;

pub use analyzer::blend_scores;
pub use analyzer::SentimentAnalyzer;
pub use analyzer::SentimentResult;
pub use lexicon::KeywordScore;
pub use lexicon::Lexicon;
pub use normalize::TextNormalizer;
pub use polarity::HttpPolarityClient;
pub use polarity::PolarityEstimator;
pub use polarity::PolaritySignal;
pub use trend::chronological_scores;
pub use trend::summarize_scores;
pub use trend::window_limit;
pub use trend::TrendDirection;
pub use trend::TrendSummary;

use serde::Deserialize;
use serde::Serialize;

/// Weight of the statistical polarity estimate in the blended score
pub const POLARITY_WEIGHT: f64 = 0.7;

/// Weight of the keyword-lexicon score in the blended score
pub const KEYWORD_WEIGHT: f64 = 0.3;

/// Five-band sentiment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    /// Classify a score into its band. Band bounds are inclusive at the
    /// lower edge: 0.5 is already `very_positive`, -0.5 is still `negative`.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            Self::VeryPositive
        } else if score >= 0.1 {
            Self::Positive
        } else if score >= -0.1 {
            Self::Neutral
        } else if score >= -0.5 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryNegative => "very_negative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::VeryPositive => "very_positive",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to 3 decimal places for presentation. Classification always runs
/// on the full-precision value first.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
