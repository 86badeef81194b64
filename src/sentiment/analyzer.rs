//! Blended sentiment analysis
//!
//! Combines the statistical polarity estimate with keyword-lexicon scoring
//! into a single score, a five-band classification and a confidence value.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::config::AppConfig;
use crate::sentiment::lexicon::KeywordScore;
use crate::sentiment::lexicon::Lexicon;
use crate::sentiment::normalize::TextNormalizer;
use crate::sentiment::polarity::PolarityEstimator;
use crate::sentiment::polarity::PolaritySignal;
use crate::sentiment::round3;
use crate::sentiment::SentimentLabel;
use crate::sentiment::KEYWORD_WEIGHT;
use crate::sentiment::POLARITY_WEIGHT;
use crate::Result;

/// Confidence weight of the subjectivity estimate
const SUBJECTIVITY_CONFIDENCE_WEIGHT: f64 = 0.5;

/// Confidence weight of the keyword-hit count
const KEYWORD_CONFIDENCE_WEIGHT: f64 = 0.3;

/// Confidence weight of the text length
const LENGTH_CONFIDENCE_WEIGHT: f64 = 0.2;

/// Keyword hits at which the keyword confidence term saturates
const KEYWORD_SATURATION: f64 = 5.0;

/// Word count at which the length confidence term saturates
const LENGTH_SATURATION: f64 = 50.0;

/// A scored piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Blended score in [-1.0, 1.0], rounded to 3 decimals
    pub score: f64,
    pub classification: SentimentLabel,
    /// Confidence in [0.0, 1.0], rounded to 3 decimals
    pub confidence: f64,
    /// Statistical polarity input
    pub polarity: f64,
    /// Statistical subjectivity input
    pub subjectivity: f64,
    /// Keyword hits as `+term` / `-term`
    pub matched_keywords: Vec<String>,
}

impl SentimentResult {
    /// The fixed result for empty or whitespace-only input
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            classification: SentimentLabel::Neutral,
            confidence: 0.0,
            polarity: 0.0,
            subjectivity: 0.0,
            matched_keywords: Vec::new(),
        }
    }
}

/// Blend precomputed inputs into a [`SentimentResult`].
///
/// Pure: same inputs, same result. Classification runs on the
/// full-precision blended value; rounding is presentation only.
pub fn blend_scores(
    signal: PolaritySignal,
    keywords: KeywordScore,
    word_count: usize,
) -> SentimentResult {
    let combined = signal.polarity * POLARITY_WEIGHT + keywords.score * KEYWORD_WEIGHT;
    // NaN and infinities collapse to 0 before the band thresholds see them
    let combined = clamp_unit(combined);
    let classification = SentimentLabel::from_score(combined);

    let keyword_term = (keywords.hits() as f64 / KEYWORD_SATURATION).min(1.0);
    let length_term = (word_count as f64 / LENGTH_SATURATION).min(1.0);
    let confidence = signal.subjectivity * SUBJECTIVITY_CONFIDENCE_WEIGHT
        + keyword_term * KEYWORD_CONFIDENCE_WEIGHT
        + length_term * LENGTH_CONFIDENCE_WEIGHT;
    let confidence = clamp_confidence(confidence);

    SentimentResult {
        score: round3(combined),
        classification,
        confidence: round3(confidence),
        polarity: round3(signal.polarity),
        subjectivity: round3(signal.subjectivity),
        matched_keywords: keywords.matched,
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

fn clamp_confidence(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Scores text by normalizing it, asking the polarity collaborator for its
/// estimate and blending in keyword matches.
///
/// Holds no mutable state; a single instance serves concurrent requests.
pub struct SentimentAnalyzer {
    normalizer: TextNormalizer,
    lexicon: Lexicon,
    polarity: Arc<dyn PolarityEstimator>,
}

impl SentimentAnalyzer {
    /// Build from configuration (configured lexicon file or built-in lists)
    /// with the given polarity collaborator
    pub fn new(config: &AppConfig, polarity: Arc<dyn PolarityEstimator>) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new()?,
            lexicon: Lexicon::from_config(config)?,
            polarity,
        })
    }

    /// Build with an explicit lexicon
    pub fn with_lexicon(lexicon: Lexicon, polarity: Arc<dyn PolarityEstimator>) -> Result<Self> {
        Ok(Self {
            normalizer: TextNormalizer::new()?,
            lexicon,
            polarity,
        })
    }

    /// Score a piece of text.
    ///
    /// Blank input returns the fixed neutral result without calling the
    /// polarity collaborator. Collaborator failures propagate unchanged.
    pub async fn analyze(&self, text: &str) -> Result<SentimentResult> {
        if text.trim().is_empty() {
            return Ok(SentimentResult::neutral());
        }

        let cleaned = self.normalizer.normalize(text);
        let signal = self.polarity.estimate(&cleaned).await?;
        let keywords = self.lexicon.score(&cleaned);
        let word_count = cleaned.split_whitespace().count();

        Ok(blend_scores(signal, keywords, word_count))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;

    /// Test double returning a fixed estimate and counting calls
    struct FixedPolarity {
        signal: PolaritySignal,
        calls: AtomicUsize,
    }

    impl FixedPolarity {
        fn new(polarity: f64, subjectivity: f64) -> Self {
            Self {
                signal: PolaritySignal {
                    polarity,
                    subjectivity,
                },
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PolarityEstimator for FixedPolarity {
        async fn estimate(&self, _text: &str) -> Result<PolaritySignal> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.signal)
        }
    }

    fn analyzer_with(polarity: Arc<FixedPolarity>) -> SentimentAnalyzer {
        SentimentAnalyzer::with_lexicon(Lexicon::built_in(), polarity).unwrap()
    }

    #[tokio::test]
    async fn test_end_to_end_scoring() {
        let polarity = Arc::new(FixedPolarity::new(0.6, 0.7));
        let analyzer = analyzer_with(Arc::clone(&polarity));

        let result = analyzer
            .analyze("I am so happy and grateful today!")
            .await
            .unwrap();

        // keyword score 1.0 (two positive hits), blend 0.6*0.7 + 1.0*0.3
        assert!((result.score - 0.72).abs() < 1e-9);
        assert_eq!(result.classification, SentimentLabel::VeryPositive);
        assert_eq!(result.matched_keywords, vec!["+happy", "+grateful"]);
        // 0.7*0.5 + (2/5)*0.3 + (7/50)*0.2
        assert!((result.confidence - 0.498).abs() < 1e-9);
        assert_eq!(polarity.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_input_short_circuits() {
        let polarity = Arc::new(FixedPolarity::new(0.9, 0.9));
        let analyzer = analyzer_with(Arc::clone(&polarity));

        for text in ["", "   ", "\t\n"] {
            let result = analyzer.analyze(text).await.unwrap();
            assert_eq!(result, SentimentResult::neutral());
        }
        assert_eq!(polarity.call_count(), 0);
    }

    #[tokio::test]
    async fn test_noise_only_input_still_consults_estimator() {
        // Text that normalizes to nothing is not the same as blank input
        let polarity = Arc::new(FixedPolarity::new(0.0, 0.0));
        let analyzer = analyzer_with(Arc::clone(&polarity));

        let result = analyzer.analyze("http://example.com @someone").await.unwrap();
        assert_eq!(result.classification, SentimentLabel::Neutral);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(polarity.call_count(), 1);
    }

    #[tokio::test]
    async fn test_balanced_keywords_follow_polarity() {
        let polarity = Arc::new(FixedPolarity::new(-0.4, 0.5));
        let analyzer = analyzer_with(polarity);

        let result = analyzer.analyze("happy moments, sad endings").await.unwrap();
        // keyword score 0.0, so the blend is polarity * 0.7
        assert!((result.score - (-0.28)).abs() < 1e-9);
        assert_eq!(result.classification, SentimentLabel::Negative);
        assert_eq!(result.matched_keywords, vec!["+happy", "-sad"]);
    }

    #[test]
    fn test_blend_clamps_out_of_range_polarity() {
        let signal = PolaritySignal {
            polarity: 2.0,
            subjectivity: 0.5,
        };
        let keywords = KeywordScore {
            score: 1.0,
            matched: vec!["+happy".to_string()],
        };
        let result = blend_scores(signal, keywords, 10);
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.classification, SentimentLabel::VeryPositive);
    }

    #[test]
    fn test_blend_collapses_non_finite_values() {
        let signal = PolaritySignal {
            polarity: f64::NAN,
            subjectivity: f64::INFINITY,
        };
        let keywords = KeywordScore {
            score: 0.0,
            matched: Vec::new(),
        };
        let result = blend_scores(signal, keywords, 3);
        assert!((result.score - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.classification, SentimentLabel::Neutral);
        assert!((result.confidence - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_classification_runs_before_rounding() {
        // 0.1422 * 0.7 = 0.09954: inside the neutral band, but rounds to
        // 0.1 for presentation
        let signal = PolaritySignal {
            polarity: 0.1422,
            subjectivity: 0.0,
        };
        let keywords = KeywordScore {
            score: 0.0,
            matched: Vec::new(),
        };
        let result = blend_scores(signal, keywords, 1);
        assert!((result.score - 0.1).abs() < 1e-9);
        assert_eq!(result.classification, SentimentLabel::Neutral);
    }

    #[test]
    fn test_confidence_saturates() {
        let signal = PolaritySignal {
            polarity: 0.0,
            subjectivity: 1.0,
        };
        let keywords = KeywordScore {
            score: 1.0,
            matched: (0..8).map(|i| format!("+term{i}")).collect(),
        };
        // 1.0*0.5 + 1.0*0.3 + 1.0*0.2, both ratio terms capped at 1
        let result = blend_scores(signal, keywords, 500);
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_determinism() {
        let polarity = Arc::new(FixedPolarity::new(0.25, 0.4));
        let analyzer = analyzer_with(polarity);

        let first = analyzer.analyze("a calm, hopeful evening").await.unwrap();
        let second = analyzer.analyze("a calm, hopeful evening").await.unwrap();
        assert_eq!(first, second);
    }
}
