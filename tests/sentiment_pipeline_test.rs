use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;
use solace::models::EmotionScore;
use solace::sentiment::chronological_scores;
use solace::sentiment::summarize_scores;
use solace::sentiment::window_limit;
use solace::sentiment::Lexicon;
use solace::sentiment::PolarityEstimator;
use solace::sentiment::PolaritySignal;
use solace::sentiment::SentimentAnalyzer;
use solace::sentiment::SentimentLabel;
use solace::sentiment::TrendDirection;
use solace::Result;
use solace::SolaceError;
use uuid::Uuid;

/// Test double returning a fixed polarity signal
struct FixedPolarity {
    polarity: f64,
    subjectivity: f64,
}

#[async_trait]
impl PolarityEstimator for FixedPolarity {
    async fn estimate(&self, _text: &str) -> Result<PolaritySignal> {
        Ok(PolaritySignal {
            polarity: self.polarity,
            subjectivity: self.subjectivity,
        })
    }
}

/// Test double standing in for an unreachable polarity service
struct FailingPolarity;

#[async_trait]
impl PolarityEstimator for FailingPolarity {
    async fn estimate(&self, _text: &str) -> Result<PolaritySignal> {
        Err(SolaceError::AnalysisError("polarity service down".to_string()))
    }
}

fn analyzer_with(polarity: Arc<dyn PolarityEstimator>) -> SentimentAnalyzer {
    SentimentAnalyzer::with_lexicon(Lexicon::built_in(), polarity).unwrap()
}

#[tokio::test]
async fn test_pipeline_blends_polarity_and_keywords() {
    let analyzer = analyzer_with(Arc::new(FixedPolarity {
        polarity: 1.0,
        subjectivity: 1.0,
    }));

    // Keyword signal (-1.0) pulls the strong polarity back down
    let result = analyzer.analyze("sad news today").await.unwrap();

    assert!((result.score - 0.4).abs() < 1e-9);
    assert_eq!(result.classification, SentimentLabel::Positive);
    assert_eq!(result.matched_keywords, vec!["-sad".to_string()]);
    assert!((result.confidence - 0.572).abs() < 1e-9);
    assert!((result.polarity - 1.0).abs() < f64::EPSILON);
    assert!((result.subjectivity - 1.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_pipeline_strips_noise_before_scoring() {
    let analyzer = analyzer_with(Arc::new(FixedPolarity {
        polarity: 0.0,
        subjectivity: 0.0,
    }));

    // The URL disappears before keyword matching and word counting
    let result = analyzer
        .analyze("check https://example.com I feel happy")
        .await
        .unwrap();

    assert_eq!(result.matched_keywords, vec!["+happy".to_string()]);
    assert!((result.score - 0.3).abs() < 1e-9);
    assert_eq!(result.classification, SentimentLabel::Positive);
    assert!((result.confidence - 0.076).abs() < 1e-9);
}

#[tokio::test]
async fn test_blank_input_never_reaches_the_estimator() {
    // A failing estimator proves the short-circuit: blank input must
    // still produce the neutral zero-result
    let analyzer = analyzer_with(Arc::new(FailingPolarity));

    let result = analyzer.analyze("   \t  ").await.unwrap();

    assert!((result.score - 0.0).abs() < f64::EPSILON);
    assert_eq!(result.classification, SentimentLabel::Neutral);
    assert!((result.confidence - 0.0).abs() < f64::EPSILON);
    assert!(result.matched_keywords.is_empty());
}

#[tokio::test]
async fn test_estimator_failure_propagates() {
    let analyzer = analyzer_with(Arc::new(FailingPolarity));

    let outcome = analyzer.analyze("an ordinary day").await;

    assert!(matches!(outcome, Err(SolaceError::AnalysisError(_))));
}

#[tokio::test]
async fn test_custom_lexicon_file_roundtrip() {
    let path = std::env::temp_dir().join(format!("solace-lexicon-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
positive = ["stoked"]
negative = ["gutted", "bummed"]
"#,
    )
    .unwrap();

    let lexicon = Lexicon::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let analyzer = SentimentAnalyzer::with_lexicon(
        lexicon,
        Arc::new(FixedPolarity {
            polarity: 0.0,
            subjectivity: 0.0,
        }),
    )
    .unwrap();

    let result = analyzer.analyze("gutted about the match").await.unwrap();

    assert_eq!(result.matched_keywords, vec!["-gutted".to_string()]);
    // Keyword-only signal: 0.3 * -1.0
    assert!((result.score + 0.3).abs() < 1e-9);
    assert_eq!(result.classification, SentimentLabel::Negative);
}

#[test]
fn test_trend_summary_over_a_recovery() {
    let scores = vec![-0.6, -0.4, -0.5, 0.3, 0.4, 0.5];
    let summary = summarize_scores(&scores);

    assert_eq!(summary.trend, TrendDirection::Improving);
    assert_eq!(summary.total_entries, 6);
}

#[test]
fn test_trend_window_sizing() {
    assert_eq!(window_limit(30), 150);
    assert_eq!(window_limit(7), 35);
}

#[test]
fn test_windowed_rows_feed_the_aggregator_oldest_first() {
    // Rows come off the store newest first, as the window query orders them
    let rows: Vec<EmotionScore> = [0.5, 0.4, -0.4, -0.6]
        .iter()
        .enumerate()
        .map(|(i, &score)| EmotionScore {
            id: Uuid::new_v4(),
            user_id: 7,
            score,
            source: "diary".to_string(),
            source_id: Uuid::new_v4(),
            created_at: Utc::now() - Duration::minutes(i as i64 * 10),
        })
        .collect();

    let summary = summarize_scores(&chronological_scores(&rows));

    assert_eq!(summary.trend, TrendDirection::Improving);
    assert_eq!(summary.total_entries, 4);
}
