//! Emotion trend aggregation over stored score series

use serde::Deserialize;
use serde::Serialize;

use crate::models::EmotionScore;
use crate::sentiment::round3;
use crate::sentiment::SentimentLabel;

/// Minimum entries before a direction verdict is attempted
pub const MIN_TREND_ENTRIES: usize = 4;

/// Shift between half-series averages that counts as a trend
pub const TREND_SHIFT_THRESHOLD: f64 = 0.1;

/// Score events considered per requested day of history
pub const SCORES_PER_DAY: i64 = 5;

/// Most days of history a single trend window may cover
pub const MAX_TREND_DAYS: i64 = 3650;

/// Store fetch limit for a `days`-sized trend window.
///
/// `days` arrives unchecked from query parameters and CLI flags; it is
/// clamped into `[1, MAX_TREND_DAYS]` so the limit stays positive and
/// cannot overflow.
#[must_use]
pub fn window_limit(days: i64) -> i64 {
    days.clamp(1, MAX_TREND_DAYS) * SCORES_PER_DAY
}

/// Score series of windowed store rows, oldest first.
///
/// Store queries hand back rows newest first; feeding that order to
/// [`summarize_scores`] would invert the direction verdict.
#[must_use]
pub fn chronological_scores(rows: &[EmotionScore]) -> Vec<f64> {
    rows.iter().rev().map(|row| row.score).collect()
}

/// Direction of an emotion score series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
    InsufficientData,
}

impl TrendDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Declining => "declining",
            Self::Stable => "stable",
            Self::InsufficientData => "insufficient_data",
        }
    }
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate view over a score series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub trend: TrendDirection,
    /// Mean score, rounded to 3 decimals
    pub average: f64,
    /// Population standard deviation, rounded to 3 decimals
    pub volatility: f64,
    pub total_entries: usize,
    /// Five-band label of the (full-precision) average
    pub classification: SentimentLabel,
}

/// Summarize a score series given in CHRONOLOGICAL order (oldest first).
///
/// Callers holding newest-first rows must reverse before calling; the
/// direction verdict compares the older half against the newer half.
pub fn summarize_scores(scores: &[f64]) -> TrendSummary {
    if scores.is_empty() {
        return TrendSummary {
            trend: TrendDirection::InsufficientData,
            average: 0.0,
            volatility: 0.0,
            total_entries: 0,
            classification: SentimentLabel::Neutral,
        };
    }

    let total = scores.len();
    let average = scores.iter().sum::<f64>() / total as f64;

    let volatility = if total < 2 {
        0.0
    } else {
        let variance = scores
            .iter()
            .map(|score| (score - average).powi(2))
            .sum::<f64>()
            / total as f64;
        variance.sqrt()
    };

    TrendSummary {
        trend: direction(scores),
        average: round3(average),
        volatility: round3(volatility),
        total_entries: total,
        classification: SentimentLabel::from_score(average),
    }
}

fn direction(scores: &[f64]) -> TrendDirection {
    if scores.len() < MIN_TREND_ENTRIES {
        return TrendDirection::InsufficientData;
    }

    // Odd lengths give the extra element to the newer half
    let (older, newer) = scores.split_at(scores.len() / 2);
    let older_avg = older.iter().sum::<f64>() / older.len() as f64;
    let newer_avg = newer.iter().sum::<f64>() / newer.len() as f64;

    if newer_avg > older_avg + TREND_SHIFT_THRESHOLD {
        TrendDirection::Improving
    } else if newer_avg < older_avg - TREND_SHIFT_THRESHOLD {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    }
}
