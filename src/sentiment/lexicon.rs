//! Keyword lexicons and ratio scoring

use std::path::Path;

use serde::Deserialize;

use crate::Result;
use crate::SolaceError;

/// Built-in positive terms, in scoring order
const POSITIVE_TERMS: &[&str] = &[
    "happy",
    "joy",
    "excited",
    "grateful",
    "peaceful",
    "calm",
    "content",
    "satisfied",
    "optimistic",
    "hopeful",
    "love",
    "amazing",
    "wonderful",
    "fantastic",
    "great",
    "good",
    "pleased",
    "delighted",
    "cheerful",
    "blessed",
    "lucky",
    "proud",
    "confident",
    "successful",
    "accomplished",
];

/// Built-in negative terms, in scoring order
const NEGATIVE_TERMS: &[&str] = &[
    "sad",
    "depressed",
    "anxious",
    "worried",
    "scared",
    "angry",
    "frustrated",
    "upset",
    "disappointed",
    "lonely",
    "stressed",
    "overwhelmed",
    "tired",
    "exhausted",
    "hopeless",
    "worthless",
    "terrible",
    "awful",
    "horrible",
    "miserable",
    "devastated",
    "broken",
    "lost",
    "confused",
    "hurt",
];

/// Result of a keyword pass over normalized text
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    /// Hit ratio `(p - n) / (p + n)` in [-1.0, 1.0]; 0.0 when nothing matched
    pub score: f64,
    /// Matched terms as `+term` / `-term`, positives first, each group in
    /// lexicon order
    pub matched: Vec<String>,
}

impl KeywordScore {
    /// Total number of matched terms
    pub fn hits(&self) -> usize {
        self.matched.len()
    }
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    positive: Vec<String>,
    negative: Vec<String>,
}

/// Positive/negative term lists driving the keyword scorer.
///
/// Lexicons are data, not code: the built-in lists can be replaced with a
/// TOML file (`positive = [...]`, `negative = [...]`) loaded at startup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::built_in()
    }
}

impl Lexicon {
    /// The built-in term lists
    pub fn built_in() -> Self {
        Self {
            positive: POSITIVE_TERMS.iter().map(|s| (*s).to_string()).collect(),
            negative: NEGATIVE_TERMS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self { positive, negative }
    }

    /// Load term lists from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(SolaceError::Io)?;
        let file: LexiconFile = toml::from_str(&content).map_err(SolaceError::TomlParsing)?;
        Ok(Self::new(file.positive, file.negative))
    }

    /// Load from the configured lexicon file, or fall back to the built-in
    /// lists
    pub fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        match config.lexicon_file() {
            Some(path) => {
                let lexicon = Self::from_file(path)?;
                tracing::info!(
                    "Loaded lexicon from {}: {} positive, {} negative terms",
                    path,
                    lexicon.positive.len(),
                    lexicon.negative.len()
                );
                Ok(lexicon)
            }
            None => Ok(Self::built_in()),
        }
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }

    /// Score text against the lexicons.
    ///
    /// Matching is substring containment, not word-boundary aware: "sad"
    /// also matches inside "sadness". Stored historical scores rely on this
    /// behavior. Each term counts at most once regardless of how often it
    /// occurs.
    pub fn score(&self, text: &str) -> KeywordScore {
        let haystack = text.to_lowercase();

        let mut matched = Vec::new();
        let mut positive_hits = 0usize;
        for term in &self.positive {
            if haystack.contains(term.as_str()) {
                positive_hits += 1;
                matched.push(format!("+{term}"));
            }
        }

        let mut negative_hits = 0usize;
        for term in &self.negative {
            if haystack.contains(term.as_str()) {
                negative_hits += 1;
                matched.push(format!("-{term}"));
            }
        }

        let total = positive_hits + negative_hits;
        let score = if total == 0 {
            0.0
        } else {
            (positive_hits as f64 - negative_hits as f64) / total as f64
        };

        KeywordScore { score, matched }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_hits_score_zero() {
        let result = Lexicon::built_in().score("feeling happy but also sad");
        assert!((result.score - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.matched, vec!["+happy", "-sad"]);
    }

    #[test]
    fn test_all_positive_scores_one() {
        let result = Lexicon::built_in().score("happy and grateful");
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert_eq!(result.hits(), 2);
    }

    #[test]
    fn test_all_negative_scores_minus_one() {
        let result = Lexicon::built_in().score("tired and hopeless");
        assert!((result.score + 1.0).abs() < f64::EPSILON);
        assert_eq!(result.matched, vec!["-tired", "-hopeless"]);
    }

    #[test]
    fn test_no_hits_scores_zero_with_empty_matches() {
        let result = Lexicon::built_in().score("the weather report for tuesday");
        assert!((result.score - 0.0).abs() < f64::EPSILON);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_substring_containment() {
        // "sadness" contains "sad"; containment is part of the contract
        let result = Lexicon::built_in().score("a deep sadness");
        assert_eq!(result.matched, vec!["-sad"]);
        assert!((result.score + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_matches_follow_lexicon_order_not_text_order() {
        let result = Lexicon::built_in().score("sad yet grateful and happy");
        assert_eq!(result.matched, vec!["+happy", "+grateful", "-sad"]);
    }

    #[test]
    fn test_repeated_terms_count_once() {
        let result = Lexicon::built_in().score("happy happy happy sad");
        assert!((result.score - 0.0).abs() < f64::EPSILON);
        assert_eq!(result.hits(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = Lexicon::built_in().score("HAPPY and Grateful");
        assert_eq!(result.matched, vec!["+happy", "+grateful"]);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::new(
            vec!["bright".to_string()],
            vec!["gloomy".to_string(), "dull".to_string()],
        );
        let result = lexicon.score("a bright but gloomy and dull morning");
        assert!((result.score - (-1.0 / 3.0)).abs() < 1e-12);
        assert_eq!(result.matched, vec!["+bright", "-gloomy", "-dull"]);
    }
}
