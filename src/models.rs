use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Where an emotion score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Diary,
    Chat,
}

impl ScoreSource {
    /// Stable string form used in storage and API payloads
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Diary => "diary",
            Self::Chat => "chat",
        }
    }
}

impl std::fmt::Display for ScoreSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diary entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiaryEntry {
    pub id: Uuid,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One stored chat exchange (user message plus assistant reply)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ChatExchange {
    pub id: Uuid,
    pub user_id: i64,
    pub message: String,
    pub reply: String,
    pub created_at: DateTime<Utc>,
}

/// A stored emotion score event
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmotionScore {
    pub id: Uuid,
    pub user_id: i64,
    pub score: f64,
    /// "diary" or "chat" (see [`ScoreSource`])
    pub source: String,
    pub source_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::ScoreSource;

    #[test]
    fn test_score_source_matches_serde_form() {
        // Stored strings and serialized JSON must agree
        let json = serde_json::to_string(&ScoreSource::Diary).unwrap();
        assert_eq!(json, format!("\"{}\"", ScoreSource::Diary.as_str()));

        let json = serde_json::to_string(&ScoreSource::Chat).unwrap();
        assert_eq!(json, format!("\"{}\"", ScoreSource::Chat.as_str()));
    }
}
