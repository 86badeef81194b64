use uuid::Uuid;

use super::Database;
use crate::models::EmotionScore;
use crate::models::ScoreSource;
use crate::Result;

impl Database {
    /// Record an emotion score for a diary entry or chat exchange
    pub async fn insert_emotion_score(
        &self,
        user_id: i64,
        score: f64,
        source: ScoreSource,
        source_id: Uuid,
    ) -> Result<EmotionScore> {
        let stored = sqlx::query_as(
            r"
            INSERT INTO emotion_scores (user_id, score, source, source_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            ",
        )
        .bind(user_id)
        .bind(score)
        .bind(source.as_str())
        .bind(source_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    /// Most recent score events for a user, newest first
    pub async fn recent_emotion_scores(
        &self,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<EmotionScore>> {
        let scores = sqlx::query_as(
            r"
            SELECT * FROM emotion_scores
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(scores)
    }

    /// Replace the stored score for a source row (diary entry edits)
    pub async fn update_emotion_score_for(
        &self,
        source: ScoreSource,
        source_id: Uuid,
        score: f64,
    ) -> Result<()> {
        sqlx::query(
            r"
            UPDATE emotion_scores
            SET score = $3
            WHERE source = $1 AND source_id = $2
            ",
        )
        .bind(source.as_str())
        .bind(source_id)
        .bind(score)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Drop a user's score events tied to a source row, returning the count
    /// removed. Rows belonging to other users are never touched.
    pub async fn delete_emotion_scores_for(
        &self,
        user_id: i64,
        source: ScoreSource,
        source_id: Uuid,
    ) -> Result<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM emotion_scores
            WHERE user_id = $1 AND source = $2 AND source_id = $3
            ",
        )
        .bind(user_id)
        .bind(source.as_str())
        .bind(source_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
