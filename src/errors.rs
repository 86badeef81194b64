use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolaceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Sentiment analysis error: {0}")]
    AnalysisError(String),

    #[error("LLM provider error: {0}")]
    LlmError(String),

    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Diary entry not found: {0}")]
    DiaryEntryNotFound(uuid::Uuid),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, SolaceError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::SolaceError;

    #[test]
    fn test_custom_error_display() {
        let error = SolaceError::Custom("Test error message".to_string());
        assert_eq!(format!("{error}"), "Test error message");
    }

    #[test]
    fn test_config_error() {
        let error = SolaceError::ConfigError("Invalid configuration".to_string());
        assert!(matches!(error, SolaceError::ConfigError(_)));
        assert!(format!("{error}").contains("Configuration"));
    }

    #[test]
    fn test_llm_error() {
        let error = SolaceError::LlmError("API call failed".to_string());
        assert!(matches!(error, SolaceError::LlmError(_)));
    }

    #[test]
    fn test_diary_entry_not_found_display() {
        let id = uuid::Uuid::nil();
        let error = SolaceError::DiaryEntryNotFound(id);
        assert!(format!("{error}").contains(&id.to_string()));
    }

    #[test]
    fn test_empty_message_display() {
        let error = SolaceError::EmptyMessage;
        assert_eq!(format!("{error}"), "Message must not be empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err: SolaceError = io_err.into();
        assert!(matches!(err, SolaceError::Io(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("{invalid json}");
        if let Err(json_err) = parse_result {
            let err: SolaceError = json_err.into();
            assert!(matches!(err, SolaceError::Serialization(_)));
        }
    }

    #[test]
    fn test_result_alias() {
        let ok: crate::Result<i32> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: crate::Result<i32> = Err(SolaceError::Custom("Failed".to_string()));
        assert!(err.is_err());
    }
}
