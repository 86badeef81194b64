//! System directives for the support companion

use crate::config::AppConfig;

/// Built-in system directive for the supportive-chat pipeline
pub const SUPPORT_SYSTEM_PROMPT: &str = r"You are Solace, a supportive companion focused on emotional well-being.

Guidelines:
1. Listen actively and respond with warmth and empathy.
2. Acknowledge and validate feelings before offering any perspective.
3. Encourage healthy coping strategies such as journaling, breathing exercises, or reaching out to trusted people.
4. You are not a therapist or doctor. Never diagnose, prescribe, or give medical advice.
5. If the conversation suggests a crisis or thoughts of self-harm, gently urge contacting a mental health professional or a crisis line such as the 988 Suicide & Crisis Lifeline right away.
6. Keep replies concise, warm, and conversational.";

/// The system directive to use: the configured override when present,
/// otherwise the built-in one
pub fn system_directive(config: &AppConfig) -> String {
    config
        .system_prompt()
        .map_or_else(|| SUPPORT_SYSTEM_PROMPT.to_string(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_directive_mentions_crisis_line() {
        assert!(SUPPORT_SYSTEM_PROMPT.contains("988"));
        assert!(SUPPORT_SYSTEM_PROMPT.contains("not a therapist"));
    }

    #[test]
    fn test_config_override_wins() {
        let mut config = AppConfig::default();
        config.chat.system_prompt = Some("Answer in haiku.".to_string());
        assert_eq!(system_directive(&config), "Answer in haiku.");
    }

    #[test]
    fn test_default_is_builtin() {
        let config = AppConfig::default();
        assert_eq!(system_directive(&config), SUPPORT_SYSTEM_PROMPT);
    }
}
