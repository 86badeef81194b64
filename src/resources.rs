//! Static self-care and crisis resources
//!
//! Served as-is by the resources endpoint. No LLM or database involved;
//! the crisis lines in particular must never depend on a collaborator
//! being reachable.

use serde::Deserialize;
use serde::Serialize;

const DAILY_TIPS: [&str; 5] = [
    "Practice deep breathing exercises for 5 minutes",
    "Take a short walk outside if possible",
    "Write down three things you're grateful for",
    "Stay hydrated and eat nutritious meals",
    "Connect with a friend or family member",
];

const COPING_STRATEGIES: [&str; 5] = [
    "Progressive muscle relaxation",
    "Mindfulness meditation",
    "Journaling your thoughts and feelings",
    "Regular exercise or movement",
    "Establishing a consistent sleep routine",
];

/// Always-available crisis contact points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyResources {
    pub crisis_hotline: String,
    pub text_line: String,
    pub emergency: String,
}

/// The full resource bundle returned by the resources endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportResources {
    pub daily_tips: Vec<String>,
    pub coping_strategies: Vec<String>,
    pub emergency_resources: EmergencyResources,
}

impl SupportResources {
    /// The built-in bundle
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            daily_tips: DAILY_TIPS.iter().map(ToString::to_string).collect(),
            coping_strategies: COPING_STRATEGIES.iter().map(ToString::to_string).collect(),
            emergency_resources: EmergencyResources {
                crisis_hotline: "988 (Suicide & Crisis Lifeline)".to_string(),
                text_line: "Text HOME to 741741".to_string(),
                emergency: "Call 911 or go to nearest emergency room".to_string(),
            },
        }
    }
}
