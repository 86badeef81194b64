//! Reply generation clients for the supported providers

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::errors::SolaceError;
use crate::llm::ChatMessage;
use crate::llm::ChatRole;
use crate::llm::ReplyGenerator;

/// Supported reply providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// OpenAI-compatible chat completions API
    OpenAI,
    /// Google Gemini `generateContent` API
    Gemini,
    /// Ollama local chat API
    Ollama,
}

impl LlmProvider {
    /// Parse the configured provider name
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "gemini" => Ok(Self::Gemini),
            "ollama" => Ok(Self::Ollama),
            other => Err(SolaceError::ConfigError(format!(
                "Unknown LLM provider: {other} (expected openai, gemini or ollama)"
            ))),
        }
    }
}

/// Client for generating replies from the configured provider
pub struct LlmClient {
    provider: LlmProvider,
    model: String,
    endpoint: String,
    api_key: String,
    temperature: f64,
    max_tokens: u32,
    client: Client,
}

impl LlmClient {
    /// Create a new reply client from configuration
    ///
    /// # Errors
    /// - Unknown provider name
    /// - HTTP client build errors (invalid configuration)
    pub fn new(config: &AppConfig) -> Result<Self> {
        let provider = LlmProvider::from_name(config.llm_provider())?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| SolaceError::HttpError(e.to_string()))?;

        Ok(Self {
            provider,
            model: config.llm_model().to_string(),
            endpoint: config.llm_endpoint().trim_end_matches('/').to_string(),
            api_key: config.llm_api_key().to_string(),
            temperature: config.llm_temperature(),
            max_tokens: config.llm_max_tokens(),
            client,
        })
    }

    /// Which provider this client talks to
    pub fn provider(&self) -> LlmProvider {
        self.provider
    }

    /// Generate a reply for the assembled conversation
    ///
    /// # Errors
    /// - API request failures (network errors, timeouts, authentication)
    /// - Invalid API responses (malformed JSON, empty candidate list)
    pub async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        match self.provider {
            LlmProvider::OpenAI => self.generate_openai(messages).await,
            LlmProvider::Gemini => self.generate_gemini(messages).await,
            LlmProvider::Ollama => self.generate_ollama(messages).await,
        }
    }

    /// Generate a reply using an OpenAI-compatible chat completions API
    async fn generate_openai(&self, messages: &[ChatMessage]) -> Result<String> {
        #[derive(Serialize)]
        struct OpenAIRequest<'a> {
            model: &'a str,
            messages: &'a [ChatMessage],
            temperature: f64,
            max_tokens: u32,
        }

        #[derive(Deserialize)]
        struct OpenAIResponse {
            choices: Vec<Choice>,
        }

        #[derive(Deserialize)]
        struct Choice {
            message: ChoiceMessage,
        }

        #[derive(Deserialize)]
        struct ChoiceMessage {
            content: String,
        }

        let url = format!("{}/chat/completions", self.endpoint);
        debug!("Calling OpenAI chat API: {}", url);

        let request = OpenAIRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SolaceError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SolaceError::LlmError(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let result: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| SolaceError::LlmError(format!("Failed to parse response: {e}")))?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| SolaceError::LlmError("No choices in response".to_string()))
    }

    /// Generate a reply using the Gemini API
    async fn generate_gemini(&self, messages: &[ChatMessage]) -> Result<String> {
        #[derive(Deserialize)]
        struct GeminiResponse {
            candidates: Vec<Candidate>,
        }

        #[derive(Deserialize)]
        struct Candidate {
            content: CandidateContent,
        }

        #[derive(Deserialize)]
        struct CandidateContent {
            parts: Vec<CandidatePart>,
        }

        #[derive(Deserialize)]
        struct CandidatePart {
            text: String,
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        debug!("Calling Gemini API: {}:generateContent", self.model);

        let request = GeminiRequest {
            contents: gemini_contents(messages),
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SolaceError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SolaceError::LlmError(format!(
                "Gemini API error ({status}): {error_text}"
            )));
        }

        let result: GeminiResponse = response
            .json()
            .await
            .map_err(|e| SolaceError::LlmError(format!("Failed to parse response: {e}")))?;

        result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| SolaceError::LlmError("No candidates in response".to_string()))
    }

    /// Generate a reply using the Ollama chat API
    async fn generate_ollama(&self, messages: &[ChatMessage]) -> Result<String> {
        #[derive(Serialize)]
        struct OllamaRequest<'a> {
            model: &'a str,
            messages: &'a [ChatMessage],
            stream: bool,
        }

        #[derive(Deserialize)]
        struct OllamaResponse {
            message: OllamaMessage,
        }

        #[derive(Deserialize)]
        struct OllamaMessage {
            content: String,
        }

        let url = format!("{}/api/chat", self.endpoint);
        debug!("Calling Ollama chat API: {}", url);

        let request = OllamaRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| SolaceError::HttpError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SolaceError::LlmError(format!(
                "Ollama API error ({status}): {error_text}"
            )));
        }

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| SolaceError::LlmError(format!("Failed to parse response: {e}")))?;

        Ok(result.message.content)
    }
}

#[async_trait]
impl ReplyGenerator for LlmClient {
    async fn generate_reply(&self, messages: &[ChatMessage]) -> Result<String> {
        self.generate(messages).await
    }
}

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, PartialEq, Serialize)]
struct GeminiContent {
    role: &'static str,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, PartialEq, Serialize)]
struct GeminiPart {
    text: String,
}

/// Map generic roles onto Gemini's two-role scheme: the system directive
/// and user turns become `user`, assistant turns become `model`. Turns
/// with empty content are skipped; the API rejects empty parts.
fn gemini_contents(messages: &[ChatMessage]) -> Vec<GeminiContent> {
    messages
        .iter()
        .filter(|message| !message.content.is_empty())
        .map(|message| GeminiContent {
            role: match message.role {
                ChatRole::Assistant => "model",
                ChatRole::System | ChatRole::User => "user",
            },
            parts: vec![GeminiPart {
                text: message.content.clone(),
            }],
        })
        .collect()
}
