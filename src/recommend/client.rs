use super::prompt;
use super::types::{Recommendation, RecommendationRequest};
use crate::llm::{ChatClient, ChatCompletionRequest, ChatMessage};
use crate::{config::LlmConfig, Error, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sampling temperature for recommendation prompts. Deliberately above zero:
/// two identical requests are allowed to produce different plans.
const TEMPERATURE: f32 = 0.7;

/// Turns (goal, experience, weekly frequency) into a recommendation by
/// prompting a chat-completion API, or fails explicitly. Holds only
/// read-only state, so concurrent fetches need no coordination.
pub struct RecommendationClient {
    chat: Arc<dyn ChatClient>,
    model: String,
}

impl RecommendationClient {
    /// Construction requires an already-valid configuration; a missing or
    /// placeholder credential is rejected here rather than at call time.
    pub fn new(config: &LlmConfig, chat: Arc<dyn ChatClient>) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            chat,
            model: config.model.clone(),
        })
    }

    /// One prompt, one network round trip, one parse. No retries and no
    /// caching; the remote model is non-deterministic, so identical inputs
    /// may legitimately yield different plans.
    pub async fn fetch_recommendation(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation> {
        let chat_request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(prompt::SYSTEM_PROMPT),
                ChatMessage::user(prompt::build_user_prompt(request)),
            ],
            temperature: TEMPERATURE,
        };

        let response = match self.chat.create_chat_completion(chat_request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Recommendation request failed in transport: {}", e);
                return Err(e);
            }
        };

        // An empty or content-less envelope is a transport problem, not a
        // parse problem: the provider broke its own protocol.
        let choice = response.choices.into_iter().next().ok_or_else(|| {
            warn!("Chat completion response contained no choices");
            Error::transport("chat completion response contained no choices")
        })?;
        let content = choice
            .message
            .and_then(|message| message.content)
            .ok_or_else(|| {
                warn!("Chat completion choice carried no message content");
                Error::transport("chat completion choice carried no message content")
            })?;

        debug!(
            "Parsing recommendation payload ({} bytes)",
            content.len()
        );

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            warn!("Model reply was not valid JSON: {}", e);
            Error::response_shape(format!("model reply is not valid JSON: {e}"))
        })?;

        Ok(Recommendation::from_value(value))
    }
}
