use async_trait::async_trait;
use fitcoach_rust::{
    llm::{
        ChatClient, ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse,
        ResponseMessage,
    },
    Error, Result,
};
use std::sync::{Arc, Mutex};

/// Mock chat client for testing
#[derive(Debug)]
pub struct MockChatClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub error: Option<String>,
}

impl MockChatClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::transport(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::transport("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed envelope whose single choice carries `content`.
pub fn completion_with_content(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: Some("chatcmpl-test".to_string()),
        model: Some("gpt-3.5-turbo".to_string()),
        choices: vec![ChatCompletionChoice {
            index: 0,
            message: Some(ResponseMessage {
                role: "assistant".to_string(),
                content: Some(content.to_string()),
            }),
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

/// An envelope the provider should never send: zero choices.
pub fn completion_without_choices() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: Some("chatcmpl-test".to_string()),
        model: Some("gpt-3.5-turbo".to_string()),
        choices: vec![],
        usage: None,
    }
}

/// An envelope with a choice but no message content.
pub fn completion_without_content() -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: Some("chatcmpl-test".to_string()),
        model: Some("gpt-3.5-turbo".to_string()),
        choices: vec![ChatCompletionChoice {
            index: 0,
            message: Some(ResponseMessage {
                role: "assistant".to_string(),
                content: None,
            }),
            finish_reason: None,
        }],
        usage: None,
    }
}
