mod client;
mod types;

pub use client::{ChatClient, OpenAiClient};
pub use types::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ResponseMessage, Usage,
};
