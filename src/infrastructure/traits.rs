//! Infrastructure traits, used for DI on higher levels

use crate::core::errors::InferenceError;
use crate::core::messages::ChatMessage;
use async_trait::async_trait;

#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Generates the next message of the conversation using the given model.
    async fn chat(&self, model: &str, messages: &[ChatMessage])
    -> Result<ChatMessage, InferenceError>;
}
