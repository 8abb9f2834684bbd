//! DI "Interfaces"

use crate::core::errors::InferenceError;
use crate::core::messages::ChatMessage;
use async_trait::async_trait;

#[async_trait]
pub trait ConversationService: Send + Sync {
    /// Records a user turn, asks the backend for a reply given the whole transcript, records the
    /// reply and returns its text.
    ///
    /// Turns are handled one at a time. Returns `Err` if the backend could not produce a reply;
    /// what happens to the recorded user turn then depends on the configured failure policy.
    async fn handle_turn(&self, user_text: String) -> Result<String, InferenceError>;

    /// A copy of the transcript as it currently stands.
    async fn transcript(&self) -> Vec<ChatMessage>;
}
