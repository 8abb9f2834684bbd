//! Implementations for the service the app needs.
//!

use crate::core::errors::InferenceError;
use crate::core::messages::ChatMessage;
use crate::core::traits::ConversationService;
use crate::core::transcript::Transcript;
use crate::infrastructure::config::{ChatSettings, FailurePolicy};
use crate::infrastructure::traits::InferenceBackend;
use async_trait::async_trait;
use di::{Ref, inject, injectable};
use log::{debug, warn};
use tokio::sync::Mutex;

/// Keeps one process-wide transcript in memory.
///
/// The lock is held for the whole turn, backend call included, so concurrent callers are
/// served one after another and each sees the completed turns of those before it.
pub struct InMemoryConversationService {
    backend: Ref<dyn InferenceBackend>,
    model: String,
    failure_policy: FailurePolicy,
    transcript: Mutex<Transcript>,
}

#[injectable(ConversationService)]
impl InMemoryConversationService {
    #[inject]
    pub fn create(
        backend: Ref<dyn InferenceBackend>,
        settings: Ref<ChatSettings>,
    ) -> InMemoryConversationService {
        InMemoryConversationService::new(backend, &settings)
    }
}

impl InMemoryConversationService {
    pub fn new(
        backend: Ref<dyn InferenceBackend>,
        settings: &ChatSettings,
    ) -> InMemoryConversationService {
        InMemoryConversationService {
            backend,
            model: settings.model.clone(),
            failure_policy: settings.failure_policy,
            transcript: Mutex::new(Transcript::seeded(settings.greeting.clone())),
        }
    }
}

#[async_trait]
impl ConversationService for InMemoryConversationService {
    async fn handle_turn(&self, user_text: String) -> Result<String, InferenceError> {
        let mut transcript = self.transcript.lock().await;

        transcript.push(ChatMessage::user(user_text));
        debug!(
            "sending {} messages to model {}",
            transcript.len(),
            self.model
        );

        match self.backend.chat(&self.model, transcript.messages()).await {
            Ok(reply) => {
                transcript.push(ChatMessage::assistant(reply.content.clone()));
                Ok(reply.content)
            }
            Err(e) => {
                match self.failure_policy {
                    FailurePolicy::Retain => {
                        warn!("turn failed, keeping unanswered user message: {e}");
                    }
                    FailurePolicy::Rollback => {
                        transcript.discard_dangling_user_turn();
                        warn!("turn failed, user message rolled back: {e}");
                    }
                }
                Err(e)
            }
        }
    }

    async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().await.messages().to_vec()
    }
}
