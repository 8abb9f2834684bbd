//! Ollama chat client

use crate::core::errors::InferenceError;
use crate::core::messages::ChatMessage;
use crate::infrastructure::config::ChatSettings;
use crate::infrastructure::traits::InferenceBackend;
use async_trait::async_trait;
use di::{Ref, inject, injectable};
use log::debug;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

pub struct OllamaBackend {
    http: HttpClient,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

#[injectable(InferenceBackend)]
impl OllamaBackend {
    #[inject]
    pub fn create(settings: Ref<ChatSettings>) -> OllamaBackend {
        OllamaBackend::new(&settings.ollama_host)
    }
}

impl OllamaBackend {
    pub fn new(base_url: &str) -> OllamaBackend {
        OllamaBackend {
            http: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[async_trait]
impl InferenceBackend for OllamaBackend {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatMessage, InferenceError> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            model,
            messages,
            stream: false,
        };

        debug!("POST {url} model={model} messages={}", messages.len());

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| InferenceError::BackendUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(InferenceError::BackendError(reason));
        }

        let body = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| InferenceError::BackendError(format!("malformed reply: {e}")))?;

        body.message
            .map(|m| ChatMessage::assistant(m.content))
            .ok_or_else(|| InferenceError::BackendError("reply carried no message".to_owned()))
    }
}
