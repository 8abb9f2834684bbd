//! Chat endpoint

use crate::api::ApiError;
use crate::api::chat::schemas::{ChatReply, ChatRequest};
use crate::core::traits::ConversationService;
use axum::routing::post;
use axum::{Json, Router};
use di_axum::Inject;

pub fn router() -> Router {
    Router::new().route("/chat", post(chat))
}

async fn chat(
    Inject(conversation_service): Inject<dyn ConversationService>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let response = conversation_service
        .handle_turn(request.user_input)
        .await?;

    Ok(Json(ChatReply { response }))
}

pub mod schemas {
    use serde::{Deserialize, Serialize};

    #[derive(Deserialize, Debug)]
    pub struct ChatRequest {
        pub user_input: String,
    }

    #[derive(Serialize, Debug)]
    pub struct ChatReply {
        pub response: String,
    }
}
