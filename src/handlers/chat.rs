//! Chat relay handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::llm::{CompletionRequest, Message, Role};
use crate::response;
use crate::server::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct ChatRequest {
    message: String,
}

#[derive(Serialize)]
pub struct ChatReply {
    response: String,
}

// ============================================================================
// Handler
// ============================================================================

/// POST /chat
///
/// Forwards a single user message to the configured LLM provider and
/// returns the first completion choice.
pub async fn chat(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> Response {
    if req.message.trim().is_empty() {
        return response::bad_request("Message cannot be empty").into_response();
    }

    let completion_request = CompletionRequest {
        model: state.config.model.clone(),
        messages: vec![Message {
            role: Role::User,
            content: req.message,
        }],
    };

    let completion = match state.provider.complete(completion_request).await {
        Ok(c) => c,
        Err(e) => {
            error!("Error calling LLM: {e}");
            return response::internal_error(format!("Failed to get response from LLM: {e}"))
                .into_response();
        }
    };

    let Some(choice) = completion.choices.into_iter().next() else {
        error!("Error calling LLM: provider returned no choices");
        return response::internal_error(
            "Failed to get response from LLM: provider returned no choices",
        )
        .into_response();
    };

    (
        StatusCode::OK,
        Json(ChatReply {
            response: choice.message.content,
        }),
    )
        .into_response()
}

// ============================================================================
// Tests
// ============================================================================
