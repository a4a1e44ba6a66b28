//! HTTP surface: two POST endpoints over the guidance service.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::profile::Profile;
use crate::service::GuidanceService;

/// Fixed apology returned when the chat operation fails unexpectedly.
pub const CHAT_FAILURE_ANSWER: &str = "Sorry — something went wrong generating the answer.";
/// Fixed text returned when the roadmap operation fails unexpectedly.
pub const ROADMAP_FAILURE_TEXT: &str = "Failed to generate roadmap.";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct RoadmapRequest {
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: String,
}

/// Builds the application router.
pub fn router(service: Arc<GuidanceService>) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/roadmap", post(roadmap))
        .with_state(service)
}

async fn chat(
    State(service): State<Arc<GuidanceService>>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ChatResponse>) {
    let profile = request.profile.unwrap_or_default();
    match service.answer_chat(&request.messages, &profile).await {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { answer })),
        Err(err) => {
            tracing::error!(error = %err, "chat request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatResponse {
                    answer: CHAT_FAILURE_ANSWER.to_string(),
                }),
            )
        }
    }
}

async fn roadmap(
    State(service): State<Arc<GuidanceService>>,
    Json(request): Json<RoadmapRequest>,
) -> (StatusCode, Json<RoadmapResponse>) {
    let profile = request.profile.unwrap_or_default();
    match service.build_roadmap(&profile) {
        Ok(roadmap) => (StatusCode::OK, Json(RoadmapResponse { roadmap })),
        Err(err) => {
            tracing::error!(error = %err, "roadmap request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RoadmapResponse {
                    roadmap: ROADMAP_FAILURE_TEXT.to_string(),
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_tolerates_missing_fields() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(request.messages.is_empty());
        assert!(request.profile.is_none());
    }

    #[test]
    fn chat_request_accepts_null_profile() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"messages":[{"role":"user","content":"hi"}],"profile":null}"#)
                .unwrap();
        assert_eq!(request.messages.len(), 1);
        assert!(request.profile.is_none());
    }

    #[test]
    fn roadmap_request_parses_profile() {
        let request: RoadmapRequest =
            serde_json::from_str(r#"{"profile":{"interest":"AI","level":"beginner"}}"#).unwrap();
        let profile = request.profile.unwrap();
        assert_eq!(profile.interest.as_deref(), Some("AI"));
    }

    #[test]
    fn responses_serialize_with_contract_keys() {
        let chat = serde_json::to_value(ChatResponse {
            answer: "a".into(),
        })
        .unwrap();
        assert_eq!(chat["answer"], "a");

        let roadmap = serde_json::to_value(RoadmapResponse {
            roadmap: "r".into(),
        })
        .unwrap();
        assert_eq!(roadmap["roadmap"], "r");
    }
}
