use axum::{extract::State, routing::post, Json, Router};

use crate::dto::assistant_dto::{ChatRequest, ChatResponse};
use crate::services::assistant_service::AssistantService;
use crate::state::AppState;

pub fn create_assistant_router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

/// El chat siempre responde 200: un fallo del proveedor se degrada al
/// mensaje de fallback con success=false
async fn chat(State(state): State<AppState>, Json(request): Json<ChatRequest>) -> Json<ChatResponse> {
    let service = AssistantService::new(state.config.clone(), state.http_client.clone());
    Json(service.generate_reply(&request.messages).await)
}
