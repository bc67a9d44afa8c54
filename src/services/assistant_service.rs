//! Servicio del asistente conversacional
//!
//! Reenvía la conversación a un endpoint estilo Gemini `generateContent`.
//! Cualquier fallo (clave ausente, error HTTP, respuesta sin texto) se
//! degrada al mensaje de fallback con success=false: el chat nunca
//! devuelve un error HTTP al cliente.

use reqwest::Client;
use serde_json::json;
use tracing::error;

use crate::config::environment::EnvironmentConfig;
use crate::dto::assistant_dto::{ChatResponse, ChatRole, ChatTurn};
use crate::utils::errors::{AppError, AppResult};

const SYSTEM_PROMPT: &str = "You are a helpful AI assistant for GarageHub, a car and garage \
management platform. Keep your answers concise, friendly, and helpful.";

pub const FALLBACK_REPLY: &str =
    "I'm sorry, I encountered an error connecting to my brain. Please try again later.";

pub struct AssistantService {
    config: EnvironmentConfig,
    http_client: Client,
}

impl AssistantService {
    pub fn new(config: EnvironmentConfig, http_client: Client) -> Self {
        Self { config, http_client }
    }

    /// Generar la respuesta del asistente para la conversación dada
    pub async fn generate_reply(&self, messages: &[ChatTurn]) -> ChatResponse {
        match self.call_upstream(messages).await {
            Ok(text) => ChatResponse { success: true, text },
            Err(e) => {
                error!("Failed to generate chat response: {}", e);
                ChatResponse {
                    success: false,
                    text: FALLBACK_REPLY.to_string(),
                }
            }
        }
    }

    async fn call_upstream(&self, messages: &[ChatTurn]) -> AppResult<String> {
        let api_key = self
            .config
            .assistant_api_key
            .as_deref()
            .ok_or_else(|| AppError::ExternalApi("Assistant API key not configured".to_string()))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.assistant_api_url, self.config.assistant_model, api_key
        );

        let contents: Vec<serde_json::Value> = messages
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    ChatRole::User => "user",
                    ChatRole::Model => "model",
                };
                json!({ "role": role, "parts": [{ "text": turn.content }] })
            })
            .collect();

        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_PROMPT }] },
            "contents": contents,
        });

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Assistant request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Assistant endpoint returned {}",
                response.status()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Invalid assistant response: {}", e)))?;

        let text: String = payload["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AppError::ExternalApi("Assistant response contained no text".to_string()));
        }

        Ok(text)
    }
}
