//! DTOs del asistente conversacional

use serde::{Deserialize, Serialize};

/// Rol de un turno de la conversación
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// Un turno de la conversación
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Request: lista ordenada de turnos
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

/// Response: texto generado o mensaje de fallback con success=false
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub text: String,
}
