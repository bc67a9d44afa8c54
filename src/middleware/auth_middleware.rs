//! Middleware de autenticación
//!
//! Puerta de acceso de los módulos protegidos: sin sesión válida la
//! request se rechaza con 401 (el cliente redirige a la pantalla de
//! login al recibirlo).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::services::session_service::SessionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::extract_token_from_header;

/// Usuario autenticado de la request, expuesto como extensión de Axum
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub email: String,
}

/// Validar el Bearer token y adjuntar el usuario a la request
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = extract_token_from_header(auth_header)?.to_string();

    let session_service = SessionService::new(&state);
    let session = session_service.authenticate(&token).await?;

    request.extensions_mut().insert(CurrentUser {
        email: session.email,
    });

    Ok(next.run(request).await)
}
