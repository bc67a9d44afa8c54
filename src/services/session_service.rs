//! Servicio de sesiones
//!
//! Registro, login (credenciales o id_token de Google), logout y
//! validación de sesión. Un login exitoso emite un JWT y registra la
//! sesión en el `SessionRegistry`; el logout la retira, con lo que el
//! token deja de servir aunque el JWT en sí no haya expirado.

use bcrypt::{hash, verify, DEFAULT_COST};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Client;
use tracing::{info, warn};
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{GoogleTokenRequest, LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::models::user::User;
use crate::state::{AppState, Session, SessionRegistry, UserDirectory};
use crate::utils::errors::{conflict_error, AppError, AppResult};
use crate::utils::jwt::{self, JwtConfig};

const BAD_CREDENTIALS: &str = "Incorrect username or password";

pub struct SessionService {
    config: EnvironmentConfig,
    http_client: Client,
    users: UserDirectory,
    sessions: SessionRegistry,
}

impl SessionService {
    pub fn new(state: &AppState) -> Self {
        Self {
            config: state.config.clone(),
            http_client: state.http_client.clone(),
            users: state.users.clone(),
            sessions: state.sessions.clone(),
        }
    }

    /// Registrar un usuario nuevo
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        request.validate()?;

        if self.users.find_by_email(&request.email).await.is_some() {
            return Err(conflict_error("User", "email", &request.email));
        }

        let password_hash =
            hash(&request.password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;
        let user = User::new(request.email, password_hash);
        self.users.insert(user.clone()).await;

        info!("👤 Usuario registrado: {}", user.email);
        Ok(UserResponse::from(&user))
    }

    /// Login con email y password
    pub async fn login(&self, request: LoginRequest) -> AppResult<TokenResponse> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await
            .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.to_string()))?;

        let password_ok = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        if !password_ok || !user.is_active {
            return Err(AppError::Unauthorized(BAD_CREDENTIALS.to_string()));
        }

        self.open_session(&user.email).await
    }

    /// Login con id_token de Google: verifica el token contra el endpoint
    /// tokeninfo y auto-registra al usuario si no existe
    pub async fn google_login(&self, request: GoogleTokenRequest) -> AppResult<TokenResponse> {
        let url = format!("{}?id_token={}", self.config.google_tokeninfo_url, request.token);
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Google tokeninfo request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::BadRequest("Invalid Google token".to_string()));
        }

        let id_info: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid Google token: {}", e)))?;

        let email = id_info
            .get("email")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AppError::BadRequest("Token does not contain email".to_string()))?
            .to_string();

        if self.users.find_by_email(&email).await.is_none() {
            // Password aleatorio: el usuario entra siempre vía Google
            let random_password: String = rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(24)
                .map(char::from)
                .collect();
            let password_hash =
                hash(&random_password, DEFAULT_COST).map_err(|e| AppError::Hash(e.to_string()))?;
            self.users.insert(User::new(email.clone(), password_hash)).await;
            info!("👤 Usuario auto-registrado vía Google: {}", email);
        }

        self.open_session(&email).await
    }

    /// Cerrar la sesión asociada al token
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        if self.sessions.remove(token).await {
            info!("👋 Sesión cerrada");
            Ok(())
        } else {
            warn!("Logout con token sin sesión activa");
            Err(AppError::Unauthorized("Session not found".to_string()))
        }
    }

    /// Validar el token: firma y expiración del JWT más sesión viva en el
    /// registro (un token con logout previo se rechaza aquí)
    pub async fn authenticate(&self, token: &str) -> AppResult<Session> {
        let jwt_config = JwtConfig::from(&self.config);
        jwt::verify_token(token, &jwt_config)?;

        self.sessions
            .get_live(token)
            .await
            .ok_or_else(|| AppError::Unauthorized("Session is no longer active".to_string()))
    }

    /// Vista pública del usuario autenticado
    pub async fn current_user(&self, email: &str) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", email)))?;
        Ok(UserResponse::from(&user))
    }

    async fn open_session(&self, email: &str) -> AppResult<TokenResponse> {
        let jwt_config = JwtConfig::from(&self.config);
        let token = jwt::generate_token(email, &jwt_config)?;

        let session = Session::new(token.clone(), email.to_string(), jwt_config.expiration);
        let expires_at = session.expires_at;
        self.sessions.insert(session).await;

        info!("🔐 Sesión abierta para {}", email);
        Ok(TokenResponse {
            access_token: token,
            token_type: "bearer".to_string(),
            expires_at,
        })
    }
}
