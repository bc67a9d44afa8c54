//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Las credenciales de proveedores externos (Gemini, M-Pesa, Stripe) son
//! opcionales; los endpoints que las necesitan fallan con un error controlado
//! si no están configuradas.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub cors_origins: Vec<String>,
    // Asistente conversacional (API estilo Gemini generateContent)
    pub assistant_api_url: String,
    pub assistant_model: String,
    pub assistant_api_key: Option<String>,
    // Google OAuth (verificación de id_token)
    pub google_tokeninfo_url: String,
    // M-Pesa Daraja
    pub mpesa_api_url: String,
    pub mpesa_consumer_key: Option<String>,
    pub mpesa_consumer_secret: Option<String>,
    pub mpesa_business_shortcode: Option<String>,
    pub mpesa_passkey: Option<String>,
    pub mpesa_callback_url: String,
    // Stripe
    pub stripe_api_url: String,
    pub stripe_secret_key: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "garagehub-dev-secret".to_string()),
            jwt_expiration: env::var("JWT_EXPIRATION")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .expect("JWT_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            assistant_api_url: env::var("ASSISTANT_API_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".to_string()
            }),
            assistant_model: env::var("ASSISTANT_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            assistant_api_key: env::var("ASSISTANT_API_KEY").ok(),
            google_tokeninfo_url: env::var("GOOGLE_TOKENINFO_URL")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/tokeninfo".to_string()),
            mpesa_api_url: env::var("MPESA_API_URL")
                .unwrap_or_else(|_| "https://sandbox.safaricom.co.ke".to_string()),
            mpesa_consumer_key: env::var("MPESA_CONSUMER_KEY").ok(),
            mpesa_consumer_secret: env::var("MPESA_CONSUMER_SECRET").ok(),
            mpesa_business_shortcode: env::var("MPESA_BUSINESS_SHORTCODE").ok(),
            mpesa_passkey: env::var("MPESA_PASSKEY").ok(),
            mpesa_callback_url: env::var("MPESA_CALLBACK_URL")
                .unwrap_or_else(|_| "https://mydomain.com/api/pay/mpesa/callback".to_string()),
            stripe_api_url: env::var("STRIPE_API_URL")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            stripe_secret_key: env::var("STRIPE_SECRET_KEY").ok(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
