//! GarageHub backend
//!
//! API de gestión de taller y flota: vehículos, facturas, inventario y
//! pagos sobre colecciones en memoria, con sesiones autenticadas,
//! asistente conversacional y checkout contra M-Pesa/Stripe.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::json;

use middleware::auth_middleware::auth_middleware;
use state::AppState;

/// Construir el router completo de la aplicación.
/// Los módulos de registros y el dashboard quedan detrás de la puerta
/// de autenticación; auth, asistente y checkout van sin proteger.
pub fn build_router(state: AppState) -> Router {
    // En desarrollo CORS es permisivo; en producción se restringe a los
    // orígenes configurados
    let cors = if state.config.is_development() {
        middleware::cors::cors_middleware()
    } else {
        middleware::cors::cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    let protected = Router::new()
        .nest("/api/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/invoices", routes::invoice_routes::create_invoice_router())
        .nest("/api/inventory", routes::inventory_routes::create_inventory_router())
        .nest("/api/payments", routes::payment_routes::create_payment_router())
        .nest("/api/dashboard", routes::dashboard_routes::create_dashboard_router())
        .route_layer(from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/assistant", routes::assistant_routes::create_assistant_router())
        .nest("/api/pay", routes::checkout_routes::create_checkout_router())
        .merge(protected)
        .layer(cors)
        .with_state(state)
}

/// Health check simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "garagehub-backend",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
