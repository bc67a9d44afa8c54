use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use garagehub_backend::build_router;
use garagehub_backend::config::environment::EnvironmentConfig;
use garagehub_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🔧 GarageHub - Backend de gestión de taller y flota");
    info!("==================================================");

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_addr().parse()?;

    // Colecciones sembradas con fixtures: un reinicio vuelve al estado semilla
    let state = AppState::new(config);

    // Barrido periódico de sesiones expiradas
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            sessions.cleanup_expired().await;
        }
    });

    let app = build_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar usuario");
    info!("   POST /api/auth/login - Login con credenciales");
    info!("   POST /api/auth/google - Login con id_token de Google");
    info!("   POST /api/auth/logout - Cerrar sesión");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🚗 Registros (protegidos):");
    info!("   GET/POST /api/vehicles - Listar/crear vehículos");
    info!("   GET/PUT/DELETE /api/vehicles/:id");
    info!("   GET/POST /api/invoices - Listar/crear facturas");
    info!("   GET/PUT/DELETE /api/invoices/:id");
    info!("   GET/POST /api/inventory - Listar/crear artículos");
    info!("   GET/PUT/DELETE /api/inventory/:id");
    info!("   GET/POST /api/payments - Listar/registrar pagos");
    info!("   GET/PUT/DELETE /api/payments/:id");
    info!("📊 Dashboard (protegido):");
    info!("   GET  /api/dashboard/summary - Resumen de secciones");
    info!("🤖 Asistente:");
    info!("   POST /api/assistant/chat - Chat del asistente");
    info!("💳 Checkout:");
    info!("   POST /api/pay/mpesa/stkpush - STK push M-Pesa");
    info!("   POST /api/pay/mpesa/callback - Callback Daraja");
    info!("   POST /api/pay/stripe/intent - PaymentIntent Stripe");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
