//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: las colecciones en memoria sembradas con
//! fixtures, el directorio de usuarios y el registro de sesiones.

use bcrypt::{hash, DEFAULT_COST};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::checkout::CheckoutPayment;
use crate::models::inventory::InventoryItem;
use crate::models::invoice::Invoice;
use crate::models::payment::Payment;
use crate::models::user::User;
use crate::models::vehicle::Vehicle;
use crate::store::fixtures;
use crate::store::record_store::RecordStore;

/// Sesión activa: el flag booleano ambiente del cliente se convierte en
/// un objeto explícito con emisión y expiración
#[derive(Clone, Debug)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, email: String, expires_in_seconds: u64) -> Self {
        let issued_at = Utc::now();
        Self {
            token,
            email,
            issued_at,
            expires_at: issued_at + chrono::Duration::seconds(expires_in_seconds as i64),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Registro de sesiones activas, indexado por access token
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: Session) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session);
    }

    /// Obtener la sesión si existe y no ha expirado
    pub async fn get_live(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).filter(|s| !s.is_expired()).cloned()
    }

    /// Eliminar la sesión (logout); devuelve true si existía
    pub async fn remove(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }

    /// Limpiar sesiones expiradas
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| !session.is_expired());
    }
}

/// Directorio de usuarios en memoria
#[derive(Clone, Default)]
pub struct UserDirectory {
    users: Arc<RwLock<Vec<User>>>,
}

impl UserDirectory {
    pub fn new(seed: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let users = self.users.read().await;
        users.iter().find(|u| u.email == email).cloned()
    }

    pub async fn insert(&self, user: User) {
        let mut users = self.users.write().await;
        users.push(user);
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub http_client: Client,
    pub vehicles: RecordStore<Vehicle>,
    pub invoices: RecordStore<Invoice>,
    pub inventory: RecordStore<InventoryItem>,
    pub payments: RecordStore<Payment>,
    pub checkout_payments: RecordStore<CheckoutPayment>,
    pub users: UserDirectory,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
            vehicles: RecordStore::new(fixtures::seed_vehicles()),
            invoices: RecordStore::new(fixtures::seed_invoices()),
            inventory: RecordStore::new(fixtures::seed_inventory()),
            payments: RecordStore::new(fixtures::seed_payments()),
            checkout_payments: RecordStore::new(Vec::new()),
            users: UserDirectory::new(Self::seed_users()),
            sessions: SessionRegistry::new(),
        }
    }

    /// Usuario de prueba del entorno de desarrollo
    fn seed_users() -> Vec<User> {
        vec![User::new(
            "test@example.com".to_string(),
            hash("password123", DEFAULT_COST).unwrap(),
        )]
    }
}
