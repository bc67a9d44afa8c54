//! Modelo de User
//!
//! Usuario de la plataforma. Las credenciales se guardan como hash bcrypt;
//! el struct nunca se serializa directamente hacia la API (ver UserResponse).

use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
}

impl User {
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            is_active: true,
        }
    }
}
