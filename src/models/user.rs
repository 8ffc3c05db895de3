// src/models/user.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Capacidade de autorização do chamador, em ordem crescente.
/// `Anonimo` cobre tanto "sem sessão" quanto "sessão órfã" (registo sumiu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Papel {
    Anonimo,
    Professor,
    Admin,
}

// Representa um utilizador guardado no store.
// Sem derive(Serialize): o digest nunca pode vazar numa resposta.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub role: Papel,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Vista pública devolvida pela API (id, email, name, role).
    pub fn publico(&self) -> UsuarioPublico {
        UsuarioPublico {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UsuarioPublico {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Papel,
}

// Registo de professor ligado a um utilizador não-admin
#[derive(Debug, Clone, Serialize)]
pub struct Professor {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub nome: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

// --- Payloads de autenticação ---

#[derive(Debug, Deserialize)]
pub struct RegistroPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}
