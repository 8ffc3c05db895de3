// src/error.rs
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Campos obrigatórios ausentes ou inválidos (mensagem exposta ao cliente)
    #[error("{0}")]
    Validation(String),

    // Registo duplicado (email, RA). A referência responde 400, não 409.
    #[error("{0}")]
    Conflict(String),

    #[error("Credenciais inválidas")]
    InvalidCredentials,

    // Sem sessão ativa
    #[error("Login required")]
    Unauthorized,

    // Sessão existe mas o papel não chega
    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Erro na sessão: {0}")]
    Session(String),

    #[error("Erro ao processar password")]
    PasswordHashing,

    #[error("Erro interno inesperado")]
    Internal,
}

// Como converter AppError numa resposta HTTP (JSON, como a API de referência)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Validation(_) | AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Session(_) | AppError::PasswordHashing | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Loga o erro detalhado no servidor; 4xx é fluxo normal do cliente
        if status.is_server_error() {
            tracing::error!("Erro processado: {:?}", self);
        } else {
            tracing::debug!("Pedido rejeitado: {:?}", self);
        }

        // Corpo {"error": ...} — a mensagem crua é exposta, postura de protótipo
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
