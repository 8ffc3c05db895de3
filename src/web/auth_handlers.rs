// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{LoginPayload, RegistroPayload},
    services::auth_service,
    state::AppState,
    web::mw_auth::Credencial,
};
use axum::{
    extract::{Extension, Json, State},
    response::IntoResponse,
};
use serde_json::json;
use tower_sessions::Session;

// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(payload): Json<RegistroPayload>,
) -> AppResult<impl IntoResponse> {
    let user = auth_service::registrar(
        &state.store,
        payload.name.as_deref(),
        payload.email.as_deref(),
        payload.password.as_deref(),
    )
    .await?;

    Ok(Json(json!({ "success": true, "user": user })))
}

// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> AppResult<impl IntoResponse> {
    let user = auth_service::login(
        &state.store,
        payload.email.as_deref(),
        payload.password.as_deref(),
    )
    .await?;

    // Novo id de sessão antes de a autenticar
    session
        .cycle_id()
        .await
        .map_err(|e| AppError::Session(format!("Falha ao rodar ID: {e}")))?;
    session
        .insert("user_id", user.id)
        .await
        .map_err(|e| AppError::Session(format!("Falha ao inserir na sessão: {e}")))?;
    session
        .insert("user_role", user.role)
        .await
        .map_err(|e| AppError::Session(format!("Falha ao inserir na sessão: {e}")))?;
    session
        .insert("user_name", &user.name)
        .await
        .map_err(|e| AppError::Session(format!("Falha ao inserir na sessão: {e}")))?;

    Ok(Json(json!({ "success": true, "user": user })))
}

// POST /api/auth/logout
pub async fn handle_logout(session: Session) -> AppResult<impl IntoResponse> {
    session
        .delete()
        .await
        .map_err(|e| AppError::Session(format!("Falha ao apagar sessão: {e}")))?;
    tracing::info!("🚪 Sessão encerrada");
    Ok(Json(json!({ "success": true })))
}

// GET /api/auth/me
pub async fn handle_me(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
) -> AppResult<impl IntoResponse> {
    // Pode ser None se o registo tiver sumido; o cliente recebe user: null
    let user = auth_service::usuario_atual(&state.store, credencial.user_id).await;
    Ok(Json(json!({ "user": user })))
}
