// src/web/turma_handlers.rs
use crate::{
    error::AppResult,
    models::{turma::NovaTurmaPayload, user::Papel},
    services::turma_service,
    state::AppState,
    web::mw_auth::Credencial,
};
use axum::{
    extract::{Extension, Json, Path, State},
    response::IntoResponse,
};
use serde_json::json;

// GET /api/turmas
pub async fn listar_turmas(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let turmas =
        turma_service::listar_turmas(&state.store, credencial.user_id, credencial.papel).await;
    Ok(Json(json!({ "turmas": turmas })))
}

// POST /api/turmas
pub async fn criar_turma(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<NovaTurmaPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    let id = turma_service::criar_turma(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/turmas/{id}/etapas
pub async fn listar_etapas(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(turma_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let etapas = turma_service::listar_etapas(&state.store, turma_id).await;
    Ok(Json(json!({ "etapas": etapas })))
}

// GET /api/turmas/{id}/matriculas — apenas as ativas
pub async fn listar_matriculas(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(turma_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let matriculas = turma_service::listar_matriculas_ativas(&state.store, turma_id).await;
    Ok(Json(json!({ "matriculas": matriculas })))
}
