// src/web/atividade_handlers.rs
use crate::{
    error::AppResult,
    models::{
        atividade::{FeedbackPayload, LancarNotaPayload, NovaAtividadePayload},
        user::Papel,
    },
    services::atividade_service,
    state::AppState,
    web::mw_auth::Credencial,
};
use axum::{
    extract::{Extension, Json, Path, State},
    response::IntoResponse,
};
use serde_json::json;

// POST /api/atividades
pub async fn criar_atividade(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<NovaAtividadePayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let id = atividade_service::criar_atividade(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/etapas/{id}/atividades
pub async fn listar_atividades(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(etapa_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let (atividades, total) = atividade_service::listar_atividades(&state.store, etapa_id).await;
    Ok(Json(json!({
        "atividades": atividades,
        "totalPontosAlocados": total
    })))
}

// POST /api/notas (upsert por atividade + aluno)
pub async fn lancar_nota(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<LancarNotaPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let id = atividade_service::lancar_nota(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/atividades/{id}/notas
pub async fn listar_notas(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(atividade_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let notas = atividade_service::listar_notas(&state.store, atividade_id).await;
    Ok(Json(json!({ "notas": notas })))
}

// POST /api/feedbacks (upsert por etapa + aluno)
pub async fn registrar_feedback(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<FeedbackPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let id = atividade_service::registrar_feedback(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/etapas/{id}/feedbacks
pub async fn listar_feedbacks(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(etapa_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let feedbacks = atividade_service::listar_feedbacks(&state.store, etapa_id).await;
    Ok(Json(json!({ "feedbacks": feedbacks })))
}
