// src/web/questao_handlers.rs
use crate::{
    error::AppResult,
    models::{
        questao::{
            AdicionarQuestaoPayload, FiltroQuestoes, NovaQuestaoPayload, NovaRespostaPayload,
            NovoBancoPayload,
        },
        user::Papel,
    },
    services::questao_service,
    state::AppState,
    web::mw_auth::Credencial,
};
use axum::{
    extract::{Extension, Json, Path, Query, State},
    response::IntoResponse,
};
use serde_json::json;

// GET /api/questoes-ingles?tipo=Reading&nivel=A1
pub async fn listar_questoes(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Query(filtro): Query<FiltroQuestoes>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let questoes = questao_service::listar_questoes(&state.store, filtro).await;
    Ok(Json(json!({ "questoes": questoes })))
}

// GET /api/questoes-ingles/{id}
pub async fn buscar_questao(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let questao = questao_service::buscar_questao(&state.store, id).await?;
    Ok(Json(json!({ "questao": questao })))
}

// POST /api/questoes-ingles
pub async fn criar_questao(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<NovaQuestaoPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let id = questao_service::criar_questao(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/bancos-questoes
pub async fn listar_bancos(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let bancos = questao_service::listar_bancos(&state.store).await;
    Ok(Json(json!({ "bancos": bancos })))
}

// POST /api/bancos-questoes
pub async fn criar_banco(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<NovoBancoPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let id = questao_service::criar_banco(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/bancos-questoes/{id}/questoes
pub async fn listar_questoes_do_banco(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(banco_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let questoes = questao_service::listar_questoes_do_banco(&state.store, banco_id).await?;
    Ok(Json(json!({ "questoes": questoes })))
}

// POST /api/bancos-questoes/{id}/questoes
pub async fn adicionar_questao(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(banco_id): Path<i64>,
    Json(payload): Json<AdicionarQuestaoPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    questao_service::adicionar_questao_ao_banco(&state.store, banco_id, payload.questao_id).await?;
    Ok(Json(json!({ "success": true })))
}

// POST /api/respostas-alunos — qualquer sessão autenticada pode registar
pub async fn registrar_resposta(
    State(state): State<AppState>,
    Extension(_credencial): Extension<Credencial>,
    Json(payload): Json<NovaRespostaPayload>,
) -> AppResult<impl IntoResponse> {
    let id = questao_service::registrar_resposta(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// GET /api/atividades/{id}/respostas
pub async fn listar_respostas(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(atividade_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let respostas = questao_service::listar_respostas(&state.store, atividade_id).await;
    Ok(Json(json!({ "respostas": respostas })))
}
