// src/web/admin_handlers.rs
//
// Operações administrativas: professores, alunos, matrículas e configurações.
use crate::{
    error::AppResult,
    models::{
        configuracao::ConfiguracaoPayload,
        turma::{NovaMatriculaPayload, NovoAlunoPayload, TransferenciaPayload},
        user::Papel,
    },
    services::{config_service, turma_service},
    state::AppState,
    web::mw_auth::Credencial,
};
use axum::{
    extract::{Extension, Json, Path, State},
    response::IntoResponse,
};
use serde_json::json;

// GET /api/professores
pub async fn listar_professores(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    let professores = turma_service::listar_professores(&state.store).await;
    Ok(Json(json!({ "professores": professores })))
}

// GET /api/alunos
pub async fn listar_alunos(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Professor)?;
    let alunos = turma_service::listar_alunos(&state.store).await;
    Ok(Json(json!({ "alunos": alunos })))
}

// POST /api/alunos
pub async fn criar_aluno(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<NovoAlunoPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    let id = turma_service::criar_aluno(&state.store, payload).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// POST /api/matriculas
pub async fn criar_matricula(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<NovaMatriculaPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    let id = turma_service::matricular(&state.store, payload.aluno_id, payload.turma_id).await?;
    Ok(Json(json!({ "success": true, "id": id })))
}

// POST /api/matriculas/transferir
pub async fn transferir_aluno(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<TransferenciaPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    turma_service::transferir_aluno(&state.store, payload.aluno_id, payload.nova_turma_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Histórico preservado e matrícula anterior encerrada."
    })))
}

// GET /api/configuracoes/{chave}
pub async fn obter_configuracao(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Path(chave): Path<String>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    // Ausência é um valor para o cliente, não um 404
    let configuracao = config_service::obter(&state.store, &chave).await;
    Ok(Json(json!({ "configuracao": configuracao })))
}

// POST /api/configuracoes
pub async fn definir_configuracao(
    State(state): State<AppState>,
    Extension(credencial): Extension<Credencial>,
    Json(payload): Json<ConfiguracaoPayload>,
) -> AppResult<impl IntoResponse> {
    credencial.exigir(Papel::Admin)?;
    config_service::definir(&state.store, payload).await?;
    Ok(Json(json!({ "success": true })))
}
