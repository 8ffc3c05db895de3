// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        admin_handlers, atividade_handlers, auth_handlers, mw_auth, pages, questao_handlers,
        turma_handlers,
    },
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Rotas Públicas ---
    // Páginas (cascas) + registo e login
    let public_routes = Router::new()
        .route("/", get(pages::index))
        .route("/login", get(pages::login))
        .route("/dashboard", get(pages::dashboard))
        .route("/api/auth/register", post(auth_handlers::handle_register))
        .route("/api/auth/login", post(auth_handlers::handle_login));

    // --- Rotas Autenticadas ---
    // Todas passam pelo middleware `autenticar`, que resolve a Credencial do
    // chamador uma vez; cada handler exige depois o papel mínimo.
    let api_routes = Router::new()
        .route("/api/auth/logout", post(auth_handlers::handle_logout))
        .route("/api/auth/me", get(auth_handlers::handle_me))
        // Turmas e etapas
        .route(
            "/api/turmas",
            get(turma_handlers::listar_turmas).post(turma_handlers::criar_turma),
        )
        .route("/api/turmas/{id}/etapas", get(turma_handlers::listar_etapas))
        .route(
            "/api/turmas/{id}/matriculas",
            get(turma_handlers::listar_matriculas),
        )
        // Pessoas
        .route("/api/professores", get(admin_handlers::listar_professores))
        .route(
            "/api/alunos",
            get(admin_handlers::listar_alunos).post(admin_handlers::criar_aluno),
        )
        .route("/api/matriculas", post(admin_handlers::criar_matricula))
        .route(
            "/api/matriculas/transferir",
            post(admin_handlers::transferir_aluno),
        )
        // Atividades, notas e feedbacks
        .route("/api/atividades", post(atividade_handlers::criar_atividade))
        .route(
            "/api/etapas/{id}/atividades",
            get(atividade_handlers::listar_atividades),
        )
        .route(
            "/api/atividades/{id}/notas",
            get(atividade_handlers::listar_notas),
        )
        .route("/api/notas", post(atividade_handlers::lancar_nota))
        .route(
            "/api/etapas/{id}/feedbacks",
            get(atividade_handlers::listar_feedbacks),
        )
        .route("/api/feedbacks", post(atividade_handlers::registrar_feedback))
        // Banco de questões de inglês
        .route(
            "/api/questoes-ingles",
            get(questao_handlers::listar_questoes).post(questao_handlers::criar_questao),
        )
        .route(
            "/api/questoes-ingles/{id}",
            get(questao_handlers::buscar_questao),
        )
        .route(
            "/api/bancos-questoes",
            get(questao_handlers::listar_bancos).post(questao_handlers::criar_banco),
        )
        .route(
            "/api/bancos-questoes/{id}/questoes",
            get(questao_handlers::listar_questoes_do_banco)
                .post(questao_handlers::adicionar_questao),
        )
        .route(
            "/api/respostas-alunos",
            post(questao_handlers::registrar_resposta),
        )
        .route(
            "/api/atividades/{id}/respostas",
            get(questao_handlers::listar_respostas),
        )
        // Configurações da escola
        .route(
            "/api/configuracoes",
            post(admin_handlers::definir_configuracao),
        )
        .route(
            "/api/configuracoes/{chave}",
            get(admin_handlers::obter_configuracao),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            mw_auth::autenticar,
        ));

    // --- Router Final ---
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .with_state(app_state)
}
