// src/web/mw_auth.rs
use crate::{error::AppError, models::user::Papel, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

/// Capacidade do chamador, resolvida uma única vez por pedido.
/// O papel vem do registo de User no store, não do snapshot da sessão, para
/// refletir o estado atual; se o registo sumiu, o chamador fica `Anonimo`.
#[derive(Clone, Debug)]
pub struct Credencial {
    pub user_id: i64,
    pub papel: Papel,
}

impl Credencial {
    /// Exige um papel mínimo (Admin ⊇ Professor ⊇ Anonimo).
    pub fn exigir(&self, minimo: Papel) -> Result<(), AppError> {
        if self.papel >= minimo {
            return Ok(());
        }
        let mensagem = match minimo {
            Papel::Admin => "Admin access required",
            _ => "Professor access required",
        };
        tracing::warn!(
            "Acesso negado para user {} (papel {:?}, mínimo {:?})",
            self.user_id,
            self.papel,
            minimo
        );
        Err(AppError::Forbidden(mensagem.to_string()))
    }
}

/// Middleware de autenticação: sem user_id na sessão responde 401; com
/// sessão, resolve a Credencial e deixa-a nas extensões para os handlers.
pub async fn autenticar(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user_id = session
        .get::<i64>("user_id")
        .await
        .map_err(|e| AppError::Session(format!("Erro ao ler sessão: {e}")))?;

    let Some(user_id) = user_id else {
        tracing::debug!("Autenticação MW: sem sessão ativa");
        return Err(AppError::Unauthorized);
    };

    let papel = {
        let dados = state.store.read().await;
        dados
            .user_por_id(user_id)
            .map(|u| u.role)
            .unwrap_or(Papel::Anonimo)
    };
    tracing::debug!("Autenticação MW: user {} com papel {:?}", user_id, papel);

    request.extensions_mut().insert(Credencial { user_id, papel });
    Ok(next.run(request).await)
}
