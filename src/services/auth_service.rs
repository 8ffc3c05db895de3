// src/services/auth_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{Papel, Professor, User, UsuarioPublico},
    store::{proximo_id, Store},
};
use chrono::Utc;

/// Verifica se a senha fornecida corresponde ao hash guardado.
pub async fn verify_password(password: &str, stored_hash: &str) -> AppResult<bool> {
    let password = password.to_string();
    let stored_hash = stored_hash.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Verificando hash bcrypt...");
        bcrypt::verify(&password, &stored_hash)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (verify_password): {:?}", e);
        AppError::Internal
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao verificar senha: {:?}", e);
        AppError::PasswordHashing
    })
}

/// Gera um hash bcrypt para uma senha.
pub async fn hash_password(password: &str) -> AppResult<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || {
        tracing::debug!("Gerando hash bcrypt...");
        bcrypt::hash(&password, bcrypt::DEFAULT_COST)
    })
    .await
    .map_err(|e| {
        tracing::error!("Erro na task spawn_blocking (hash_password): {:?}", e);
        AppError::Internal
    })?
    .map_err(|e| {
        tracing::error!("Erro bcrypt ao gerar hash: {:?}", e);
        AppError::PasswordHashing
    })
}

/// Regista um novo professor: cria o User (role professor) e o registo de
/// Professor ligado, num único passo de escrita.
pub async fn registrar(
    store: &Store,
    name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> AppResult<UsuarioPublico> {
    let (name, email, password) = match (name, email, password) {
        (Some(n), Some(e), Some(p)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => (n, e, p),
        _ => {
            return Err(AppError::Validation(
                "Nome, email e senha são obrigatórios".into(),
            ))
        }
    };

    // O hash é caro; calcula antes de segurar o lock de escrita. A verificação
    // de duplicado acontece dentro do lock, então a unicidade continua valendo.
    let password_hash = hash_password(password).await?;

    let mut dados = store.write().await;
    if dados.user_por_email(email).is_some() {
        tracing::warn!("Registo recusado: email '{}' já cadastrado", email);
        return Err(AppError::Conflict("Email já cadastrado".into()));
    }

    let agora = Utc::now();
    let novo_user = User {
        id: proximo_id(&dados.users),
        email: email.to_string(),
        password_hash,
        name: name.to_string(),
        role: Papel::Professor,
        created_at: agora,
    };
    let publico = novo_user.publico();
    dados.users.push(novo_user);

    let proximo_professor_id = proximo_id(&dados.professores);
    dados.professores.push(Professor {
        id: proximo_professor_id,
        user_id: publico.id,
        nome: name.to_string(),
        email: email.to_string(),
        created_at: agora,
    });

    tracing::info!("✅ Professor '{}' registado (user id {})", email, publico.id);
    Ok(publico)
}

/// Valida as credenciais e devolve a vista pública do utilizador.
/// A sessão em si é estabelecida pelo handler.
pub async fn login(
    store: &Store,
    email: Option<&str>,
    password: Option<&str>,
) -> AppResult<UsuarioPublico> {
    let (email, password) = match (email, password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => {
            return Err(AppError::Validation(
                "Email e senha são obrigatórios".into(),
            ))
        }
    };

    // Copia o necessário e larga o lock antes do bcrypt
    let encontrado = {
        let dados = store.read().await;
        dados
            .user_por_email(email)
            .map(|u| (u.password_hash.clone(), u.publico()))
    };

    let Some((hash, publico)) = encontrado else {
        tracing::warn!("Login falhou: email '{}' desconhecido", email);
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &hash).await? {
        tracing::warn!("Login falhou: senha incorreta para '{}'", email);
        return Err(AppError::InvalidCredentials);
    }

    tracing::info!("✅ Login bem-sucedido para: {}", email);
    Ok(publico)
}

/// Vista pública do utilizador da sessão, ou None se o registo sumiu.
/// Com um store só-de-inserções isto não acontece, mas fica coberto.
pub async fn usuario_atual(store: &Store, user_id: i64) -> Option<UsuarioPublico> {
    let dados = store.read().await;
    dados.user_por_id(user_id).map(User::publico)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn registrar_cria_user_e_professor_ligados() {
        let store = Store::new();
        let u = registrar(&store, Some("Ana"), Some("ana@escola.com"), Some("s3nh4"))
            .await
            .unwrap();
        assert_eq!(u.role, Papel::Professor);

        let dados = store.read().await;
        assert_eq!(dados.users.len(), 1);
        assert_eq!(dados.professores.len(), 1);
        assert_eq!(dados.professores[0].user_id, u.id);
        assert_eq!(dados.professores[0].nome, "Ana");
    }

    #[tokio::test]
    async fn registrar_recusa_email_duplicado_sem_alterar_o_store() {
        let store = Store::new();
        registrar(&store, Some("Ana"), Some("ana@escola.com"), Some("s3nh4"))
            .await
            .unwrap();

        let erro = registrar(&store, Some("Outra Ana"), Some("ana@escola.com"), Some("x"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Conflict(_)));

        let dados = store.read().await;
        assert_eq!(dados.users.len(), 1);
        assert_eq!(dados.professores.len(), 1);
    }

    #[tokio::test]
    async fn registrar_exige_todos_os_campos() {
        let store = Store::new();
        for (n, e, p) in [
            (None, Some("a@b.com"), Some("x")),
            (Some("Ana"), None, Some("x")),
            (Some("Ana"), Some("a@b.com"), None),
            (Some(""), Some("a@b.com"), Some("x")),
        ] {
            let erro = registrar(&store, n, e, p).await.unwrap_err();
            assert!(matches!(erro, AppError::Validation(_)));
        }
        assert!(store.read().await.users.is_empty());
    }

    #[tokio::test]
    async fn login_com_senha_errada_falha() {
        let store = Store::new();
        registrar(&store, Some("Ana"), Some("ana@escola.com"), Some("correta"))
            .await
            .unwrap();

        let erro = login(&store, Some("ana@escola.com"), Some("errada"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::InvalidCredentials));

        // Email desconhecido cai no mesmo erro genérico
        let erro = login(&store, Some("ninguem@escola.com"), Some("x"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_do_admin_semeado() {
        let store = Store::new();
        seed::semear(&store).await.unwrap();

        let u = login(&store, Some("admin@englishsas.com"), Some("admin123"))
            .await
            .unwrap();
        assert_eq!(u.role, Papel::Admin);
        assert_eq!(u.name, "Administrador");
    }
}
