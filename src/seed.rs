// src/seed.rs
//
// Semeadura de arranque: garante a conta de admin e, se o banco de questões
// estiver vazio, insere as questões-modelo do catálogo. Idempotente ao nível
// da coleção: com qualquer questão presente, a segunda execução não faz nada.
use crate::{
    catalog::MODELOS_QUESTOES,
    error::AppResult,
    models::{
        questao::QuestaoIngles,
        user::{Papel, User},
    },
    services::auth_service,
    store::{proximo_id, Store},
};
use chrono::Utc;

pub const ADMIN_EMAIL: &str = "admin@englishsas.com";
const ADMIN_PASSWORD_PADRAO: &str = "admin123";

pub async fn semear(store: &Store) -> AppResult<()> {
    let admin_id = garantir_admin(store).await?;
    semear_questoes(store, admin_id).await;
    Ok(())
}

/// Cria a conta de admin se ainda não existir e devolve o seu id.
async fn garantir_admin(store: &Store) -> AppResult<i64> {
    {
        let dados = store.read().await;
        if let Some(admin) = dados.user_por_email(ADMIN_EMAIL) {
            return Ok(admin.id);
        }
    }

    let senha = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| ADMIN_PASSWORD_PADRAO.into());
    let password_hash = auth_service::hash_password(&senha).await?;

    let mut dados = store.write().await;
    let id = proximo_id(&dados.users);
    dados.users.push(User {
        id,
        email: ADMIN_EMAIL.to_string(),
        password_hash,
        name: "Administrador".to_string(),
        role: Papel::Admin,
        created_at: Utc::now(),
    });
    tracing::info!("👤 Conta de admin criada: {}", ADMIN_EMAIL);
    Ok(id)
}

/// Insere uma questão por entrada do catálogo (nível -> habilidade ->
/// questões), todas atribuídas ao admin. Só corre com a coleção vazia.
async fn semear_questoes(store: &Store, admin_id: i64) {
    let mut dados = store.write().await;
    if !dados.questoes_ingles.is_empty() {
        tracing::debug!("Banco de questões já populado, semeadura ignorada");
        return;
    }

    for (nivel, tipos) in MODELOS_QUESTOES {
        for (tipo, questoes) in *tipos {
            for modelo in *questoes {
                let questao = QuestaoIngles {
                    id: proximo_id(&dados.questoes_ingles),
                    titulo: Some(modelo.titulo.to_string()),
                    tipo: Some(tipo.to_string()),
                    nivel: Some(nivel.to_string()),
                    enunciado: Some(modelo.enunciado.to_string()),
                    texto: Some(modelo.texto.to_string()),
                    alternativas: modelo
                        .alternativas
                        .map(|alts| alts.iter().map(|a| a.to_string()).collect()),
                    resposta_correta: modelo.resposta_correta,
                    explicacao: Some(modelo.explicacao.to_string()),
                    professor_id: Some(admin_id),
                    ativa: true,
                    created_at: Utc::now(),
                };
                dados.questoes_ingles.push(questao);
            }
        }
    }
    tracing::info!(
        "📚 {} questões de exemplo semeadas",
        dados.questoes_ingles.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn semear_popula_admin_e_questoes() {
        let store = Store::new();
        semear(&store).await.unwrap();

        let dados = store.read().await;
        assert_eq!(dados.users.len(), 1);
        assert_eq!(dados.users[0].email, ADMIN_EMAIL);
        assert_eq!(dados.users[0].role, Papel::Admin);
        // Catálogo atual: 11 questões em 5 níveis
        assert_eq!(dados.questoes_ingles.len(), 11);
        assert!(dados.questoes_ingles.iter().all(|q| q.ativa));
        assert!(dados
            .questoes_ingles
            .iter()
            .all(|q| q.professor_id == Some(1)));
    }

    #[tokio::test]
    async fn semear_duas_vezes_nao_duplica() {
        let store = Store::new();
        semear(&store).await.unwrap();
        let antes = store.read().await.questoes_ingles.len();

        semear(&store).await.unwrap();

        let dados = store.read().await;
        assert_eq!(dados.questoes_ingles.len(), antes);
        assert_eq!(dados.users.len(), 1);
    }
}
