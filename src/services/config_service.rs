// src/services/config_service.rs
use crate::{
    error::{AppError, AppResult},
    models::configuracao::{Configuracao, ConfiguracaoPayload},
    store::{proximo_id, Store},
};
use chrono::Utc;

pub async fn obter(store: &Store, chave: &str) -> Option<Configuracao> {
    let dados = store.read().await;
    dados.configuracoes.iter().find(|c| c.chave == chave).cloned()
}

/// Define uma configuração; a chave é única, definir de novo substitui o
/// valor (e a descrição, quando enviada).
pub async fn definir(store: &Store, payload: ConfiguracaoPayload) -> AppResult<()> {
    let chave = payload.chave.unwrap_or_default();
    let valor = payload.valor.unwrap_or_default();
    if chave.is_empty() || valor.is_empty() {
        return Err(AppError::Validation("Chave e valor são obrigatórios".into()));
    }

    let mut dados = store.write().await;
    if let Some(existente) = dados.configuracoes.iter_mut().find(|c| c.chave == chave) {
        existente.valor = valor;
        if payload.descricao.is_some() {
            existente.descricao = payload.descricao;
        }
        return Ok(());
    }

    let id = proximo_id(&dados.configuracoes);
    dados.configuracoes.push(Configuracao {
        id,
        chave,
        valor,
        descricao: payload.descricao,
        created_at: Utc::now(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn definir_e_substituir_pela_mesma_chave() {
        let store = Store::new();
        definir(
            &store,
            ConfiguracaoPayload {
                chave: Some("pontos_etapa_1".into()),
                valor: Some("30".into()),
                descricao: Some("Alocação padrão".into()),
            },
        )
        .await
        .unwrap();

        definir(
            &store,
            ConfiguracaoPayload {
                chave: Some("pontos_etapa_1".into()),
                valor: Some("25".into()),
                descricao: None,
            },
        )
        .await
        .unwrap();

        let config = obter(&store, "pontos_etapa_1").await.unwrap();
        assert_eq!(config.valor, "25");
        assert_eq!(config.descricao.as_deref(), Some("Alocação padrão"));
        assert_eq!(store.read().await.configuracoes.len(), 1);

        assert!(obter(&store, "inexistente").await.is_none());
    }

    #[tokio::test]
    async fn definir_exige_chave_e_valor() {
        let store = Store::new();
        let erro = definir(
            &store,
            ConfiguracaoPayload {
                chave: Some("x".into()),
                valor: None,
                descricao: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(erro, AppError::Validation(_)));
    }
}
