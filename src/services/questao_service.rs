// src/services/questao_service.rs
use crate::{
    error::{AppError, AppResult},
    models::questao::{
        BancoQuestoes, FiltroQuestoes, NovaQuestaoPayload, NovaRespostaPayload, NovoBancoPayload,
        QuestaoIngles, RespostaAluno,
    },
    store::{proximo_id, Store},
};
use chrono::Utc;

/// Lista o banco de questões, opcionalmente filtrado por tipo e/ou nível.
pub async fn listar_questoes(store: &Store, filtro: FiltroQuestoes) -> Vec<QuestaoIngles> {
    let dados = store.read().await;
    dados
        .questoes_ingles
        .iter()
        .filter(|q| match &filtro.tipo {
            Some(t) => q.tipo.as_deref() == Some(t.as_str()),
            None => true,
        })
        .filter(|q| match &filtro.nivel {
            Some(n) => q.nivel.as_deref() == Some(n.as_str()),
            None => true,
        })
        .cloned()
        .collect()
}

pub async fn buscar_questao(store: &Store, id: i64) -> AppResult<QuestaoIngles> {
    let dados = store.read().await;
    dados
        .questoes_ingles
        .iter()
        .find(|q| q.id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound("Questão não encontrada".into()))
}

/// Cria uma questão com o que vier no payload. Nenhum campo é obrigatório:
/// a referência encaminha os valores tal como chegam.
pub async fn criar_questao(store: &Store, payload: NovaQuestaoPayload) -> AppResult<i64> {
    let mut dados = store.write().await;
    let id = proximo_id(&dados.questoes_ingles);
    dados.questoes_ingles.push(QuestaoIngles {
        id,
        titulo: payload.titulo,
        tipo: payload.tipo,
        nivel: payload.nivel,
        enunciado: payload.enunciado,
        texto: payload.texto,
        alternativas: payload.alternativas,
        resposta_correta: payload.resposta_correta,
        explicacao: payload.explicacao,
        professor_id: payload.professor_id,
        ativa: true,
        created_at: Utc::now(),
    });
    Ok(id)
}

pub async fn criar_banco(store: &Store, payload: NovoBancoPayload) -> AppResult<i64> {
    let nome = payload.nome.unwrap_or_default();
    let professor_id = payload.professor_id.unwrap_or(0);
    if nome.is_empty() || professor_id == 0 {
        return Err(AppError::Validation(
            "Nome e professorId são obrigatórios".into(),
        ));
    }

    let mut dados = store.write().await;
    let id = proximo_id(&dados.bancos_questoes);
    dados.bancos_questoes.push(BancoQuestoes {
        id,
        nome,
        descricao: payload.descricao,
        professor_id,
        turma_id: payload.turma_id,
        questao_ids: Vec::new(),
        created_at: Utc::now(),
    });
    Ok(id)
}

pub async fn listar_bancos(store: &Store) -> Vec<BancoQuestoes> {
    store.read().await.bancos_questoes.clone()
}

/// Associa uma questão existente a um banco. Repetir a associação é inócuo.
pub async fn adicionar_questao_ao_banco(
    store: &Store,
    banco_id: i64,
    questao_id: i64,
) -> AppResult<()> {
    let mut dados = store.write().await;
    if !dados.questoes_ingles.iter().any(|q| q.id == questao_id) {
        return Err(AppError::Validation("Questão não encontrada".into()));
    }
    let banco = dados
        .bancos_questoes
        .iter_mut()
        .find(|b| b.id == banco_id)
        .ok_or_else(|| AppError::Validation("Banco não encontrado".into()))?;
    if !banco.questao_ids.contains(&questao_id) {
        banco.questao_ids.push(questao_id);
    }
    Ok(())
}

pub async fn listar_questoes_do_banco(
    store: &Store,
    banco_id: i64,
) -> AppResult<Vec<QuestaoIngles>> {
    let dados = store.read().await;
    let banco = dados
        .bancos_questoes
        .iter()
        .find(|b| b.id == banco_id)
        .ok_or_else(|| AppError::NotFound("Banco não encontrado".into()))?;
    Ok(dados
        .questoes_ingles
        .iter()
        .filter(|q| banco.questao_ids.contains(&q.id))
        .cloned()
        .collect())
}

pub async fn registrar_resposta(store: &Store, payload: NovaRespostaPayload) -> AppResult<i64> {
    let mut dados = store.write().await;
    let id = proximo_id(&dados.respostas_alunos);
    dados.respostas_alunos.push(RespostaAluno {
        id,
        aluno_id: payload.aluno_id,
        questao_id: payload.questao_id,
        atividade_id: payload.atividade_id,
        resposta_selecionada: payload.resposta_selecionada,
        resposta_texto: payload.resposta_texto,
        correta: payload.correta,
        tempo_resposta: payload.tempo_resposta,
        created_at: Utc::now(),
    });
    Ok(id)
}

pub async fn listar_respostas(store: &Store, atividade_id: i64) -> Vec<RespostaAluno> {
    let dados = store.read().await;
    dados
        .respostas_alunos
        .iter()
        .filter(|r| r.atividade_id == atividade_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn payload_minimo(titulo: &str, tipo: &str, nivel: &str) -> NovaQuestaoPayload {
        NovaQuestaoPayload {
            titulo: Some(titulo.to_string()),
            tipo: Some(tipo.to_string()),
            nivel: Some(nivel.to_string()),
            enunciado: None,
            texto: None,
            alternativas: Some(Vec::new()),
            resposta_correta: None,
            explicacao: None,
            professor_id: None,
        }
    }

    #[tokio::test]
    async fn criar_questao_aceita_payload_incompleto() {
        let store = Store::new();
        // Nenhum campo é obrigatório
        let id = criar_questao(
            &store,
            NovaQuestaoPayload {
                titulo: None,
                tipo: None,
                nivel: None,
                enunciado: None,
                texto: None,
                alternativas: Some(Vec::new()),
                resposta_correta: None,
                explicacao: None,
                professor_id: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(id, 1);

        let questao = buscar_questao(&store, id).await.unwrap();
        assert!(questao.ativa);
        assert_eq!(questao.alternativas, Some(Vec::new()));
        assert_eq!(questao.resposta_correta, None);
    }

    #[tokio::test]
    async fn filtros_por_tipo_e_nivel() {
        let store = Store::new();
        criar_questao(&store, payload_minimo("a", "Reading", "A1"))
            .await
            .unwrap();
        criar_questao(&store, payload_minimo("b", "Grammar", "A1"))
            .await
            .unwrap();
        criar_questao(&store, payload_minimo("c", "Reading", "B2"))
            .await
            .unwrap();

        let todas = listar_questoes(&store, FiltroQuestoes::default()).await;
        assert_eq!(todas.len(), 3);

        let reading = listar_questoes(
            &store,
            FiltroQuestoes {
                tipo: Some("Reading".into()),
                nivel: None,
            },
        )
        .await;
        assert_eq!(reading.len(), 2);

        let reading_a1 = listar_questoes(
            &store,
            FiltroQuestoes {
                tipo: Some("Reading".into()),
                nivel: Some("A1".into()),
            },
        )
        .await;
        assert_eq!(reading_a1.len(), 1);
        assert_eq!(reading_a1[0].titulo.as_deref(), Some("a"));
    }

    #[tokio::test]
    async fn questao_dissertativa_semeada_mantem_resposta_nula() {
        let store = Store::new();
        seed::semear(&store).await.unwrap();

        let writing = listar_questoes(
            &store,
            FiltroQuestoes {
                tipo: Some("Writing".into()),
                nivel: None,
            },
        )
        .await;
        assert_eq!(writing.len(), 1);
        assert_eq!(writing[0].resposta_correta, None);
        assert_eq!(writing[0].alternativas, None);
        assert_eq!(writing[0].nivel.as_deref(), Some("B2+"));
    }

    #[tokio::test]
    async fn banco_associa_questoes_existentes() {
        let store = Store::new();
        let q = criar_questao(&store, payload_minimo("a", "Reading", "A1"))
            .await
            .unwrap();
        let banco = criar_banco(
            &store,
            NovoBancoPayload {
                nome: Some("Banco A1".into()),
                descricao: None,
                professor_id: Some(1),
                turma_id: None,
            },
        )
        .await
        .unwrap();

        adicionar_questao_ao_banco(&store, banco, q).await.unwrap();
        // Repetir não duplica
        adicionar_questao_ao_banco(&store, banco, q).await.unwrap();

        let questoes = listar_questoes_do_banco(&store, banco).await.unwrap();
        assert_eq!(questoes.len(), 1);

        // Questão inexistente é recusada
        let erro = adicionar_questao_ao_banco(&store, banco, 999)
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Validation(_)));
    }
}
