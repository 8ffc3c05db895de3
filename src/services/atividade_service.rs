// src/services/atividade_service.rs
use crate::{
    error::{AppError, AppResult},
    models::atividade::{
        Atividade, Feedback, FeedbackPayload, LancarNotaPayload, NovaAtividadePayload, Nota,
    },
    store::{proximo_id, Store},
};
use chrono::Utc;

/// Soma das pontuações máximas já alocadas nas atividades de uma etapa.
fn total_pontos_alocados(atividades: &[Atividade], etapa_id: i64) -> i64 {
    atividades
        .iter()
        .filter(|a| a.etapa_id == etapa_id)
        .map(|a| a.pontuacao_maxima)
        .sum()
}

/// Cria uma atividade, garantindo que o orçamento de pontos da etapa
/// (pontosMaximos) não é ultrapassado.
pub async fn criar_atividade(store: &Store, payload: NovaAtividadePayload) -> AppResult<i64> {
    let mut dados = store.write().await;

    let etapa = dados
        .etapa_por_id(payload.etapa_id)
        .ok_or_else(|| AppError::Validation("Etapa não encontrada".into()))?;
    let maximo = etapa.pontos_maximos;

    let novo_total = total_pontos_alocados(&dados.atividades, payload.etapa_id)
        + payload.pontuacao_maxima;
    if novo_total > maximo {
        return Err(AppError::Validation(format!(
            "A soma das pontuações desta etapa ficaria {}/{} e ultrapassa o limite.",
            novo_total, maximo
        )));
    }

    let id = proximo_id(&dados.atividades);
    dados.atividades.push(Atividade {
        id,
        etapa_id: payload.etapa_id,
        titulo: payload.titulo,
        data: payload.data,
        pontuacao_maxima: payload.pontuacao_maxima,
        created_at: Utc::now(),
    });
    Ok(id)
}

/// Atividades de uma etapa, com o total já alocado (útil para a UI mostrar o
/// orçamento restante).
pub async fn listar_atividades(store: &Store, etapa_id: i64) -> (Vec<Atividade>, i64) {
    let dados = store.read().await;
    let atividades: Vec<Atividade> = dados
        .atividades
        .iter()
        .filter(|a| a.etapa_id == etapa_id)
        .cloned()
        .collect();
    let total = atividades.iter().map(|a| a.pontuacao_maxima).sum();
    (atividades, total)
}

/// Lança (ou substitui) a nota de um aluno numa atividade.
/// Devolve o id da nota nova ou da existente.
pub async fn lancar_nota(store: &Store, payload: LancarNotaPayload) -> AppResult<i64> {
    let mut dados = store.write().await;

    let atividade = dados
        .atividade_por_id(payload.atividade_id)
        .ok_or_else(|| AppError::Validation("Atividade não encontrada".into()))?;
    if payload.nota < 0 || payload.nota > atividade.pontuacao_maxima {
        return Err(AppError::Validation(
            "A nota deve estar entre 0 e a pontuação máxima da atividade.".into(),
        ));
    }

    if let Some(existente) = dados
        .notas
        .iter_mut()
        .find(|n| n.atividade_id == payload.atividade_id && n.aluno_id == payload.aluno_id)
    {
        existente.nota = payload.nota;
        existente.comentario = payload.comentario;
        return Ok(existente.id);
    }

    let id = proximo_id(&dados.notas);
    dados.notas.push(Nota {
        id,
        atividade_id: payload.atividade_id,
        aluno_id: payload.aluno_id,
        nota: payload.nota,
        comentario: payload.comentario,
        created_at: Utc::now(),
    });
    Ok(id)
}

pub async fn listar_notas(store: &Store, atividade_id: i64) -> Vec<Nota> {
    let dados = store.read().await;
    dados
        .notas
        .iter()
        .filter(|n| n.atividade_id == atividade_id)
        .cloned()
        .collect()
}

/// Upsert do feedback de etapa por aluno: campos presentes substituem,
/// ausentes permanecem.
pub async fn registrar_feedback(store: &Store, payload: FeedbackPayload) -> AppResult<i64> {
    let mut dados = store.write().await;

    if let Some(existente) = dados
        .feedbacks
        .iter_mut()
        .find(|f| f.etapa_id == payload.etapa_id && f.aluno_id == payload.aluno_id)
    {
        if let Some(v) = payload.desempenho_academico {
            existente.desempenho_academico = Some(v);
        }
        if let Some(v) = payload.frequencia {
            existente.frequencia = Some(v);
        }
        if let Some(v) = payload.comportamento {
            existente.comportamento = Some(v);
        }
        if let Some(v) = payload.observacoes_gerais {
            existente.observacoes_gerais = Some(v);
        }
        if let Some(v) = payload.comentarios_conselho {
            existente.comentarios_conselho = Some(v);
        }
        return Ok(existente.id);
    }

    let id = proximo_id(&dados.feedbacks);
    dados.feedbacks.push(Feedback {
        id,
        etapa_id: payload.etapa_id,
        aluno_id: payload.aluno_id,
        desempenho_academico: payload.desempenho_academico,
        frequencia: payload.frequencia,
        comportamento: payload.comportamento,
        observacoes_gerais: payload.observacoes_gerais,
        comentarios_conselho: payload.comentarios_conselho,
        created_at: Utc::now(),
    });
    Ok(id)
}

pub async fn listar_feedbacks(store: &Store, etapa_id: i64) -> Vec<Feedback> {
    let dados = store.read().await;
    dados
        .feedbacks
        .iter()
        .filter(|f| f.etapa_id == etapa_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::turma::NovaTurmaPayload, services::turma_service};
    use chrono::NaiveDate;

    async fn store_com_turma() -> Store {
        let store = Store::new();
        turma_service::criar_turma(
            &store,
            NovaTurmaPayload {
                nome: Some("Beginners".into()),
                nivel: Some("A1".into()),
                ano: Some(2025),
                professor_id: Some(1),
            },
        )
        .await
        .unwrap();
        store
    }

    fn atividade(etapa_id: i64, titulo: &str, pontos: i64) -> NovaAtividadePayload {
        NovaAtividadePayload {
            etapa_id,
            titulo: titulo.to_string(),
            data: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            pontuacao_maxima: pontos,
        }
    }

    #[tokio::test]
    async fn atividades_respeitam_o_orcamento_da_etapa() {
        let store = store_com_turma().await;
        // Etapa 1 tem 30 pontos
        criar_atividade(&store, atividade(1, "Prova", 20)).await.unwrap();
        criar_atividade(&store, atividade(1, "Trabalho", 10))
            .await
            .unwrap();

        let erro = criar_atividade(&store, atividade(1, "Extra", 1))
            .await
            .unwrap_err();
        match erro {
            AppError::Validation(msg) => {
                assert!(msg.contains("31/30"), "mensagem inesperada: {msg}")
            }
            outro => panic!("esperava Validation, veio {outro:?}"),
        }

        let (atividades, total) = listar_atividades(&store, 1).await;
        assert_eq!(atividades.len(), 2);
        assert_eq!(total, 30);

        // Etapa inexistente
        let erro = criar_atividade(&store, atividade(99, "X", 5))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn lancar_nota_valida_intervalo_e_substitui() {
        let store = store_com_turma().await;
        criar_atividade(&store, atividade(1, "Prova", 20)).await.unwrap();

        let nota = |valor| LancarNotaPayload {
            atividade_id: 1,
            aluno_id: 7,
            nota: valor,
            comentario: None,
        };

        // Fora do intervalo
        assert!(matches!(
            lancar_nota(&store, nota(21)).await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            lancar_nota(&store, nota(-1)).await.unwrap_err(),
            AppError::Validation(_)
        ));

        // Lançar e relançar: mesmo id, valor substituído
        let id1 = lancar_nota(&store, nota(15)).await.unwrap();
        let id2 = lancar_nota(&store, nota(18)).await.unwrap();
        assert_eq!(id1, id2);

        let notas = listar_notas(&store, 1).await;
        assert_eq!(notas.len(), 1);
        assert_eq!(notas[0].nota, 18);
    }

    #[tokio::test]
    async fn feedback_upsert_mantem_campos_ausentes() {
        let store = store_com_turma().await;
        let id1 = registrar_feedback(
            &store,
            FeedbackPayload {
                etapa_id: 1,
                aluno_id: 7,
                desempenho_academico: Some("Bom progresso".into()),
                frequencia: Some(90),
                comportamento: None,
                observacoes_gerais: None,
                comentarios_conselho: None,
            },
        )
        .await
        .unwrap();

        let id2 = registrar_feedback(
            &store,
            FeedbackPayload {
                etapa_id: 1,
                aluno_id: 7,
                desempenho_academico: None,
                frequencia: None,
                comportamento: Some("Excelente".into()),
                observacoes_gerais: None,
                comentarios_conselho: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(id1, id2);

        let feedbacks = listar_feedbacks(&store, 1).await;
        assert_eq!(feedbacks.len(), 1);
        let f = &feedbacks[0];
        assert_eq!(f.desempenho_academico.as_deref(), Some("Bom progresso"));
        assert_eq!(f.frequencia, Some(90));
        assert_eq!(f.comportamento.as_deref(), Some("Excelente"));
    }
}
