// src/services/turma_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        turma::{Aluno, Etapa, Matricula, NovaTurmaPayload, NovoAlunoPayload, Turma},
        user::Papel,
    },
    store::{proximo_id, Store},
};
use chrono::Utc;

// Alocação fixa das três etapas de qualquer turma nova (soma 100)
const ETAPAS_PADRAO: [(i64, &str, i64); 3] =
    [(1, "Etapa 1", 30), (2, "Etapa 2", 35), (3, "Etapa 3", 35)];

/// Admin vê todas as turmas; professor vê apenas as suas (resolvidas via
/// user_id -> Professor.userId). Sem registo de Professor, lista vazia.
pub async fn listar_turmas(store: &Store, user_id: i64, papel: Papel) -> Vec<Turma> {
    let dados = store.read().await;
    if papel == Papel::Admin {
        return dados.turmas.clone();
    }
    match dados.professor_por_user_id(user_id) {
        Some(professor) => dados
            .turmas
            .iter()
            .filter(|t| t.professor_id == professor.id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Cria a turma e as suas três etapas (30/35/35) numa única secção de
/// escrita: ou existe tudo, ou nada.
pub async fn criar_turma(store: &Store, payload: NovaTurmaPayload) -> AppResult<i64> {
    let nome = payload.nome.unwrap_or_default();
    let nivel = payload.nivel.unwrap_or_default();
    let ano = payload.ano.unwrap_or(0);
    let professor_id = payload.professor_id.unwrap_or(0);
    // Como na referência: string vazia e zero contam como ausentes
    if nome.is_empty() || nivel.is_empty() || ano == 0 || professor_id == 0 {
        return Err(AppError::Validation(
            "Todos os campos são obrigatórios".into(),
        ));
    }

    let mut dados = store.write().await;
    let agora = Utc::now();
    let turma_id = proximo_id(&dados.turmas);
    dados.turmas.push(Turma {
        id: turma_id,
        nome,
        nivel,
        ano,
        professor_id,
        ativa: true,
        created_at: agora,
    });

    for (numero, nome_etapa, pontos) in ETAPAS_PADRAO {
        let etapa = Etapa {
            id: proximo_id(&dados.etapas),
            turma_id,
            numero,
            nome: nome_etapa.to_string(),
            pontos_maximos: pontos,
            created_at: agora,
        };
        dados.etapas.push(etapa);
    }

    tracing::info!("✅ Turma {} criada com 3 etapas", turma_id);
    Ok(turma_id)
}

pub async fn listar_etapas(store: &Store, turma_id: i64) -> Vec<Etapa> {
    let dados = store.read().await;
    dados
        .etapas
        .iter()
        .filter(|e| e.turma_id == turma_id)
        .cloned()
        .collect()
}

pub async fn listar_professores(store: &Store) -> Vec<crate::models::user::Professor> {
    store.read().await.professores.clone()
}

pub async fn criar_aluno(store: &Store, payload: NovoAlunoPayload) -> AppResult<i64> {
    let ra = payload.ra.unwrap_or_default();
    let nome = payload.nome.unwrap_or_default();
    let nivel = payload.nivel.unwrap_or_default();
    if ra.is_empty() || nome.is_empty() || nivel.is_empty() {
        return Err(AppError::Validation(
            "Todos os campos são obrigatórios".into(),
        ));
    }

    let mut dados = store.write().await;
    if dados.alunos.iter().any(|a| a.ra == ra) {
        tracing::warn!("Aluno recusado: RA '{}' já cadastrado", ra);
        return Err(AppError::Conflict("RA já cadastrado".into()));
    }

    let id = proximo_id(&dados.alunos);
    dados.alunos.push(Aluno {
        id,
        ra,
        nome,
        nivel,
        created_at: Utc::now(),
    });
    Ok(id)
}

pub async fn listar_alunos(store: &Store) -> Vec<Aluno> {
    store.read().await.alunos.clone()
}

pub async fn matricular(store: &Store, aluno_id: i64, turma_id: i64) -> AppResult<i64> {
    let mut dados = store.write().await;
    let agora = Utc::now();
    let id = proximo_id(&dados.matriculas);
    dados.matriculas.push(Matricula {
        id,
        aluno_id,
        turma_id,
        ativa: true,
        data_inicio: agora,
        data_fim: None,
        created_at: agora,
    });
    Ok(id)
}

pub async fn listar_matriculas_ativas(store: &Store, turma_id: i64) -> Vec<Matricula> {
    let dados = store.read().await;
    dados
        .matriculas
        .iter()
        .filter(|m| m.turma_id == turma_id && m.ativa)
        .cloned()
        .collect()
}

/// Transfere um aluno: encerra a matrícula ativa (dataFim = agora) e cria a
/// nova na mesma secção de escrita, preservando o histórico.
pub async fn transferir_aluno(store: &Store, aluno_id: i64, nova_turma_id: i64) -> AppResult<i64> {
    let mut dados = store.write().await;
    let agora = Utc::now();

    let atual = dados
        .matriculas
        .iter_mut()
        .find(|m| m.aluno_id == aluno_id && m.ativa)
        .ok_or_else(|| AppError::NotFound("Matrícula ativa não encontrada".into()))?;
    atual.ativa = false;
    atual.data_fim = Some(agora);
    let anterior = atual.turma_id;

    let id = proximo_id(&dados.matriculas);
    dados.matriculas.push(Matricula {
        id,
        aluno_id,
        turma_id: nova_turma_id,
        ativa: true,
        data_inicio: agora,
        data_fim: None,
        created_at: agora,
    });

    tracing::info!(
        "Aluno {} transferido da turma {} para a {}",
        aluno_id,
        anterior,
        nova_turma_id
    );
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload_turma(nome: &str, professor_id: i64) -> NovaTurmaPayload {
        NovaTurmaPayload {
            nome: Some(nome.to_string()),
            nivel: Some("A1".to_string()),
            ano: Some(2025),
            professor_id: Some(professor_id),
        }
    }

    fn payload_aluno(ra: &str, nome: &str) -> NovoAlunoPayload {
        NovoAlunoPayload {
            ra: Some(ra.to_string()),
            nome: Some(nome.to_string()),
            nivel: Some("A1".to_string()),
        }
    }

    #[tokio::test]
    async fn criar_turma_gera_tres_etapas_somando_cem() {
        let store = Store::new();
        let id = criar_turma(&store, payload_turma("Beginners A1", 1))
            .await
            .unwrap();
        assert_eq!(id, 1);

        let etapas = listar_etapas(&store, id).await;
        assert_eq!(etapas.len(), 3);
        assert_eq!(
            etapas.iter().map(|e| e.pontos_maximos).collect::<Vec<_>>(),
            vec![30, 35, 35]
        );
        assert_eq!(etapas.iter().map(|e| e.pontos_maximos).sum::<i64>(), 100);
        assert_eq!(
            etapas.iter().map(|e| e.numero).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert!(etapas.iter().all(|e| e.turma_id == id));

        let dados = store.read().await;
        assert!(dados.turmas[0].ativa);
    }

    #[tokio::test]
    async fn criar_turma_recusa_campos_ausentes_ou_falsy() {
        let store = Store::new();
        let casos = [
            NovaTurmaPayload {
                nome: None,
                nivel: Some("A1".into()),
                ano: Some(2025),
                professor_id: Some(1),
            },
            NovaTurmaPayload {
                nome: Some("X".into()),
                nivel: Some("".into()),
                ano: Some(2025),
                professor_id: Some(1),
            },
            NovaTurmaPayload {
                nome: Some("X".into()),
                nivel: Some("A1".into()),
                ano: Some(0),
                professor_id: Some(1),
            },
            NovaTurmaPayload {
                nome: Some("X".into()),
                nivel: Some("A1".into()),
                ano: Some(2025),
                professor_id: None,
            },
        ];
        for payload in casos {
            let erro = criar_turma(&store, payload).await.unwrap_err();
            assert!(matches!(erro, AppError::Validation(_)));
        }
        let dados = store.read().await;
        assert!(dados.turmas.is_empty());
        assert!(dados.etapas.is_empty());
    }

    #[tokio::test]
    async fn professor_ve_apenas_as_suas_turmas() {
        let store = Store::new();
        // Dois professores registados
        let p1 = crate::services::auth_service::registrar(
            &store,
            Some("Ana"),
            Some("ana@escola.com"),
            Some("x"),
        )
        .await
        .unwrap();
        let p2 = crate::services::auth_service::registrar(
            &store,
            Some("Bia"),
            Some("bia@escola.com"),
            Some("x"),
        )
        .await
        .unwrap();

        // professorId aqui é o id do registo de Professor (1 e 2)
        criar_turma(&store, payload_turma("Turma da Ana", 1))
            .await
            .unwrap();
        criar_turma(&store, payload_turma("Turma da Bia", 2))
            .await
            .unwrap();
        criar_turma(&store, payload_turma("Outra da Ana", 1))
            .await
            .unwrap();

        let da_ana = listar_turmas(&store, p1.id, Papel::Professor).await;
        assert_eq!(da_ana.len(), 2);
        assert!(da_ana.iter().all(|t| t.professor_id == 1));

        let da_bia = listar_turmas(&store, p2.id, Papel::Professor).await;
        assert_eq!(da_bia.len(), 1);

        // Admin (sem registo de Professor) vê tudo
        let todas = listar_turmas(&store, 999, Papel::Admin).await;
        assert_eq!(todas.len(), 3);

        // Utilizador sem registo de Professor: lista vazia, não erro
        let nenhuma = listar_turmas(&store, 999, Papel::Professor).await;
        assert!(nenhuma.is_empty());
    }

    #[tokio::test]
    async fn criar_aluno_recusa_ra_duplicado() {
        let store = Store::new();
        criar_aluno(&store, payload_aluno("2025001", "João"))
            .await
            .unwrap();
        let erro = criar_aluno(&store, payload_aluno("2025001", "Maria"))
            .await
            .unwrap_err();
        assert!(matches!(erro, AppError::Conflict(_)));
        assert_eq!(store.read().await.alunos.len(), 1);
    }

    #[tokio::test]
    async fn transferencia_preserva_historico() {
        let store = Store::new();
        criar_turma(&store, payload_turma("Origem", 1)).await.unwrap();
        criar_turma(&store, payload_turma("Destino", 1)).await.unwrap();
        let aluno = criar_aluno(&store, payload_aluno("2025001", "João"))
            .await
            .unwrap();
        matricular(&store, aluno, 1).await.unwrap();

        transferir_aluno(&store, aluno, 2).await.unwrap();

        let dados = store.read().await;
        assert_eq!(dados.matriculas.len(), 2);
        let antiga = &dados.matriculas[0];
        assert!(!antiga.ativa);
        assert!(antiga.data_fim.is_some());
        let nova = &dados.matriculas[1];
        assert!(nova.ativa);
        assert_eq!(nova.turma_id, 2);
        drop(dados);

        assert_eq!(listar_matriculas_ativas(&store, 1).await.len(), 0);
        assert_eq!(listar_matriculas_ativas(&store, 2).await.len(), 1);

        // Sem matrícula ativa, transferir de novo falha
        let store2 = Store::new();
        let erro = transferir_aluno(&store2, 42, 1).await.unwrap_err();
        assert!(matches!(erro, AppError::NotFound(_)));
    }
}
