// src/models/questao.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Questão de inglês do banco. tipo: Reading/Grammar/Vocabulary/Writing/
// Listening; nivel: A1/A2/B1/B2/B2+. `alternativas` só é None em questões
// dissertativas (Writing), onde `respostaCorreta` também fica nula.
//
// Todos os campos de conteúdo são opcionais: a criação via API aceita o que
// vier, como a referência.
#[derive(Debug, Clone, Serialize)]
pub struct QuestaoIngles {
    pub id: i64,
    pub titulo: Option<String>,
    pub tipo: Option<String>,
    pub nivel: Option<String>,
    pub enunciado: Option<String>,
    pub texto: Option<String>,
    pub alternativas: Option<Vec<String>>,
    #[serde(rename = "respostaCorreta")]
    pub resposta_correta: Option<i64>,
    pub explicacao: Option<String>,
    #[serde(rename = "professorId")]
    pub professor_id: Option<i64>,
    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

// Banco (coleção) de questões de um professor. A relação banco-questão vive
// aqui dentro, em memória.
#[derive(Debug, Clone, Serialize)]
pub struct BancoQuestoes {
    pub id: i64,
    pub nome: String,
    pub descricao: Option<String>,
    #[serde(rename = "professorId")]
    pub professor_id: i64,
    #[serde(rename = "turmaId")]
    pub turma_id: Option<i64>,
    #[serde(rename = "questaoIds")]
    pub questao_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
}

// Resposta de um aluno a uma questão dentro de uma atividade
#[derive(Debug, Clone, Serialize)]
pub struct RespostaAluno {
    pub id: i64,
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "questaoId")]
    pub questao_id: i64,
    #[serde(rename = "atividadeId")]
    pub atividade_id: i64,
    #[serde(rename = "respostaSelecionada")]
    pub resposta_selecionada: Option<i64>,
    #[serde(rename = "respostaTexto")]
    pub resposta_texto: Option<String>,
    pub correta: bool,
    #[serde(rename = "tempoResposta")]
    pub tempo_resposta: Option<i64>,
    pub created_at: DateTime<Utc>,
}

// --- Payloads ---

fn alternativas_ausentes() -> Option<Vec<String>> {
    // Chave ausente vira lista vazia; null explícito permanece None.
    Some(Vec::new())
}

#[derive(Debug, Deserialize)]
pub struct NovaQuestaoPayload {
    pub titulo: Option<String>,
    pub tipo: Option<String>,
    pub nivel: Option<String>,
    pub enunciado: Option<String>,
    pub texto: Option<String>,
    #[serde(default = "alternativas_ausentes")]
    pub alternativas: Option<Vec<String>>,
    #[serde(default, rename = "respostaCorreta")]
    pub resposta_correta: Option<i64>,
    pub explicacao: Option<String>,
    #[serde(rename = "professorId")]
    pub professor_id: Option<i64>,
}

// Filtros de listagem (?tipo=Reading&nivel=A1)
#[derive(Debug, Default, Deserialize)]
pub struct FiltroQuestoes {
    pub tipo: Option<String>,
    pub nivel: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NovoBancoPayload {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    #[serde(rename = "professorId")]
    pub professor_id: Option<i64>,
    #[serde(rename = "turmaId")]
    pub turma_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AdicionarQuestaoPayload {
    #[serde(rename = "questaoId")]
    pub questao_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct NovaRespostaPayload {
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "questaoId")]
    pub questao_id: i64,
    #[serde(rename = "atividadeId")]
    pub atividade_id: i64,
    #[serde(rename = "respostaSelecionada")]
    pub resposta_selecionada: Option<i64>,
    #[serde(rename = "respostaTexto")]
    pub resposta_texto: Option<String>,
    pub correta: bool,
    #[serde(rename = "tempoResposta")]
    pub tempo_resposta: Option<i64>,
}
