// src/models/atividade.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// Atividade avaliativa dentro de uma etapa. A soma das pontuações máximas das
// atividades de uma etapa não pode ultrapassar os pontosMaximos da etapa.
#[derive(Debug, Clone, Serialize)]
pub struct Atividade {
    pub id: i64,
    #[serde(rename = "etapaId")]
    pub etapa_id: i64,
    pub titulo: String,
    pub data: NaiveDate,
    #[serde(rename = "pontuacaoMaxima")]
    pub pontuacao_maxima: i64,
    pub created_at: DateTime<Utc>,
}

// Nota de um aluno numa atividade (0 ..= pontuacaoMaxima).
// Lançar de novo para o mesmo par (atividade, aluno) substitui o valor.
#[derive(Debug, Clone, Serialize)]
pub struct Nota {
    pub id: i64,
    #[serde(rename = "atividadeId")]
    pub atividade_id: i64,
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    pub nota: i64,
    pub comentario: Option<String>,
    pub created_at: DateTime<Utc>,
}

// Feedback de etapa por aluno. Campos presentes no upsert substituem os
// anteriores; campos ausentes permanecem.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub id: i64,
    #[serde(rename = "etapaId")]
    pub etapa_id: i64,
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "desempenhoAcademico")]
    pub desempenho_academico: Option<String>,
    // Percentagem 0-100
    pub frequencia: Option<i64>,
    // "Excelente" | "Ok" | "Inapropriado"
    pub comportamento: Option<String>,
    #[serde(rename = "observacoesGerais")]
    pub observacoes_gerais: Option<String>,
    #[serde(rename = "comentariosConselho")]
    pub comentarios_conselho: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Payloads ---

#[derive(Debug, Deserialize)]
pub struct NovaAtividadePayload {
    #[serde(rename = "etapaId")]
    pub etapa_id: i64,
    pub titulo: String,
    pub data: NaiveDate,
    #[serde(rename = "pontuacaoMaxima")]
    pub pontuacao_maxima: i64,
}

#[derive(Debug, Deserialize)]
pub struct LancarNotaPayload {
    #[serde(rename = "atividadeId")]
    pub atividade_id: i64,
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    pub nota: i64,
    pub comentario: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackPayload {
    #[serde(rename = "etapaId")]
    pub etapa_id: i64,
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "desempenhoAcademico")]
    pub desempenho_academico: Option<String>,
    pub frequencia: Option<i64>,
    pub comportamento: Option<String>,
    #[serde(rename = "observacoesGerais")]
    pub observacoes_gerais: Option<String>,
    #[serde(rename = "comentariosConselho")]
    pub comentarios_conselho: Option<String>,
}
