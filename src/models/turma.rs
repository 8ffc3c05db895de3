// src/models/turma.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Turma (classe) de um professor. Ex: nome "MED-1A", nivel "A1", ano 2025.
#[derive(Debug, Clone, Serialize)]
pub struct Turma {
    pub id: i64,
    pub nome: String,
    pub nivel: String,
    pub ano: i64,
    #[serde(rename = "professorId")]
    pub professor_id: i64,
    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

// Etapa de avaliação. Cada turma nasce com exatamente três (30/35/35 pontos).
#[derive(Debug, Clone, Serialize)]
pub struct Etapa {
    pub id: i64,
    #[serde(rename = "turmaId")]
    pub turma_id: i64,
    pub numero: i64,
    pub nome: String,
    #[serde(rename = "pontosMaximos")]
    pub pontos_maximos: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Aluno {
    pub id: i64,
    // Registro Acadêmico, único entre todos os alunos
    pub ra: String,
    pub nome: String,
    pub nivel: String,
    pub created_at: DateTime<Utc>,
}

// Matrícula de um aluno numa turma. Transferências encerram a matrícula
// anterior (ativa = false, dataFim preenchida) e criam uma nova, preservando
// o histórico.
#[derive(Debug, Clone, Serialize)]
pub struct Matricula {
    pub id: i64,
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "turmaId")]
    pub turma_id: i64,
    pub ativa: bool,
    #[serde(rename = "dataInicio")]
    pub data_inicio: DateTime<Utc>,
    #[serde(rename = "dataFim")]
    pub data_fim: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// --- Payloads ---

// Campos opcionais de propósito: ausência ou valor "falsy" (string vazia,
// zero) responde 400, como na referência.
#[derive(Debug, Deserialize)]
pub struct NovaTurmaPayload {
    pub nome: Option<String>,
    pub nivel: Option<String>,
    pub ano: Option<i64>,
    #[serde(rename = "professorId")]
    pub professor_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NovoAlunoPayload {
    pub ra: Option<String>,
    pub nome: Option<String>,
    pub nivel: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NovaMatriculaPayload {
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "turmaId")]
    pub turma_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct TransferenciaPayload {
    #[serde(rename = "alunoId")]
    pub aluno_id: i64,
    #[serde(rename = "novaTurmaId")]
    pub nova_turma_id: i64,
}
