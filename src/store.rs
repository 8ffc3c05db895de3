// src/store.rs
//
// Store de entidades em memória: uma coleção por tipo, protegidas por um
// único RwLock. Toda mutação acontece dentro de uma secção de escrita, o que
// torna atómicas as cascatas (turma + etapas, transferência de matrícula).
// Nada é apagado; os ids são atribuídos como tamanho-da-coleção + 1 e por
// isso permanecem estáveis.
use crate::models::{
    atividade::{Atividade, Feedback, Nota},
    configuracao::Configuracao,
    questao::{BancoQuestoes, QuestaoIngles, RespostaAluno},
    turma::{Aluno, Etapa, Matricula, Turma},
    user::{Professor, User},
};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
pub struct Dados {
    pub users: Vec<User>,
    pub professores: Vec<Professor>,
    pub turmas: Vec<Turma>,
    pub alunos: Vec<Aluno>,
    pub matriculas: Vec<Matricula>,
    pub etapas: Vec<Etapa>,
    pub atividades: Vec<Atividade>,
    pub notas: Vec<Nota>,
    pub feedbacks: Vec<Feedback>,
    pub questoes_ingles: Vec<QuestaoIngles>,
    pub bancos_questoes: Vec<BancoQuestoes>,
    pub respostas_alunos: Vec<RespostaAluno>,
    pub configuracoes: Vec<Configuracao>,
}

/// Próximo id de uma coleção (nunca reutilizado: não há remoções).
pub fn proximo_id<T>(registros: &[T]) -> i64 {
    registros.len() as i64 + 1
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    dados: Arc<RwLock<Dados>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Dados> {
        self.dados.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Dados> {
        self.dados.write().await
    }
}

impl Dados {
    pub fn user_por_id(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // Comparação exata, sensível a maiúsculas, como na referência
    pub fn user_por_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn professor_por_user_id(&self, user_id: i64) -> Option<&Professor> {
        self.professores.iter().find(|p| p.user_id == user_id)
    }

    pub fn etapa_por_id(&self, id: i64) -> Option<&Etapa> {
        self.etapas.iter().find(|e| e.id == id)
    }

    pub fn atividade_por_id(&self, id: i64) -> Option<&Atividade> {
        self.atividades.iter().find(|a| a.id == id)
    }
}
