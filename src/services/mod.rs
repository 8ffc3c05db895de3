// src/services/mod.rs
pub mod atividade_service;
pub mod auth_service;
pub mod config_service;
pub mod questao_service;
pub mod turma_service;
