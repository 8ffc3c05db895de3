// src/models/configuracao.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Par chave/valor de configuração da escola. `chave` é única; definir a mesma
// chave outra vez substitui o valor.
#[derive(Debug, Clone, Serialize)]
pub struct Configuracao {
    pub id: i64,
    pub chave: String,
    pub valor: String,
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ConfiguracaoPayload {
    pub chave: Option<String>,
    pub valor: Option<String>,
    pub descricao: Option<String>,
}
