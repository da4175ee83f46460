//! Tipos de erro para o crate trello

use thiserror::Error;

/// Erros do cliente Trello
#[derive(Debug, Error)]
pub enum TrelloError {
    /// Erro de requisição HTTP
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Erro da API do Trello (status code não-2xx)
    #[error("Trello API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Erro de parsing JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Recurso não encontrado localmente (option, parent card, etc)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Erro de configuração
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Erro de validação (dados rejeitados antes de qualquer requisição)
    #[error("Validation error: {0}")]
    ValidationError(String),

    // ==================== CUSTOM FIELD VALUES ====================
    /// Valor sem representação no formato de custom field do Trello
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Fonte lazy falhou ao resolver para um valor primitivo
    #[error("unable to resolve custom field value: {0}")]
    UnresolvableSource(String),

    /// Campo `date` fora do formato `YYYY-MM-DDTHH:MM:SSZ`
    #[error("invalid custom field date: {0}")]
    DateParse(String),

    /// Campo `number` que não é inteiro nem decimal
    #[error("cannot convert {0} to number")]
    NumberConversion(String),

    /// CustomFieldItem apontando para algo que não é card
    #[error("unsupported model type: {0}")]
    UnsupportedModelType(String),
}

impl TrelloError {
    /// Status HTTP da resposta, quando o erro veio da API
    pub fn status(&self) -> Option<u16> {
        match self {
            TrelloError::ApiError { status, .. } => Some(*status),
            TrelloError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TrelloError::NotFound(_)) || self.status() == Some(404)
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Tipo Result padrão para o crate
pub type Result<T> = std::result::Result<T, TrelloError>;
