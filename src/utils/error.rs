use thiserror::Error;
use trello::TrelloError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Trello error: {0}")]
    Trello(#[from] TrelloError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    /// Código de saída do processo para cada categoria de erro
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::ConfigError(_) | AppError::Settings(_) => 78,
            AppError::ValidationError(_) => 64,
            AppError::Trello(e) if e.is_not_found() => 4,
            _ => 1,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
