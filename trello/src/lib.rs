//! Cliente da API REST do Trello
//!
//! Interface tipo-segura para boards, listas, cards, membros, checklists e
//! custom fields. O ponto central é o codec de valores de custom field
//! ([`CustomFieldValue`]): converte valores nativos (texto, número, booleano,
//! data) para o formato da API e de volta.
//!
//! # API Trello v1
//!
//! - **Boards**: `/boards/{id}`, `/boards/{id}/cards`, `/boards/{id}/lists`
//! - **Lists**: `/lists/{id}`, `/lists/{id}/cards`
//! - **Cards**: `/cards/{id}`, `/cards/{id}/actions`, `/cards/{id}/attachments`
//! - **Custom Fields**: `/boards/{id}/customFields`, `/cards/{id}/customField/{field}/item`
//!
//! Toda requisição leva `key` e `token` na query string.
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use trello::{Arguments, TrelloClient};
//!
//! #[tokio::main]
//! async fn main() -> trello::Result<()> {
//!     // Credenciais SEMPRE de variáveis de ambiente
//!     let key = std::env::var("TRELLO_API_KEY").unwrap_or_default();
//!     let token = std::env::var("TRELLO_TOKEN").unwrap_or_default();
//!
//!     let client = TrelloClient::new(key, token)?;
//!     let args = Arguments::new().with("customFieldItems", "true");
//!     let card = client.get_card("57f5183c691585658d408681", &args).await?;
//!
//!     client.set_custom_field(&card.id, "5c1f0e4d", 13, &Arguments::defaults()).await?;
//!     Ok(())
//! }
//! ```

// Módulos públicos
pub mod args;
pub mod boards;
pub mod cards;
pub mod checklists;
pub mod client;
pub mod error;
pub mod fields;
pub mod lists;
pub mod members;
pub mod types;

// Re-exports principais
pub use args::Arguments;
pub use client::{TrelloClient, DEFAULT_BASE_URL};
pub use error::{Result, TrelloError};

// Re-exports de types para conveniência
pub use types::{
    Action, Attachment, Board, Card, CheckItem, Checklist, CustomField, CustomFieldItem,
    CustomFieldOption, CustomFieldValue, Label, List, Member, WireValue,
};
