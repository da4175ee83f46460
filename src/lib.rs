//! Aplicação de linha de comando sobre o crate `trello`
//!
//! - `config`: settings (arquivos `config/*`, `.env`, variáveis `TRELLO_*`)
//! - `cli`: subcomandos e parsing de valores de custom field
//! - `utils`: erros da aplicação e helpers de logging

pub mod cli;
pub mod config;
pub mod utils;
