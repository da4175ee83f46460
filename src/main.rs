//! Trello CLI
//!
//! Fluxo:
//! - `.env` (opcional) e settings carregados antes de tudo
//! - Credenciais ausentes abortam antes de qualquer requisição
//! - Saída do comando em stdout, logs em stderr

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trello_cli::cli::{self, Cli};
use trello_cli::config::Settings;
use trello_cli::utils::logging::log_config_loaded;
use trello_cli::utils::AppResult;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carregar .env se existir
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Erro: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

async fn execute(cli: &Cli) -> AppResult<String> {
    // Falha de settings vira AppError::Settings (exit code 78)
    let settings = Settings::new()?;
    log_config_loaded(
        &std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()),
        &settings.trello.base_url,
    );

    let client = settings.client()?;
    cli::run(cli, &client).await
}

/// `RUST_LOG` tem prioridade; sem ele, `info` (ou `debug` com --verbose)
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
