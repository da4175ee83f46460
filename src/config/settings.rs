use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, Source};
use serde::{Deserialize, Serialize};
use trello::TrelloClient;

use crate::utils::{AppError, AppResult};

/// Variáveis de ambiente lidas diretamente (sem prefixo)
const ENV_OVERRIDES: [(&str, &str); 3] = [
    ("TRELLO_API_KEY", "trello.api_key"),
    ("TRELLO_TOKEN", "trello.token"),
    ("TRELLO_BASE_URL", "trello.base_url"),
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub trello: TrelloSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrelloSettings {
    pub api_key: String,
    pub token: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Self::defaults()?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        let direct: Vec<(&str, String)> = ENV_OVERRIDES
            .iter()
            .filter_map(|(var, key)| std::env::var(var).ok().map(|value| (*key, value)))
            .collect();

        // TRELLO_CLI__TRELLO__TIMEOUT_SECS=60, etc.
        let prefixed = Environment::with_prefix("TRELLO_CLI").separator("__");

        Self::layered(builder, &direct, &prefixed)
    }

    /// Aplica `TRELLO_*` e depois o ambiente prefixado, ambos como override
    ///
    /// `set_override` vence qualquer source adicionada, então o ambiente
    /// prefixado também entra como override para ficar por último.
    fn layered(
        mut builder: ConfigBuilder<DefaultState>,
        direct: &[(&str, String)],
        prefixed: &Environment,
    ) -> Result<Self, ConfigError> {
        for (key, value) in direct {
            builder = builder.set_override(*key, value.as_str())?;
        }
        for (key, value) in prefixed.collect()? {
            builder = builder.set_override(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Valores padrão antes de qualquer fonte
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("trello.api_key", "")?
            .set_default("trello.token", "")?
            .set_default("trello.base_url", trello::DEFAULT_BASE_URL)?
            .set_default("trello.timeout_secs", 30_i64)?
            .set_default("trello.connect_timeout_secs", 5_i64)
    }

    /// Credenciais obrigatórias, checadas antes de qualquer requisição
    pub fn validate(&self) -> AppResult<()> {
        if self.trello.api_key.trim().is_empty() {
            return Err(AppError::ConfigError(
                "TRELLO_API_KEY is not set".to_string(),
            ));
        }
        if self.trello.token.trim().is_empty() {
            return Err(AppError::ConfigError("TRELLO_TOKEN is not set".to_string()));
        }
        Ok(())
    }

    /// Monta o cliente HTTP a partir das settings
    pub fn client(&self) -> AppResult<TrelloClient> {
        self.validate()?;

        let client = TrelloClient::with_timeouts(
            self.trello.api_key.clone(),
            self.trello.token.clone(),
            self.trello.timeout_secs,
            self.trello.connect_timeout_secs,
        )?
        .with_base_url(self.trello.base_url.clone());

        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(overrides: &[(&str, &str)]) -> Settings {
        let mut builder = Settings::defaults().unwrap();
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build().unwrap().try_deserialize().unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = settings_with(&[]);
        assert_eq!(settings.trello.base_url, "https://api.trello.com/1");
        assert_eq!(settings.trello.timeout_secs, 30);
        assert_eq!(settings.trello.connect_timeout_secs, 5);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let settings = settings_with(&[("trello.token", "tok")]);
        let err = settings.client().unwrap_err();
        assert!(matches!(err, AppError::ConfigError(ref m) if m.contains("TRELLO_API_KEY")));

        let settings = settings_with(&[("trello.api_key", "key"), ("trello.token", "  ")]);
        assert!(matches!(
            settings.validate(),
            Err(AppError::ConfigError(ref m)) if m.contains("TRELLO_TOKEN")
        ));
    }

    #[test]
    fn test_prefixed_env_wins_over_direct_vars() {
        let env = config::Map::from([
            ("TRELLO_CLI__TRELLO__TOKEN".to_string(), "from-prefixed".to_string()),
            ("TRELLO_CLI__TRELLO__TIMEOUT_SECS".to_string(), "60".to_string()),
        ]);
        let prefixed = Environment::with_prefix("TRELLO_CLI")
            .separator("__")
            .source(Some(env));
        let direct = [
            ("trello.api_key", "direct-key".to_string()),
            ("trello.token", "direct-token".to_string()),
        ];

        let settings = Settings::layered(Settings::defaults().unwrap(), &direct, &prefixed).unwrap();

        assert_eq!(settings.trello.api_key, "direct-key");
        assert_eq!(settings.trello.token, "from-prefixed");
        assert_eq!(settings.trello.timeout_secs, 60);
    }

    #[test]
    fn test_load_failure_maps_to_settings_exit_code() {
        let env = config::Map::from([(
            "TRELLO_CLI__TRELLO__TIMEOUT_SECS".to_string(),
            "soon".to_string(),
        )]);
        let prefixed = Environment::with_prefix("TRELLO_CLI")
            .separator("__")
            .source(Some(env));

        let err = Settings::layered(Settings::defaults().unwrap(), &[], &prefixed).unwrap_err();
        let app_err = AppError::from(err);

        assert!(matches!(app_err, AppError::Settings(_)));
        assert_eq!(app_err.exit_code(), 78);
    }

    #[test]
    fn test_client_uses_base_url() {
        let settings = settings_with(&[
            ("trello.api_key", "key"),
            ("trello.token", "tok"),
            ("trello.base_url", "http://localhost:9999/1/"),
        ]);
        let client = settings.client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999/1");
        assert_eq!(client.api_key(), "key");
    }
}
