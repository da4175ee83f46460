//! Cliente HTTP para a API do Trello

use crate::args::Arguments;
use crate::error::{Result, TrelloError};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// URL base da API REST do Trello (versão 1)
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Cliente para interagir com a API do Trello
///
/// A autenticação do Trello é feita por query string: toda requisição leva
/// `key` (API key da aplicação) e `token` (token do usuário).
#[derive(Clone)]
pub struct TrelloClient {
    http_client: HttpClient,
    api_key: String,
    token: String,
    base_url: String,
}

impl std::fmt::Debug for TrelloClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl TrelloClient {
    /// Cria um novo cliente Trello
    ///
    /// # Timeouts
    ///
    /// - Total: 30s
    /// - Connect: 5s
    pub fn new(api_key: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self::with_timeouts(api_key, token, 30, 5)
    }

    /// Cria um novo cliente com timeouts customizados
    pub fn with_timeouts(
        api_key: impl Into<String>,
        token: impl Into<String>,
        total_timeout_secs: u64,
        connect_timeout_secs: u64,
    ) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(total_timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .map_err(|e| {
                TrelloError::ConfigError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Aponta o cliente para outra URL base (proxy, mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, args: &Arguments) -> RequestBuilder {
        let url = self.url(path);

        tracing::debug!("{} {}", method, url);

        self.http_client
            .request(method, &url)
            .query(&[("key", self.api_key.as_str()), ("token", self.token.as_str())])
            .query(&args.as_query())
    }

    /// Executa uma requisição GET
    pub(crate) async fn get(&self, path: &str, args: &Arguments) -> Result<Response> {
        let response = self.request(Method::GET, path, args).send().await?;
        self.handle_response(response).await
    }

    /// Executa uma requisição GET e parseia JSON
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        args: &Arguments,
    ) -> Result<T> {
        let response = self.get(path, args).await?;
        let json = response.json().await?;
        Ok(json)
    }

    /// Executa uma requisição POST (parâmetros na query string, como a API espera)
    pub(crate) async fn post(&self, path: &str, args: &Arguments) -> Result<Response> {
        let response = self.request(Method::POST, path, args).send().await?;
        self.handle_response(response).await
    }

    /// Executa uma requisição POST e parseia JSON
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        args: &Arguments,
    ) -> Result<T> {
        let response = self.post(path, args).await?;
        let json = response.json().await?;
        Ok(json)
    }

    /// Executa uma requisição PUT, opcionalmente com body JSON
    pub(crate) async fn put(
        &self,
        path: &str,
        args: &Arguments,
        body: Option<&Value>,
    ) -> Result<Response> {
        let mut request = self.request(Method::PUT, path, args);
        if let Some(body) = body {
            tracing::debug!(
                "PUT body: {}",
                serde_json::to_string(body).unwrap_or_default()
            );
            request = request.json(body);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    /// Executa uma requisição PUT e parseia JSON
    pub(crate) async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        args: &Arguments,
        body: Option<&Value>,
    ) -> Result<T> {
        let response = self.put(path, args, body).await?;
        let json = response.json().await?;
        Ok(json)
    }

    /// Executa uma requisição DELETE
    pub(crate) async fn delete(&self, path: &str, args: &Arguments) -> Result<Response> {
        let response = self.request(Method::DELETE, path, args).send().await?;
        self.handle_response(response).await
    }

    /// Processa a resposta HTTP e trata erros
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!("Trello API error ({}): {}", status_code, error_body);

            // O Trello responde ora texto puro ("invalid id"), ora JSON
            let message = if let Ok(json) = serde_json::from_str::<Value>(&error_body) {
                json.get("message")
                    .or_else(|| json.get("error"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(&error_body)
                    .to_string()
            } else {
                error_body
            };

            Err(TrelloError::ApiError {
                status: status_code,
                message,
            })
        }
    }

    /// Obtém a API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Obtém a URL base
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Rejeita IDs vazios antes de qualquer requisição
pub(crate) fn require_id<'a>(kind: &str, id: &'a str) -> Result<&'a str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(TrelloError::ValidationError(format!("{} id is empty", kind)));
    }
    Ok(id)
}

/// Valida e codifica um ID para uso como segmento de path
pub(crate) fn path_id(kind: &str, id: &str) -> Result<String> {
    let id = require_id(kind, id)?;
    Ok(urlencoding::encode(id).into_owned())
}
