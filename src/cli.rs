//! Subcomandos da CLI
//!
//! Cada comando chama o cliente `trello` e devolve um `serde_json::Value`,
//! impresso em JSON compacto ou indentado conforme `--output`.

use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};
use trello::{Arguments, CustomFieldValue, TrelloClient};

use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

/// Trello CLI - consulta boards e cards, lê e grava custom fields
#[derive(Parser, Debug)]
#[command(name = "trello")]
#[command(version)]
#[command(about = "CLI para a API REST do Trello", long_about = None)]
pub struct Cli {
    /// Formato de saída (json, pretty)
    #[arg(short = 'o', long, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Modo verbose para debug
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Comando a executar
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(format!("Formato desconhecido: {}", s)),
        }
    }
}

/// Tipo do valor passado para `set-field`
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Checkbox,
    /// Limpa o campo (envia `""`)
    Clear,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Clear => "clear",
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(FieldKind::Text),
            "number" => Ok(FieldKind::Number),
            "date" => Ok(FieldKind::Date),
            "checkbox" | "checked" | "bool" => Ok(FieldKind::Checkbox),
            "clear" => Ok(FieldKind::Clear),
            _ => Err(format!("Tipo de campo desconhecido: {}", s)),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mostra um board e suas listas
    Board {
        /// ID do board
        board_id: String,
    },

    /// Lista os cards de um board ou de uma lista
    Cards {
        /// ID do board
        #[arg(short = 'b', long, conflicts_with = "list", required_unless_present = "list")]
        board: Option<String>,

        /// ID da lista
        #[arg(short = 'l', long)]
        list: Option<String>,
    },

    /// Mostra um card com os custom fields resolvidos por nome
    Card {
        /// ID do card
        card_id: String,
    },

    /// Custom fields definidos num board
    Fields {
        /// ID do board
        board_id: String,
    },

    /// Definição de um custom field
    Field {
        /// ID do custom field
        field_id: String,
    },

    /// Grava o valor de um custom field num card
    SetField {
        /// ID do card
        card_id: String,

        /// ID do custom field
        field_id: String,

        /// Valor (dispensável com --kind clear)
        value: Option<String>,

        /// Tipo do valor (text, number, date, checkbox, clear)
        #[arg(short = 'k', long, default_value = "text")]
        kind: FieldKind,
    },

    /// Cadeia de cards de origem (cópias), do mais próximo ao mais antigo
    Ancestors {
        /// ID do card
        card_id: String,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Board { .. } => "board",
            Commands::Cards { .. } => "cards",
            Commands::Card { .. } => "card",
            Commands::Fields { .. } => "fields",
            Commands::Field { .. } => "field",
            Commands::SetField { .. } => "set-field",
            Commands::Ancestors { .. } => "ancestors",
        }
    }
}

/// Executa o comando e devolve a saída já formatada
pub async fn run(cli: &Cli, client: &TrelloClient) -> AppResult<String> {
    let name = cli.command.name();
    log_command_started(name);
    let started = Instant::now();

    let output = match execute(&cli.command, client).await {
        Ok(output) => output,
        Err(AppError::Trello(e)) => {
            log_trello_api_error(name, e.status(), &e.to_string());
            return Err(AppError::Trello(e));
        }
        Err(e) => return Err(e),
    };

    log_command_finished(name, started.elapsed().as_millis());
    render(&output, cli.output)
}

pub async fn execute(command: &Commands, client: &TrelloClient) -> AppResult<Value> {
    let args = Arguments::defaults();

    let output = match command {
        Commands::Board { board_id } => {
            let board = client.get_board(board_id, &args).await?;
            let lists = client.get_board_lists(board_id, &args).await?;
            json!({
                "board": serde_json::to_value(&board)?,
                "lists": serde_json::to_value(&lists)?,
            })
        }

        Commands::Cards { board, list } => {
            let cards = match (board, list) {
                (Some(board_id), _) => client.get_board_cards(board_id, &args).await?,
                (None, Some(list_id)) => client.get_list_cards(list_id, &args).await?,
                (None, None) => {
                    return Err(AppError::ValidationError(
                        "either --board or --list is required".to_string(),
                    ))
                }
            };
            serde_json::to_value(&cards)?
        }

        Commands::Card { card_id } => {
            let card_args = Arguments::new().with("customFieldItems", "true");
            let card = client.get_card(card_id, &card_args).await?;

            let fields = if card.id_board.is_empty() {
                Vec::new()
            } else {
                client.get_board_custom_fields(&card.id_board, &args).await?
            };

            let values: Map<String, Value> = card
                .custom_field_values(&fields)
                .iter()
                .map(|(name, value)| (name.clone(), value_to_json(value)))
                .collect();

            json!({
                "card": serde_json::to_value(&card)?,
                "createdAt": card.created_at().map(|t| t.to_rfc3339()),
                "customFields": values,
            })
        }

        Commands::Fields { board_id } => {
            serde_json::to_value(client.get_board_custom_fields(board_id, &args).await?)?
        }

        Commands::Field { field_id } => {
            serde_json::to_value(client.get_custom_field(field_id, &args).await?)?
        }

        Commands::SetField {
            card_id,
            field_id,
            value,
            kind,
        } => {
            let parsed = parse_field_value(*kind, value.as_deref())?;
            let shown = value_to_json(&parsed);

            client
                .set_custom_field(card_id, field_id, parsed, &args)
                .await?;
            log_custom_field_set(card_id, field_id, &shown.to_string());

            json!({
                "card": card_id,
                "field": field_id,
                "kind": kind.as_str(),
                "value": shown,
            })
        }

        Commands::Ancestors { card_id } => {
            let ancestors = client.get_ancestor_cards(card_id, &args).await?;
            let summary: Vec<Value> = ancestors
                .iter()
                .map(|card| {
                    json!({
                        "id": card.id,
                        "name": card.name,
                        "idBoard": card.id_board,
                        "idList": card.id_list,
                    })
                })
                .collect();
            Value::Array(summary)
        }
    };

    Ok(output)
}

pub fn render(output: &Value, format: OutputFormat) -> AppResult<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(output)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(output)?,
    };
    Ok(rendered)
}

/// Converte o texto da linha de comando no valor do tipo pedido
pub fn parse_field_value(kind: FieldKind, raw: Option<&str>) -> AppResult<CustomFieldValue> {
    // Texto vazio é o que limpa o campo no Trello
    if kind == FieldKind::Clear {
        return Ok(CustomFieldValue::Text(String::new()));
    }

    let Some(raw) = raw else {
        log_validation_error("value", "missing");
        return Err(AppError::ValidationError(format!(
            "a value is required for kind '{}'",
            kind.as_str()
        )));
    };

    let value = match kind {
        FieldKind::Text => CustomFieldValue::Text(raw.to_string()),
        FieldKind::Number => parse_number(raw)?,
        FieldKind::Date => CustomFieldValue::Timestamp(parse_date(raw)?),
        FieldKind::Checkbox => CustomFieldValue::Boolean(parse_checkbox(raw)?),
        FieldKind::Clear => CustomFieldValue::Text(String::new()),
    };

    Ok(value)
}

fn parse_number(raw: &str) -> AppResult<CustomFieldValue> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(CustomFieldValue::Integer(n));
    }
    if let Ok(x) = raw.parse::<f64>() {
        if x.is_finite() {
            return Ok(CustomFieldValue::Float(x));
        }
    }

    log_validation_error("number", raw);
    Err(AppError::ValidationError(format!("invalid number: {}", raw)))
}

/// RFC 3339 ou `YYYY-MM-DD` (meia-noite UTC)
pub fn parse_date(raw: &str) -> AppResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc));
        }
    }

    log_validation_error("date", raw);
    Err(AppError::ValidationError(format!(
        "invalid date: {}. Use RFC 3339 or YYYY-MM-DD",
        raw
    )))
}

fn parse_checkbox(raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => {
            log_validation_error("checkbox", other);
            Err(AppError::ValidationError(format!(
                "invalid checkbox value: {}",
                other
            )))
        }
    }
}

/// Representação legível (JSON nativo) de um valor de custom field
fn value_to_json(value: &CustomFieldValue) -> Value {
    match value {
        CustomFieldValue::Unset => Value::Null,
        CustomFieldValue::Text(s) => json!(s),
        CustomFieldValue::Integer(n) => json!(n),
        CustomFieldValue::Float(x) => json!(x),
        CustomFieldValue::Boolean(b) => json!(b),
        CustomFieldValue::Timestamp(t) => json!(t.to_rfc3339()),
        other => json!(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> TrelloClient {
        TrelloClient::new("test-key", "test-token")
            .unwrap()
            .with_base_url(server.base_url())
    }

    #[test]
    fn test_parse_cli() {
        let cli = Cli::try_parse_from([
            "trello", "-o", "json", "set-field", "card1", "field1", "42", "--kind", "number",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        assert!(!cli.verbose);
        match cli.command {
            Commands::SetField { card_id, field_id, value, kind } => {
                assert_eq!(card_id, "card1");
                assert_eq!(field_id, "field1");
                assert_eq!(value.as_deref(), Some("42"));
                assert_eq!(kind, FieldKind::Number);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cards_requires_board_or_list() {
        assert!(Cli::try_parse_from(["trello", "cards"]).is_err());
        assert!(Cli::try_parse_from(["trello", "cards", "--board", "b", "--list", "l"]).is_err());
        assert!(Cli::try_parse_from(["trello", "cards", "--list", "l"]).is_ok());
    }

    #[test]
    fn test_parse_field_value_kinds() {
        assert_eq!(
            parse_field_value(FieldKind::Text, Some("hello")).unwrap(),
            CustomFieldValue::Text("hello".into())
        );
        assert_eq!(
            parse_field_value(FieldKind::Number, Some("42")).unwrap(),
            CustomFieldValue::Integer(42)
        );
        assert_eq!(
            parse_field_value(FieldKind::Number, Some("2.5")).unwrap(),
            CustomFieldValue::Float(2.5)
        );
        assert_eq!(
            parse_field_value(FieldKind::Checkbox, Some("TRUE")).unwrap(),
            CustomFieldValue::Boolean(true)
        );
        assert_eq!(
            parse_field_value(FieldKind::Clear, None).unwrap(),
            CustomFieldValue::Text(String::new())
        );
    }

    #[test]
    fn test_parse_field_value_rejects_bad_input() {
        assert!(matches!(
            parse_field_value(FieldKind::Number, Some("abc")),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            parse_field_value(FieldKind::Number, Some("NaN")),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            parse_field_value(FieldKind::Checkbox, Some("maybe")),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            parse_field_value(FieldKind::Text, None),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_parse_date() {
        let expected = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2021-06-01").unwrap(), expected);
        assert_eq!(parse_date("2021-06-01T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_date("2021-06-01T02:00:00+02:00").unwrap(), expected);
        assert!(parse_date("01/06/2021").is_err());
    }

    #[test]
    fn test_render() {
        let value = json!({"a": 1});
        assert_eq!(render(&value, OutputFormat::Json).unwrap(), r#"{"a":1}"#);
        assert!(render(&value, OutputFormat::Pretty).unwrap().contains('\n'));
    }

    #[tokio::test]
    async fn test_set_field_command() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/cards/c1/customField/f1/item")
                    .query_param("key", "test-key")
                    .json_body(json!({"value": {"number": "42"}}));
                then.status(200).json_body(json!({}));
            })
            .await;

        let command = Commands::SetField {
            card_id: "c1".into(),
            field_id: "f1".into(),
            value: Some("42".into()),
            kind: FieldKind::Number,
        };
        let output = execute(&command, &client_for(&server)).await.unwrap();

        mock.assert_async().await;
        assert_eq!(output["value"], json!(42));
        assert_eq!(output["kind"], json!("number"));
    }

    #[tokio::test]
    async fn test_clear_command_sends_bare_empty() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PUT)
                    .path("/cards/c1/customField/f1/item")
                    .json_body(json!({"value": ""}));
                then.status(200).json_body(json!({}));
            })
            .await;

        let cli = Cli::try_parse_from(["trello", "set-field", "c1", "f1", "--kind", "clear"]).unwrap();
        execute(&cli.command, &client_for(&server)).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_card_command_resolves_field_names() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/cards/4d5ea62fd76aa1136000000c")
                    .query_param("customFieldItems", "true");
                then.status(200).json_body(json!({
                    "id": "4d5ea62fd76aa1136000000c",
                    "name": "Card",
                    "idBoard": "b1",
                    "customFieldItems": [
                        {"id": "i1", "idValue": "o2", "idCustomField": "f1", "idModel": "4d5ea62fd76aa1136000000c", "modelType": "card"},
                        {"id": "i2", "value": {"checked": "true"}, "idCustomField": "f2", "idModel": "4d5ea62fd76aa1136000000c", "modelType": "card"}
                    ]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/boards/b1/customFields");
                then.status(200).json_body(json!([
                    {"id": "f1", "name": "Priority", "type": "list", "options": [
                        {"id": "o1", "value": {"text": "Low"}},
                        {"id": "o2", "value": {"text": "High"}}
                    ]},
                    {"id": "f2", "name": "Done", "type": "checkbox"}
                ]));
            })
            .await;

        let command = Commands::Card {
            card_id: "4d5ea62fd76aa1136000000c".into(),
        };
        let output = execute(&command, &client_for(&server)).await.unwrap();

        assert_eq!(output["customFields"]["Priority"], json!("High"));
        assert_eq!(output["customFields"]["Done"], json!(true));
        assert_eq!(output["createdAt"], json!("2011-02-18T17:02:39+00:00"));
    }

    #[tokio::test]
    async fn test_run_reports_api_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/boards/missing");
                then.status(404).body("The requested resource was not found.");
            })
            .await;

        let cli = Cli::try_parse_from(["trello", "board", "missing"]).unwrap();
        let err = run(&cli, &client_for(&server)).await.unwrap_err();

        assert!(matches!(err, AppError::Trello(ref e) if e.is_not_found()));
        assert_eq!(err.exit_code(), 4);
    }
}
