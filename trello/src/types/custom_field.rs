//! Custom Fields do Trello
//!
//! Dois lados distintos:
//! - **CustomField / CustomFieldOption**: descritores definidos no board
//!   (nome, tipo, posição, opções). Só leitura.
//! - **CustomFieldItem**: o valor de um campo num card específico.

use serde::{Deserialize, Serialize};

use super::field_value::CustomFieldValue;
use crate::error::{Result, TrelloError};

/// Único `modelType` aceito ao gravar um valor
pub const CARD_MODEL_TYPE: &str = "card";

/// Definição de um custom field (pertence a um board)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomField {
    pub id: String,

    /// ID do board dono do campo
    pub id_model: String,

    #[serde(rename = "modelType", skip_serializing_if = "String::is_empty")]
    pub model_type: String,

    pub field_group: String,

    pub name: String,

    pub pos: f64,

    pub display: CustomFieldDisplay,

    /// text, number, date, checkbox ou list
    #[serde(rename = "type")]
    pub field_type: String,

    pub options: Vec<CustomFieldOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFieldDisplay {
    #[serde(rename = "cardFront")]
    pub card_front: bool,
}

/// Opção de um campo do tipo `list`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldOption {
    pub id: String,

    pub id_custom_field: String,

    pub value: OptionValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    pub pos: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionValue {
    pub text: String,
}

impl CustomField {
    pub fn is_list(&self) -> bool {
        self.field_type == "list"
    }

    /// Busca uma opção pelo ID
    pub fn option(&self, option_id: &str) -> Option<&CustomFieldOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Busca uma opção pelo texto (case-insensitive)
    pub fn option_by_text(&self, text: &str) -> Option<&CustomFieldOption> {
        self.options
            .iter()
            .find(|o| o.value.text.eq_ignore_ascii_case(text))
    }
}

/// Valor de um custom field num card
///
/// Campos `list` trazem `idValue` (ID da opção) em vez de `value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomFieldItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Vazio (`Unset`) em itens de campos `list`
    #[serde(skip_serializing_if = "CustomFieldValue::is_unset")]
    pub value: CustomFieldValue,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_value: Option<String>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id_custom_field: String,

    /// ID do card
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id_model: String,

    #[serde(rename = "modelType", skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
}

impl CustomFieldItem {
    /// Item para o card `card_id` e o campo `field_id`
    pub fn new(
        card_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<CustomFieldValue>,
    ) -> Self {
        Self {
            id_model: card_id.into(),
            id_custom_field: field_id.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Seleciona uma opção de um campo `list`
    pub fn with_option(mut self, option_id: impl Into<String>) -> Self {
        self.id_value = Some(option_id.into());
        self
    }

    pub fn with_model_type(mut self, model_type: impl Into<String>) -> Self {
        self.model_type = Some(model_type.into());
        self
    }

    /// Só cards podem receber valores de custom field
    pub fn validate_model_type(&self) -> Result<()> {
        match self.model_type.as_deref() {
            None | Some("") | Some(CARD_MODEL_TYPE) => Ok(()),
            Some(other) => Err(TrelloError::UnsupportedModelType(other.to_string())),
        }
    }
}
