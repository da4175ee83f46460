//! Card types do Trello

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Attachment, CheckItemState, Checklist, CustomField, CustomFieldItem, CustomFieldValue, Label,
};

/// Representa um card do Trello
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    // ==================== IDENTIFICAÇÃO ====================
    /// ID do card (24 hex; os 8 primeiros são o timestamp de criação)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub id_short: i64,

    pub name: String,

    pub desc: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    // ==================== ORGANIZAÇÃO ====================
    pub id_board: String,

    pub id_list: String,

    /// Posição na lista
    pub pos: f64,

    pub closed: bool,

    pub subscribed: bool,

    // ==================== DATAS ====================
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DateTime<Utc>>,

    pub due_complete: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_activity: Option<DateTime<Utc>>,

    // ==================== PESSOAS & LABELS ====================
    pub id_members: Vec<String>,

    pub id_labels: Vec<String>,

    pub labels: Vec<Label>,

    // ==================== CHECKLISTS & ANEXOS ====================
    pub id_checklists: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checklists: Vec<Checklist>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub check_item_states: Vec<CheckItemState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_attachment_cover: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,

    // ==================== CAMPOS PERSONALIZADOS ====================
    /// Presente quando a requisição usa `customFieldItems=true`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_field_items: Vec<CustomFieldItem>,
}

impl Card {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Data de criação extraída do ID (8 primeiros dígitos hex = segundos Unix)
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let prefix = self.id.get(..8)?;
        let secs = u32::from_str_radix(prefix, 16).ok()?;
        Utc.timestamp_opt(i64::from(secs), 0).single()
    }

    /// Valores dos custom fields do card indexados pelo NOME do campo
    ///
    /// Itens de campos `list` viram o texto da opção selecionada. Itens cujo
    /// campo não está em `fields` são ignorados.
    pub fn custom_field_values(&self, fields: &[CustomField]) -> HashMap<String, CustomFieldValue> {
        let by_id: HashMap<&str, &CustomField> =
            fields.iter().map(|f| (f.id.as_str(), f)).collect();

        let mut values = HashMap::new();

        for item in &self.custom_field_items {
            let Some(field) = by_id.get(item.id_custom_field.as_str()) else {
                continue;
            };

            let value = match item.id_value.as_deref() {
                Some(option_id) if !option_id.is_empty() => match field.option(option_id) {
                    Some(option) => CustomFieldValue::Text(option.value.text.clone()),
                    None => {
                        tracing::debug!(
                            "Opção {} não encontrada no campo '{}'",
                            option_id,
                            field.name
                        );
                        continue;
                    }
                },
                _ => item.value.clone(),
            };

            values.insert(field.name.clone(), value);
        }

        values
    }
}
