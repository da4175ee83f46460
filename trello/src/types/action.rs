//! Actions (histórico de atividades)
//!
//! Usadas aqui para rastrear cópias de cards: uma action `copyCard` guarda o
//! card de origem em `data.cardSource`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const COPY_CARD: &str = "copyCard";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Action {
    pub id: String,

    pub id_member_creator: String,

    #[serde(rename = "type")]
    pub action_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    pub data: ActionData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<ActionRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_source: Option<ActionRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<ActionRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ActionRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_before: Option<ActionRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_after: Option<ActionRef>,
}

/// Referência resumida (id + nome) dentro de `data`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRef {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Action {
    pub fn is_copy_card(&self) -> bool {
        self.action_type == COPY_CARD
    }

    /// ID do card de origem de uma cópia
    pub fn source_card_id(&self) -> Option<&str> {
        self.data
            .card_source
            .as_ref()
            .map(|c| c.id.as_str())
            .filter(|id| !id.is_empty())
    }
}
