//! Boards, listas e labels

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Representa um board do Trello
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Board {
    pub id: String,

    pub name: String,

    pub desc: String,

    pub closed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_organization: Option<String>,

    pub pinned: bool,

    pub starred: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_activity: Option<DateTime<Utc>>,
}

/// Lista (coluna) de um board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct List {
    pub id: String,

    pub name: String,

    pub id_board: String,

    pub closed: bool,

    pub pos: f64,

    pub subscribed: bool,
}

/// Label de um board
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Label {
    pub id: String,

    pub id_board: String,

    pub name: String,

    /// Pode vir `null` para labels sem cor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
