//! Membros e anexos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Usuário do Trello
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Member {
    pub id: String,

    pub username: String,

    pub full_name: String,

    pub initials: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Anexo de um card (upload ou link)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,

    pub name: String,

    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    pub is_upload: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_member: Option<String>,

    pub pos: f64,
}

impl Attachment {
    /// Anexo do tipo link
    pub fn link(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
    }
}
