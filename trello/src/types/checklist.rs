//! Checklists de cards
//!
//! Um card pode ter zero ou mais checklists; cada checklist tem itens com
//! estado `complete` ou `incomplete`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Checklist {
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id_board: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id_card: String,

    pub pos: f64,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub check_items: Vec<CheckItem>,
}

/// Item de um checklist
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckItem {
    pub id: String,

    pub name: String,

    pub state: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub id_checklist: String,

    pub pos: f64,
}

/// Estado de um item como aparece em `checkItemStates` no card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckItemState {
    pub id_check_item: String,

    pub state: String,
}

impl CheckItem {
    pub fn is_complete(&self) -> bool {
        self.state == "complete"
    }
}

impl Checklist {
    /// (concluídos, total)
    pub fn progress(&self) -> (usize, usize) {
        let done = self.check_items.iter().filter(|i| i.is_complete()).count();
        (done, self.check_items.len())
    }
}
