//! Operações sobre checklists

use crate::args::Arguments;
use crate::client::{path_id, TrelloClient};
use crate::error::Result;
use crate::types::Checklist;

impl TrelloClient {
    /// `GET /1/cards/{card_id}/checklists`
    pub async fn get_card_checklists(
        &self,
        card_id: &str,
        args: &Arguments,
    ) -> Result<Vec<Checklist>> {
        let path = format!("cards/{}/checklists", path_id("card", card_id)?);
        self.get_json(&path, args).await
    }

    /// `GET /1/checklists/{checklist_id}`
    pub async fn get_checklist(&self, checklist_id: &str, args: &Arguments) -> Result<Checklist> {
        let path = format!("checklists/{}", path_id("checklist", checklist_id)?);
        self.get_json(&path, args).await
    }
}
