//! Operações sobre listas

use crate::args::Arguments;
use crate::client::{path_id, require_id, TrelloClient};
use crate::error::Result;
use crate::types::{Card, List};

impl TrelloClient {
    /// `GET /1/lists/{list_id}`
    pub async fn get_list(&self, list_id: &str, args: &Arguments) -> Result<List> {
        let path = format!("lists/{}", path_id("list", list_id)?);
        self.get_json(&path, args).await
    }

    /// `GET /1/lists/{list_id}/cards`
    pub async fn get_list_cards(&self, list_id: &str, args: &Arguments) -> Result<Vec<Card>> {
        let path = format!("lists/{}/cards", path_id("list", list_id)?);
        self.get_json(&path, args).await
    }

    /// Cria `card` na lista `list_id` (ignora o `id_list` do card)
    pub async fn add_card_to_list(
        &self,
        list_id: &str,
        card: &Card,
        extra: &Arguments,
    ) -> Result<Card> {
        let card = Card {
            id_list: require_id("list", list_id)?.to_string(),
            ..card.clone()
        };
        self.create_card(&card, extra).await
    }
}
