//! Operações sobre boards

use crate::args::Arguments;
use crate::client::{path_id, require_id, TrelloClient};
use crate::error::Result;
use crate::types::{action::COPY_CARD, Action, Board, Card, List, Member};

impl TrelloClient {
    /// `GET /1/boards/{board_id}`
    pub async fn get_board(&self, board_id: &str, args: &Arguments) -> Result<Board> {
        let path = format!("boards/{}", path_id("board", board_id)?);
        self.get_json(&path, args).await
    }

    /// Todos os cards abertos do board
    ///
    /// `GET /1/boards/{board_id}/cards`
    pub async fn get_board_cards(&self, board_id: &str, args: &Arguments) -> Result<Vec<Card>> {
        let path = format!("boards/{}/cards", path_id("board", board_id)?);
        let cards: Vec<Card> = self.get_json(&path, args).await?;

        tracing::debug!("📋 Board {} tem {} cards", board_id, cards.len());
        Ok(cards)
    }

    /// `GET /1/boards/{board_id}/lists`
    pub async fn get_board_lists(&self, board_id: &str, args: &Arguments) -> Result<Vec<List>> {
        let path = format!("boards/{}/lists", path_id("board", board_id)?);
        self.get_json(&path, args).await
    }

    /// `GET /1/boards/{board_id}/members`
    pub async fn get_board_members(
        &self,
        board_id: &str,
        args: &Arguments,
    ) -> Result<Vec<Member>> {
        let path = format!("boards/{}/members", path_id("board", board_id)?);
        self.get_json(&path, args).await
    }

    /// `GET /1/boards/{board_id}/actions`
    pub async fn get_board_actions(
        &self,
        board_id: &str,
        args: &Arguments,
    ) -> Result<Vec<Action>> {
        let path = format!("boards/{}/actions", path_id("board", board_id)?);
        self.get_json(&path, args).await
    }

    /// Verifica se algum card do board foi copiado de `card_id`
    pub async fn board_contains_copy_of_card(
        &self,
        board_id: &str,
        card_id: &str,
        args: &Arguments,
    ) -> Result<bool> {
        let card_id = require_id("card", card_id)?;
        let filter = Arguments::new().with("filter", COPY_CARD);
        let args = Arguments::flatten([args, &filter]);

        let actions = self.get_board_actions(board_id, &args).await?;

        Ok(actions
            .iter()
            .filter(|a| a.is_copy_card())
            .any(|a| a.source_card_id() == Some(card_id)))
    }
}
