//! Operações sobre membros

use crate::args::Arguments;
use crate::client::{path_id, TrelloClient};
use crate::error::Result;
use crate::types::Member;

impl TrelloClient {
    /// Busca um membro por ID ou username (`me` = dono do token)
    ///
    /// `GET /1/members/{member_id}`
    pub async fn get_member(&self, member_id: &str, args: &Arguments) -> Result<Member> {
        let path = format!("members/{}", path_id("member", member_id)?);
        self.get_json(&path, args).await
    }
}
