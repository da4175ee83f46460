// ============================================================================
// Cards - Operações sobre cards do Trello
// ============================================================================
//
// 1. **Leitura:** get_card, get_card_actions
// 2. **Escrita:** create_card, archive_card/unarchive_card, delete_card, copy_card_to_list
// 3. **Relacionamentos:** add_member_to_card, add_url_attachment
// 4. **Cópias:** get_parent_card, get_ancestor_cards (via actions `copyCard`)
//
// A API de escrita do Trello recebe os campos na query string, não no body.

use std::collections::HashSet;

use chrono::SecondsFormat;

use crate::args::Arguments;
use crate::client::{path_id, require_id, TrelloClient};
use crate::error::{Result, TrelloError};
use crate::types::{action::COPY_CARD, Action, Attachment, Card, Member};

impl TrelloClient {
    /// Busca um card pelo ID
    ///
    /// Use `customFieldItems=true` em `args` para trazer os valores dos custom fields.
    ///
    /// `GET /1/cards/{card_id}`
    pub async fn get_card(&self, card_id: &str, args: &Arguments) -> Result<Card> {
        let path = format!("cards/{}", path_id("card", card_id)?);
        self.get_json(&path, args).await
    }

    /// Cria um card
    ///
    /// Envia `name`, `desc`, `idList`, `idLabels`, `idMembers`, `due`, `start`
    /// e `dueComplete` a partir de `card`; `extra` sobrescreve (ex: `pos=top`).
    /// Retorna o card criado (com ID, posição e datas preenchidos pela API).
    ///
    /// `POST /1/cards`
    pub async fn create_card(&self, card: &Card, extra: &Arguments) -> Result<Card> {
        let args = Arguments::flatten([&card_create_args(card), extra]);

        if args.get("idList").map_or(true, |id| id.trim().is_empty()) {
            return Err(TrelloError::ValidationError(
                "card idList is required to create a card".to_string(),
            ));
        }

        let created: Card = self.post_json("cards", &args).await?;

        tracing::info!("✅ Card criado: {} - {}", created.id, created.name);
        Ok(created)
    }

    /// Arquiva um card (`closed=true`)
    ///
    /// `PUT /1/cards/{card_id}?closed=true`
    pub async fn archive_card(&self, card_id: &str) -> Result<Card> {
        self.set_card_closed(card_id, true).await
    }

    /// Desarquiva um card (`closed=false`)
    pub async fn unarchive_card(&self, card_id: &str) -> Result<Card> {
        self.set_card_closed(card_id, false).await
    }

    async fn set_card_closed(&self, card_id: &str, closed: bool) -> Result<Card> {
        let path = format!("cards/{}", path_id("card", card_id)?);
        let args = Arguments::new().with("closed", closed.to_string());

        let card: Card = self.put_json(&path, &args, None).await?;

        tracing::info!(
            "📦 Card {} {}",
            card_id,
            if closed { "arquivado" } else { "desarquivado" }
        );
        Ok(card)
    }

    /// Remove um card definitivamente (sem volta, ao contrário de `archive_card`)
    ///
    /// `DELETE /1/cards/{card_id}`
    pub async fn delete_card(&self, card_id: &str) -> Result<()> {
        let path = format!("cards/{}", path_id("card", card_id)?);
        self.delete(&path, &Arguments::defaults()).await?;

        tracing::info!("🗑️ Card {} removido", card_id);
        Ok(())
    }

    /// Copia um card para outra lista, mantendo tudo do original
    ///
    /// `POST /1/cards?idList=...&idCardSource=...&keepFromSource=all`
    pub async fn copy_card_to_list(
        &self,
        card_id: &str,
        list_id: &str,
        extra: &Arguments,
    ) -> Result<Card> {
        let base = Arguments::new()
            .with("idList", require_id("list", list_id)?)
            .with("idCardSource", require_id("card", card_id)?)
            .with("keepFromSource", "all");
        let args = Arguments::flatten([&base, extra]);

        let copy: Card = self.post_json("cards", &args).await?;

        tracing::info!("📋 Card {} copiado para lista {} como {}", card_id, list_id, copy.id);
        Ok(copy)
    }

    /// Actions de um card (use `filter` em `args` para restringir os tipos)
    ///
    /// `GET /1/cards/{card_id}/actions`
    pub async fn get_card_actions(&self, card_id: &str, args: &Arguments) -> Result<Vec<Action>> {
        let path = format!("cards/{}/actions", path_id("card", card_id)?);
        self.get_json(&path, args).await
    }

    /// Card de onde este foi copiado, se houver
    ///
    /// `args` vale para a busca do card pai.
    pub async fn get_parent_card(&self, card_id: &str, args: &Arguments) -> Result<Option<Card>> {
        let filter = Arguments::new().with("filter", COPY_CARD);
        let actions = self.get_card_actions(card_id, &filter).await?;

        let parent_id = actions
            .iter()
            .filter(|a| a.is_copy_card())
            .find_map(|a| a.source_card_id());

        match parent_id {
            Some(id) => Ok(Some(self.get_card(id, args).await?)),
            None => Ok(None),
        }
    }

    /// Cadeia de cópias, do pai mais próximo até o original
    pub async fn get_ancestor_cards(&self, card_id: &str, args: &Arguments) -> Result<Vec<Card>> {
        let mut visited = HashSet::from([require_id("card", card_id)?.to_string()]);
        let mut ancestors = Vec::new();
        let mut current = card_id.trim().to_string();

        while let Some(parent) = self.get_parent_card(&current, args).await? {
            if !visited.insert(parent.id.clone()) {
                tracing::warn!(
                    "⚠️ Ciclo de cópias detectado em {} (card {} já visitado)",
                    card_id,
                    parent.id
                );
                break;
            }
            current = parent.id.clone();
            ancestors.push(parent);
        }

        Ok(ancestors)
    }

    /// Adiciona um membro ao card; retorna os membros atuais do card
    ///
    /// `POST /1/cards/{card_id}/idMembers?value={member_id}`
    pub async fn add_member_to_card(&self, card_id: &str, member_id: &str) -> Result<Vec<Member>> {
        let path = format!("cards/{}/idMembers", path_id("card", card_id)?);
        let args = Arguments::new().with("value", require_id("member", member_id)?);

        let members: Vec<Member> = self.post_json(&path, &args).await?;

        tracing::info!("👤 Membro {} adicionado ao card {}", member_id, card_id);
        Ok(members)
    }

    /// Anexa um link ao card; retorna o anexo criado
    ///
    /// `POST /1/cards/{card_id}/attachments?url=...&name=...`
    pub async fn add_url_attachment(
        &self,
        card_id: &str,
        attachment: &Attachment,
    ) -> Result<Attachment> {
        let path = format!("cards/{}/attachments", path_id("card", card_id)?);

        if attachment.url.trim().is_empty() {
            return Err(TrelloError::ValidationError(
                "attachment url is empty".to_string(),
            ));
        }

        let mut args = Arguments::new().with("url", attachment.url.as_str());
        if !attachment.name.is_empty() {
            args.insert("name", attachment.name.as_str());
        }
        if let Some(mime) = &attachment.mime_type {
            args.insert("mimeType", mime.as_str());
        }

        let created: Attachment = self.post_json(&path, &args).await?;

        tracing::info!("📎 Anexo {} criado no card {}", created.id, card_id);
        Ok(created)
    }
}

/// Campos do card enviados na criação
fn card_create_args(card: &Card) -> Arguments {
    let mut args = Arguments::new().with("name", card.name.as_str());

    if !card.desc.is_empty() {
        args.insert("desc", card.desc.as_str());
    }
    if !card.id_list.is_empty() {
        args.insert("idList", card.id_list.as_str());
    }
    if !card.id_labels.is_empty() {
        args.insert("idLabels", card.id_labels.join(","));
    }
    if !card.id_members.is_empty() {
        args.insert("idMembers", card.id_members.join(","));
    }
    if let Some(due) = card.due {
        args.insert("due", due.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    if let Some(start) = card.start {
        args.insert("start", start.to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    if card.due_complete {
        args.insert("dueComplete", "true");
    }

    args
}
